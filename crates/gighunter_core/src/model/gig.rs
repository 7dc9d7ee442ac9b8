//! Gig domain model: a single live event.

use crate::model::entity::{Entity, EntityId};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Collection name for persisted gigs.
pub const GIGS_COLLECTION: &str = "gigs";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gig {
    /// Document key; `None` until first insert.
    #[serde(skip)]
    pub id: Option<EntityId>,
    pub artist: String,
    pub venue: String,
    /// Event start in the local time zone.
    pub date: Option<DateTime<Local>>,
    pub ticket_uri: String,
}

impl Gig {
    /// Creates an unsaved gig without date or ticket link.
    pub fn new(artist: impl Into<String>, venue: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            venue: venue.into(),
            ..Self::default()
        }
    }
}

impl Entity for Gig {
    const COLLECTION: &'static str = GIGS_COLLECTION;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
