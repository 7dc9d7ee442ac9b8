//! Source domain model: one gig-listing website or vendor integration.
//!
//! # Invariants
//! - `name` is a display label and is not unique across sources.
//! - `token_expiry_date` is interpreted in the local time zone.

use crate::model::entity::{Entity, EntityId};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Collection name for persisted sources.
pub const SOURCES_COLLECTION: &str = "sources";

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    /// Document key; `None` until first insert.
    #[serde(skip)]
    pub id: Option<EntityId>,
    pub name: String,
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub api_token: String,
    pub token_expiry_date: Option<DateTime<Local>>,
}

impl Source {
    /// Creates an unsaved source with empty credentials.
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Returns whether the API token is missing or expired at `now`.
    pub fn token_expired_at(&self, now: DateTime<Local>) -> bool {
        match self.token_expiry_date {
            Some(expiry) => self.api_token.is_empty() || expiry <= now,
            None => true,
        }
    }
}

// Credentials stay out of debug output and test failure messages.
impl Debug for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("api_token", &redact(&self.api_token))
            .field("token_expiry_date", &self.token_expiry_date)
            .finish()
    }
}

impl Entity for Source {
    const COLLECTION: &'static str = SOURCES_COLLECTION;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}
