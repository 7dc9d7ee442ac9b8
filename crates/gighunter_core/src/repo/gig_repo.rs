//! Gig repository bound to the `gigs` collection.

use crate::model::gig::Gig;
use crate::repo::{DocumentRepository, RepoResult, Repository};

/// Repository for individual gigs.
pub type GigRepository<'conn> = DocumentRepository<'conn, Gig>;

impl DocumentRepository<'_, Gig> {
    /// Returns every gig by `artist` (exact, case-sensitive).
    pub fn get_by_artist(&self, artist: &str) -> RepoResult<Vec<Gig>> {
        self.find_by_field("artist", artist)
    }

    /// Returns every gig at `venue` (exact, case-sensitive).
    pub fn get_by_venue(&self, venue: &str) -> RepoResult<Vec<Gig>> {
        self.find_by_field("venue", venue)
    }
}
