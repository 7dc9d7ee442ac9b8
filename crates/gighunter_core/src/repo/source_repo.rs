//! Source repository bound to the `sources` collection.

use crate::model::source::Source;
use crate::repo::{DocumentRepository, RepoResult, Repository};

/// Repository for gig-listing sources.
pub type SourceRepository<'conn> = DocumentRepository<'conn, Source>;

impl DocumentRepository<'_, Source> {
    /// Returns every source named exactly `name`.
    ///
    /// Names are not unique, so several sources may come back.
    pub fn get_by_name(&self, name: &str) -> RepoResult<Vec<Source>> {
        self.find_by_field("name", name)
    }
}
