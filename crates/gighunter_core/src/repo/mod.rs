//! Repository contract and document-store implementations.
//!
//! # Responsibility
//! - Define one CRUD contract shared by every entity type.
//! - Keep SQL and JSON document details inside the persistence boundary.
//!
//! # Invariants
//! - Malformed or absent ids are benign: `None`, empty `Vec` or `false`.
//! - Only store failures surface as `Err(RepoError)`.

use crate::db::DbError;
use crate::model::entity::{Entity, EntityId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod document_repo;
pub mod gig_repo;
pub mod source_repo;

pub use document_repo::DocumentRepository;
pub use gig_repo::GigRepository;
pub use source_repo::SourceRepository;

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level failures; never used for "not found".
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite or bootstrap error.
    Db(DbError),
    /// Entity could not be encoded as a JSON document.
    Serialization(serde_json::Error),
    /// Persisted document cannot be decoded into its entity type.
    InvalidData(String),
    /// Lookup field name is not a plain top-level document key.
    InvalidField(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to encode document: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted document: {message}"),
            Self::InvalidField(field) => write!(f, "invalid lookup field `{field}`"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Uniform CRUD contract over one entity type.
///
/// Ids are accepted as external hex text; translation to the store-native
/// key happens inside the implementation.
pub trait Repository<T: Entity> {
    /// Inserts `entity`, generating and assigning an id when it has none.
    fn add(&self, entity: &mut T) -> RepoResult<EntityId>;
    /// Returns every entity in the collection; empty when there are none.
    fn get_all(&self) -> RepoResult<Vec<T>>;
    /// Returns the matching entity, or `None` for absent or malformed ids.
    fn get_by_id(&self, id: &str) -> RepoResult<Option<T>>;
    /// Returns all entities whose top-level `field` equals `value` exactly.
    fn find_by_field(&self, field: &str, value: &str) -> RepoResult<Vec<T>>;
    /// Replaces the stored fields of the document keyed by `id`.
    ///
    /// `values.id()` is ignored. Returns `false` when nothing matched.
    fn update_by_id(&self, id: &str, values: &T) -> RepoResult<bool>;
    /// Removes the document keyed by `id`; `true` iff one was removed.
    fn delete_by_id(&self, id: &str) -> RepoResult<bool>;
    /// Number of documents in the collection.
    fn count(&self) -> RepoResult<u64>;
}
