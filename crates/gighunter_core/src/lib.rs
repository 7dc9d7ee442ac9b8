//! Persistence core for GigHunter.
//! Domain models, document-store repositories and the test support used to
//! verify them.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod testkit;

pub use db::{open_db, open_db_in_memory, open_db_with_config, DbConfig, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity::{new_entity_id, parse_entity_id, Entity, EntityId};
pub use model::gig::Gig;
pub use model::source::Source;
pub use repo::{
    DocumentRepository, GigRepository, RepoError, RepoResult, Repository, SourceRepository,
};
