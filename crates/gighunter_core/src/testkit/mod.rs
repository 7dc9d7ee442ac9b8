//! Test support: fixture store access, assertors and fixture builders.
//!
//! # Responsibility
//! - Seed and inspect collections without going through `repo`.
//! - Compare expected and actual entities field by field.
//!
//! # Invariants
//! - Nothing in this module calls repository code, so repository tests
//!   are checked against an independent oracle.

pub mod assertor;
pub mod database;
pub mod fixtures;

pub use assertor::{GigAssertor, ModelAssertor, SourceAssertor};
pub use database::DatabaseUtilities;
