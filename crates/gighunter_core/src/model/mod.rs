//! Domain models persisted by the gig tracker.
//!
//! # Invariants
//! - Every model implements `Entity` and is keyed by an `EntityId`.
//! - Equality covers every field, the id included.

pub mod entity;
pub mod gig;
pub mod source;
