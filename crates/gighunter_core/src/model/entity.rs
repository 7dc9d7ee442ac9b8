//! Identity contract shared by every persisted entity.
//!
//! # Invariants
//! - `id` is `None` until the entity is first persisted.
//! - Once assigned, repositories never rewrite an entity's id.
//! - The id is the document key, never part of the serialized body.

use bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Store-native 12-byte object id, rendered externally as 24 hex chars.
pub type EntityId = ObjectId;

/// A domain record stored as one document in a named collection.
pub trait Entity: Serialize + DeserializeOwned {
    /// Collection holding every document of this entity type.
    const COLLECTION: &'static str;

    /// Returns the store-assigned id, if the entity has been persisted.
    fn id(&self) -> Option<EntityId>;

    /// Attaches the document key after insert or load.
    fn assign_id(&mut self, id: EntityId);
}

/// Generates a fresh object id.
pub fn new_entity_id() -> EntityId {
    ObjectId::new()
}

/// Parses external hex text into an id.
///
/// Malformed text yields `None` so callers can treat it exactly like an
/// absent id.
pub fn parse_entity_id(value: &str) -> Option<EntityId> {
    ObjectId::parse_str(value).ok()
}
