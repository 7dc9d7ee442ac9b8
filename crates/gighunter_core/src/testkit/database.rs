//! Raw fixture access to one collection of the document store.
//!
//! Statements here never call into `repo::DocumentRepository`; they only
//! share the table layout with it.

use crate::model::entity::{Entity, EntityId};
use crate::repo::{RepoError, RepoResult};
use bson::oid::ObjectId;
use rusqlite::{params, Connection};
use std::marker::PhantomData;

/// Direct reader/writer for the documents of one collection.
pub struct DatabaseUtilities<'conn, T> {
    conn: &'conn Connection,
    collection: String,
    _entity: PhantomData<fn() -> T>,
}

impl<'conn, T: Entity> DatabaseUtilities<'conn, T> {
    /// Targets the entity's own collection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::for_collection(conn, T::COLLECTION)
    }

    /// Targets an explicitly named collection.
    pub fn for_collection(conn: &'conn Connection, collection: impl Into<String>) -> Self {
        Self {
            conn,
            collection: collection.into(),
            _entity: PhantomData,
        }
    }

    /// Inserts `item` as a raw document and writes the generated id back.
    pub fn add_item(&self, item: &mut T) -> RepoResult<EntityId> {
        let id = item.id().unwrap_or_else(ObjectId::new);
        let body = serde_json::to_string(&*item).map_err(RepoError::Serialization)?;
        self.conn.execute(
            "INSERT INTO documents (collection, oid, body) VALUES (?1, ?2, ?3);",
            params![self.collection, id.to_hex(), body],
        )?;
        item.assign_id(id);
        Ok(id)
    }

    /// Returns the documents keyed by `id`; empty means not found.
    pub fn find_record_by_id(&self, id: &EntityId) -> RepoResult<Vec<T>> {
        let mut stmt = self
            .conn
            .prepare("SELECT body FROM documents WHERE collection = ?1 AND oid = ?2;")?;
        let mut rows = stmt.query(params![self.collection, id.to_hex()])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            let body: String = row.get(0)?;
            let mut record: T = serde_json::from_str(&body).map_err(|err| {
                RepoError::InvalidData(format!("fixture document {id} does not decode: {err}"))
            })?;
            record.assign_id(*id);
            records.push(record);
        }

        Ok(records)
    }

    /// Counts every document in the collection.
    pub fn count_records_in_collection(&self) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1;",
            [&self.collection],
            |row| row.get(0),
        )?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    /// Drops every document in the collection and returns how many went.
    pub fn remove_collection(&self) -> RepoResult<usize> {
        let removed = self.conn.execute(
            "DELETE FROM documents WHERE collection = ?1;",
            [&self.collection],
        )?;
        Ok(removed)
    }
}
