//! Generic repository over JSON documents in the `documents` table.
//!
//! # Responsibility
//! - Implement `Repository<T>` for any `Entity` against its collection.
//! - Translate external hex ids to store keys and JSON bodies to models.
//!
//! # Invariants
//! - Every statement is scoped to `T::COLLECTION`.
//! - The `oid` column is the only source of an entity's id on reads.
//! - Listing order is insertion order (`rowid ASC`).

use crate::db::migrations::latest_version;
use crate::model::entity::{new_entity_id, parse_entity_id, Entity, EntityId};
use crate::repo::{RepoError, RepoResult, Repository};
use log::debug;
use rusqlite::{params, Connection, Row};
use std::marker::PhantomData;

const DOCUMENT_SELECT_SQL: &str = "SELECT oid, body FROM documents";

/// Repository bound to one collection of a borrowed store connection.
///
/// Holds no state besides the connection reference, so it is cheap to build
/// per call or keep around.
pub struct DocumentRepository<'conn, T> {
    conn: &'conn Connection,
    _entity: PhantomData<fn() -> T>,
}

impl<'conn, T: Entity> DocumentRepository<'conn, T> {
    /// Binds the repository without checking the schema.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    /// Binds the repository after verifying the connection was migrated.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` is not latest.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` for a foreign schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_document_store_ready(conn)?;
        Ok(Self::new(conn))
    }

    /// Collection this repository reads and writes.
    pub fn collection(&self) -> &'static str {
        T::COLLECTION
    }

    fn query_documents(&self, sql: &str, params: impl rusqlite::Params) -> RepoResult<Vec<T>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut entities = Vec::new();

        while let Some(row) = rows.next()? {
            entities.push(parse_document_row::<T>(row)?);
        }

        Ok(entities)
    }
}

impl<T: Entity> Repository<T> for DocumentRepository<'_, T> {
    fn add(&self, entity: &mut T) -> RepoResult<EntityId> {
        let id = entity.id().unwrap_or_else(new_entity_id);
        let body = serde_json::to_string(&*entity).map_err(RepoError::Serialization)?;

        self.conn.execute(
            "INSERT INTO documents (collection, oid, body) VALUES (?1, ?2, ?3);",
            params![T::COLLECTION, id.to_hex(), body],
        )?;
        entity.assign_id(id);

        debug!(
            "event=document_insert module=repo status=ok collection={} id={}",
            T::COLLECTION,
            id
        );
        Ok(id)
    }

    fn get_all(&self) -> RepoResult<Vec<T>> {
        self.query_documents(
            &format!("{DOCUMENT_SELECT_SQL} WHERE collection = ?1 ORDER BY rowid ASC;"),
            [T::COLLECTION],
        )
    }

    fn get_by_id(&self, id: &str) -> RepoResult<Option<T>> {
        let Some(id) = parse_entity_id(id) else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(&format!(
            "{DOCUMENT_SELECT_SQL} WHERE collection = ?1 AND oid = ?2;"
        ))?;
        let mut rows = stmt.query(params![T::COLLECTION, id.to_hex()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_document_row(row)?));
        }

        Ok(None)
    }

    fn find_by_field(&self, field: &str, value: &str) -> RepoResult<Vec<T>> {
        if !is_plain_field_name(field) {
            return Err(RepoError::InvalidField(field.to_string()));
        }

        self.query_documents(
            &format!(
                "{DOCUMENT_SELECT_SQL}
                 WHERE collection = ?1
                   AND json_extract(body, ?2) = ?3
                 ORDER BY rowid ASC;"
            ),
            params![T::COLLECTION, format!("$.{field}"), value],
        )
    }

    fn update_by_id(&self, id: &str, values: &T) -> RepoResult<bool> {
        let Some(id) = parse_entity_id(id) else {
            debug!(
                "event=document_update module=repo status=skipped collection={} reason=malformed_id",
                T::COLLECTION
            );
            return Ok(false);
        };
        let body = serde_json::to_string(values).map_err(RepoError::Serialization)?;

        let changed = self.conn.execute(
            "UPDATE documents
             SET
                body = ?3,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE collection = ?1 AND oid = ?2;",
            params![T::COLLECTION, id.to_hex(), body],
        )?;

        debug!(
            "event=document_update module=repo status=ok collection={} id={} matched={}",
            T::COLLECTION,
            id,
            changed
        );
        Ok(changed > 0)
    }

    fn delete_by_id(&self, id: &str) -> RepoResult<bool> {
        let Some(id) = parse_entity_id(id) else {
            debug!(
                "event=document_delete module=repo status=skipped collection={} reason=malformed_id",
                T::COLLECTION
            );
            return Ok(false);
        };

        let removed = self.conn.execute(
            "DELETE FROM documents WHERE collection = ?1 AND oid = ?2;",
            params![T::COLLECTION, id.to_hex()],
        )?;

        debug!(
            "event=document_delete module=repo status=ok collection={} id={} removed={}",
            T::COLLECTION,
            id,
            removed
        );
        Ok(removed == 1)
    }

    fn count(&self) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1;",
            [T::COLLECTION],
            |row| row.get(0),
        )?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative document count {count}")))
    }
}

fn parse_document_row<T: Entity>(row: &Row<'_>) -> RepoResult<T> {
    let oid_text: String = row.get("oid")?;
    let id = parse_entity_id(&oid_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid object id `{oid_text}` in {}.oid",
            T::COLLECTION
        ))
    })?;

    let body: String = row.get("body")?;
    let mut entity: T = serde_json::from_str(&body).map_err(|err| {
        RepoError::InvalidData(format!(
            "document {oid_text} in {} does not decode: {err}",
            T::COLLECTION
        ))
    })?;
    entity.assign_id(id);
    Ok(entity)
}

fn is_plain_field_name(field: &str) -> bool {
    !field.is_empty()
        && field
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn ensure_document_store_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "documents")? {
        return Err(RepoError::MissingRequiredTable("documents"));
    }

    for column in ["collection", "oid", "body", "created_at", "updated_at"] {
        if !table_has_column(conn, "documents", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "documents",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::is_plain_field_name;

    #[test]
    fn plain_field_names_are_accepted() {
        assert!(is_plain_field_name("name"));
        assert!(is_plain_field_name("ticket_uri"));
        assert!(is_plain_field_name("field2"));
    }

    #[test]
    fn path_like_field_names_are_rejected() {
        assert!(!is_plain_field_name(""));
        assert!(!is_plain_field_name("a.b"));
        assert!(!is_plain_field_name("$.name"));
        assert!(!is_plain_field_name("name' OR 1=1"));
    }
}
