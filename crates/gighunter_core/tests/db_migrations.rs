use gighunter_core::db::migrations::latest_version;
use gighunter_core::db::{open_db, open_db_in_memory, open_db_with_config, DbConfig, DbError};
use gighunter_core::{Repository, Source, SourceRepository};
use rusqlite::Connection;
use std::time::Duration;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "documents");
}

#[test]
fn in_memory_stores_are_isolated() {
    let first = open_db_in_memory().unwrap();
    let second = open_db_in_memory().unwrap();

    SourceRepository::try_new(&first)
        .unwrap()
        .add(&mut Source::new("SeeTickets", "https://www.seetickets.com"))
        .unwrap();

    assert_eq!(SourceRepository::try_new(&second).unwrap().count().unwrap(), 0);
}

#[test]
fn documents_survive_reopening_a_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gighunter.db");

    let conn_first = open_db(&path).unwrap();
    let mut source = Source::new("Ents24", "https://www.ents24.com");
    let id = SourceRepository::try_new(&conn_first)
        .unwrap()
        .add(&mut source)
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let loaded = SourceRepository::try_new(&conn_second)
        .unwrap()
        .get_by_id(&id.to_hex())
        .unwrap();
    assert_eq!(loaded, Some(source));
}

#[test]
fn open_with_custom_config_applies_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let config = DbConfig {
        busy_timeout: Duration::from_millis(250),
        foreign_keys: false,
    };

    let conn = open_db_with_config(dir.path().join("custom.db"), &config).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let foreign_keys: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(foreign_keys, 0);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn documents_table_rejects_malformed_keys() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO documents (collection, oid, body) VALUES ('sources', 'short', '{}');",
        [],
    );
    assert!(result.is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
