use notekeep_core::db::migrations::latest_version;
use notekeep_core::db::{open_db, open_db_in_memory, DbError};
use notekeep_core::{BlobError, BlobStore, SqliteBlobStore};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "blobs");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notekeep.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "blobs");
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

    let err = SqliteBlobStore::open(&path).err().unwrap();
    assert!(matches!(
        err,
        BlobError::Db(DbError::UnsupportedSchemaVersion { .. })
    ));
}

#[test]
fn sqlite_blob_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");

    {
        let mut store = SqliteBlobStore::open(&path).unwrap();
        store.set("keep_notes", "[]").unwrap();
    }

    let store = SqliteBlobStore::open(&path).unwrap();
    assert_eq!(store.get("keep_notes").unwrap().as_deref(), Some("[]"));
    assert_eq!(store.get("other").unwrap(), None);
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
