use quicknotes_core::store::migrations::latest_version;
use quicknotes_core::{KeyValueStore, SqliteStore, StoreError};
use rusqlite::Connection;

#[test]
fn in_memory_store_round_trips_values() {
    let mut store = SqliteStore::open_in_memory().unwrap();

    assert_eq!(store.get("missing").unwrap(), None);

    store.set("k", "v1").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn remove_on_absent_key_is_not_an_error() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.remove("never-written").unwrap();
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("store.db");

    {
        let mut store = SqliteStore::open(&db_path).unwrap();
        store.set("quickNotes", "[]").unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.get("quickNotes").unwrap().as_deref(), Some("[]"));
}

#[test]
fn open_applies_migrations_up_to_latest_version() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("store.db");

    {
        SqliteStore::open(&db_path).unwrap();
    }

    let conn = Connection::open(&db_path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn open_rejects_a_newer_schema_version() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("store.db");

    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    }

    let err = SqliteStore::open(&db_path).unwrap_err();
    assert!(matches!(
        err,
        StoreError::UnsupportedSchemaVersion {
            db_version: 99,
            ..
        }
    ));
}
