use daykit_core::storage::migrations::latest_version;
use daykit_core::{open_store, open_store_in_memory, KeyValueStore, StorageError};
use rusqlite::Connection;

#[test]
fn get_of_absent_key_is_none() {
    let store = open_store_in_memory().unwrap();
    assert_eq!(store.get("missing").unwrap(), None);
}

#[test]
fn set_get_remove_roundtrip() {
    let store = open_store_in_memory().unwrap();

    store.set("todos", "[]").unwrap();
    assert_eq!(store.get("todos").unwrap().as_deref(), Some("[]"));

    store.set("todos", "[1,2]").unwrap();
    assert_eq!(
        store.get("todos").unwrap().as_deref(),
        Some("[1,2]"),
        "set overwrites the whole value"
    );

    store.remove("todos").unwrap();
    assert_eq!(store.get("todos").unwrap(), None);
}

#[test]
fn keys_are_independent() {
    let store = open_store_in_memory().unwrap();
    store.set("todos", "[]").unwrap();
    store.set("shopping_cart", "{}").unwrap();

    store.remove("todos").unwrap();
    assert_eq!(store.get("shopping_cart").unwrap().as_deref(), Some("{}"));
}

#[test]
fn file_backed_store_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daykit.db");

    {
        let store = open_store(&path).unwrap();
        store.set("todos", "[\"persisted\"]").unwrap();
    }

    let reopened = open_store(&path).unwrap();
    assert_eq!(
        reopened.get("todos").unwrap().as_deref(),
        Some("[\"persisted\"]")
    );
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_store(&path).unwrap_err();
    match err {
        StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}
