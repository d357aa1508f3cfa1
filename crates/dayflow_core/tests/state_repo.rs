use dayflow_core::db::migrations::latest_version;
use dayflow_core::db::{open_db, open_db_in_memory};
use dayflow_core::{MemoryStateRepository, RepoError, SqliteStateRepository, StateRepository};
use rusqlite::Connection;

#[test]
fn load_returns_none_before_any_save() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::try_new(&conn).unwrap();

    assert_eq!(repo.load().unwrap(), None);
}

#[test]
fn save_then_load_round_trips_the_payload() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::try_new(&conn).unwrap();

    repo.save("{\"focus\":\"hello\"}").unwrap();

    assert_eq!(repo.load().unwrap().as_deref(), Some("{\"focus\":\"hello\"}"));
}

#[test]
fn save_replaces_the_previous_payload() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::try_new(&conn).unwrap();

    repo.save("first").unwrap();
    repo.save("second").unwrap();

    assert_eq!(repo.load().unwrap().as_deref(), Some("second"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1, "one fixed key means one row");
}

#[test]
fn payload_survives_reopening_a_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dayflow.db");

    let conn = open_db(&path).unwrap();
    let repo = SqliteStateRepository::try_new(&conn).unwrap();
    repo.save("persisted across sessions").unwrap();
    drop(repo);
    drop(conn);

    let conn = open_db(&path).unwrap();
    let repo = SqliteStateRepository::try_new(&conn).unwrap();
    assert_eq!(
        repo.load().unwrap().as_deref(),
        Some("persisted across sessions")
    );
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteStateRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_kv_store_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteStateRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("kv_store"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE kv_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteStateRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "kv_store",
            column: "updated_at"
        })
    ));
}

#[test]
fn memory_repository_mirrors_the_kv_contract() {
    let repo = MemoryStateRepository::new();
    assert_eq!(repo.load().unwrap(), None);

    repo.save("a").unwrap();
    repo.save("b").unwrap();
    assert_eq!(repo.load().unwrap().as_deref(), Some("b"));

    let preloaded = MemoryStateRepository::with_payload("from last session");
    assert_eq!(
        preloaded.load().unwrap().as_deref(),
        Some("from last session")
    );
}
