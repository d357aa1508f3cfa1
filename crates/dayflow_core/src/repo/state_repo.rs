//! Snapshot repository contract and its SQLite/in-memory backends.
//!
//! # Responsibility
//! - Persist the serialized snapshot under one fixed key.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - SQLite construction verifies the migrated `kv_store` schema first.
//! - `save` fully replaces the previous payload for the key.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key identifying this application's saved state.
pub const STATE_STORAGE_KEY: &str = "dayflow-dashboard-state";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing from the connection schema.
    MissingRequiredTable(&'static str),
    /// Required column is missing from the expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "state repository requires schema version {expected_version}, connection has {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "state repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "state repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value persistence contract for the serialized snapshot.
///
/// The store treats writes as fire-and-forget; implementations should fail
/// fast rather than block.
pub trait StateRepository {
    /// Loads the persisted payload. `None` when nothing was saved yet.
    fn load(&self) -> RepoResult<Option<String>>;
    /// Replaces the persisted payload.
    fn save(&self, payload: &str) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository over the `kv_store` table.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load(&self) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [STATE_STORAGE_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&self, payload: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![STATE_STORAGE_KEY, payload],
        )?;
        Ok(())
    }
}

/// In-memory snapshot repository for tests and ephemeral embedding.
#[derive(Debug, Default)]
pub struct MemoryStateRepository {
    value: RefCell<Option<String>>,
}

impl MemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository preloaded with a payload, as if a previous
    /// session had saved it.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(payload.into())),
        }
    }
}

impl StateRepository for MemoryStateRepository {
    fn load(&self) -> RepoResult<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, payload: &str) -> RepoResult<()> {
        *self.value.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "kv_store")? {
        return Err(RepoError::MissingRequiredTable("kv_store"));
    }

    for column in ["key", "value", "updated_at"] {
        if !table_has_column(conn, "kv_store", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "kv_store",
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
