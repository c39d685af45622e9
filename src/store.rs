//! Reading the `aiService.prompts` row out of a workspace state database.
//!
//! Cursor's `state.vscdb` is a plain SQLite file with a single key-value table:
//!
//! ```sql
//! CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB);
//! ```
//!
//! Database access sits behind [`StateStore`] so the extraction rules can be exercised
//! against an in-memory store.

use eyre::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;

/// Key-value table holding editor state.
pub const ITEM_TABLE: &str = "ItemTable";

/// Key under which the AI panel stores its prompt history.
pub const PROMPTS_KEY: &str = "aiService.prompts";

/// Opens state databases. Each call yields an independent session.
pub trait StateStore {
    type Session: StoreSession;

    fn open(&self, path: &Path) -> Result<Self::Session>;
}

/// One open database. Dropping the session releases it.
pub trait StoreSession {
    /// Names of all tables in the database.
    fn table_names(&self) -> Result<Vec<String>>;

    /// Value stored in `ItemTable` under `key`, if any.
    fn item_value(&self, key: &str) -> Result<Option<String>>;
}

/// [`StateStore`] backed by SQLite files on disk, opened read-only.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteStore;

pub struct SqliteSession {
    conn: Connection,
}

impl StateStore for SqliteStore {
    type Session = SqliteSession;

    fn open(&self, path: &Path) -> Result<SqliteSession> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .wrap_err_with(|| format!("Failed to open database: {}", path.display()))?;
        Ok(SqliteSession { conn })
    }
}

impl StoreSession for SqliteSession {
    fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .wrap_err("Failed to prepare table listing")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Failed to list tables")?;
        Ok(names)
    }

    fn item_value(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM ItemTable WHERE key = ?1",
                [key],
                |row| {
                    // The column is declared BLOB but usually holds TEXT.
                    Ok(match row.get_ref(0)? {
                        ValueRef::Text(b) | ValueRef::Blob(b) => {
                            Some(String::from_utf8_lossy(b).into_owned())
                        }
                        ValueRef::Integer(i) => Some(i.to_string()),
                        ValueRef::Real(f) => Some(f.to_string()),
                        ValueRef::Null => None,
                    })
                },
            )
            .optional()
            .wrap_err_with(|| format!("Failed to read {} from {}", key, ITEM_TABLE))?;
        Ok(value.flatten())
    }
}

/// Result of looking for the prompt row in one database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Raw stored value, expected to be JSON text.
    Found(String),
    /// The table or the row does not exist.
    Missing,
    /// The file could not be opened or queried as a database. Already logged.
    Unreadable,
}

impl Extraction {
    pub fn into_value(self) -> Option<String> {
        match self {
            Extraction::Found(raw) => Some(raw),
            Extraction::Missing | Extraction::Unreadable => None,
        }
    }
}

/// Fetch the raw `aiService.prompts` value from the database at `path`.
///
/// Never fails: open or query errors are logged and reported as [`Extraction::Unreadable`]
/// so one corrupt file cannot abort a batch.
pub fn extract<S: StateStore>(store: &S, path: &Path) -> Extraction {
    match read_prompts_value(store, path) {
        Ok(Some(raw)) => Extraction::Found(raw),
        Ok(None) => Extraction::Missing,
        Err(e) => {
            tracing::error!("Error extracting {} from {}: {:#}", PROMPTS_KEY, path.display(), e);
            Extraction::Unreadable
        }
    }
}

fn read_prompts_value<S: StateStore>(store: &S, path: &Path) -> Result<Option<String>> {
    let session = store.open(path)?;
    let tables = session
        .table_names()
        .wrap_err_with(|| format!("Error reading tables from {}", path.display()))?;
    if !tables.iter().any(|t| t == ITEM_TABLE) {
        tracing::debug!("No {} in {}", ITEM_TABLE, path.display());
        return Ok(None);
    }
    session.item_value(PROMPTS_KEY)
}
