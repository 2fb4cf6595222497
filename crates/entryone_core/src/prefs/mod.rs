//! Persisted preference slot.
//!
//! # Responsibility
//! - Open and bootstrap the SQLite store backing cross-session preferences.
//! - Keep SQL details inside this module.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`; databases written
//!   by a newer binary are rejected instead of silently reinterpreted.
//! - Returned connections have `foreign_keys=ON` and the schema applied.

use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub mod theme_repo;

pub use theme_repo::{SqliteThemeRepository, ThemeRepository};

/// Result type for preference storage APIs.
pub type PrefsResult<T> = Result<T, PrefsError>;

/// Preference storage error.
#[derive(Debug)]
pub enum PrefsError {
    Sqlite(rusqlite::Error),
    /// The database was written by a newer schema than this binary knows.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "preference schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for PrefsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

const SCHEMA_VERSION: u32 = 1;
const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS preferences (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";

/// Opens the preference database file and bootstraps the schema.
pub fn open_prefs_db(path: impl AsRef<Path>) -> PrefsResult<Connection> {
    let conn = Connection::open(path)?;
    match bootstrap(&conn) {
        Ok(()) => {
            info!("event=prefs_open module=prefs status=ok mode=file");
            Ok(conn)
        }
        Err(err) => {
            error!("event=prefs_open module=prefs status=error mode=file error={err}");
            Err(err)
        }
    }
}

/// Opens an in-memory preference database (tests and previews).
pub fn open_prefs_db_in_memory() -> PrefsResult<Connection> {
    let conn = Connection::open_in_memory()?;
    bootstrap(&conn)?;
    Ok(conn)
}

fn bootstrap(conn: &Connection) -> PrefsResult<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;

    let db_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if db_version > SCHEMA_VERSION {
        return Err(PrefsError::UnsupportedSchemaVersion {
            db_version,
            latest_supported: SCHEMA_VERSION,
        });
    }
    if db_version < SCHEMA_VERSION {
        conn.execute_batch(SCHEMA_SQL)?;
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }
    Ok(())
}
