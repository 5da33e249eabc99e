//! Storage bootstrap for the staff directory.
//!
//! # Responsibility
//! - Hand out connections that are ready for the repositories: foreign keys
//!   enforced, busy timeout set, schema at `migrations::latest_version()`.
//! - Offer `ping_db` as the liveness check behind the connection check endpoint.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`; a database stamped with
//!   a newer version is refused rather than downgraded.
//! - The relational rules the services rely on (department restrict, join
//!   row cascade) are enforced by SQLite, so `foreign_keys=ON` is part of
//!   every returned connection.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory, ping_db};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or migrating a database.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was migrated by a newer binary.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
