//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define per-entity data access contracts (find all, find by id, save,
//!   delete by id).
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Write paths call the model `validate()` before SQL mutations.
//! - Repository APIs return semantic errors (`NotFound`, `Referenced`) in
//!   addition to DB transport errors.

use crate::db::DbError;
use crate::model::{EntityKind, ValidationError};
use rusqlite::{ffi, Connection, ErrorCode};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_repo;
pub mod employee_repo;
pub mod project_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by every entity repository.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound { entity: EntityKind, id: i64 },
    /// Delete refused because other rows still reference the target.
    Referenced { entity: EntityKind, id: i64 },
    MissingRequiredTable(&'static str),
    /// A stored row fails model validation on read.
    InvalidData(String),
}

impl RepoError {
    pub(crate) fn invalid_row(entity: EntityKind, id: i64, err: ValidationError) -> Self {
        Self::InvalidData(format!("{entity} row {id}: {err}"))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found with id: {id}"),
            Self::Referenced { entity, id } => {
                write!(f, "{entity} {id} is still referenced by other records")
            }
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
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

pub(crate) fn ensure_tables(conn: &Connection, tables: &[&'static str]) -> RepoResult<()> {
    for table in tables {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }
    Ok(())
}

pub(crate) fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}

#[cfg(test)]
mod tests {
    use super::is_foreign_key_violation;
    use crate::db::open_db_in_memory;

    #[test]
    fn foreign_key_failures_are_detected() {
        let conn = open_db_in_memory().unwrap();
        let err = conn
            .execute(
                "INSERT INTO employee (name, position, department_id) VALUES ('Emily', 'Analyst', 99);",
                [],
            )
            .unwrap_err();
        assert!(is_foreign_key_violation(&err));
    }

    #[test]
    fn other_constraint_failures_are_not_foreign_key_violations() {
        let conn = open_db_in_memory().unwrap();
        conn.execute("INSERT INTO department (id, name) VALUES (1, 'Finance');", [])
            .unwrap();

        let duplicate = conn
            .execute("INSERT INTO department (id, name) VALUES (1, 'Legal');", [])
            .unwrap_err();
        assert!(!is_foreign_key_violation(&duplicate));

        let blank = conn
            .execute("INSERT INTO department (name) VALUES ('  ');", [])
            .unwrap_err();
        assert!(!is_foreign_key_violation(&blank));
    }
}
