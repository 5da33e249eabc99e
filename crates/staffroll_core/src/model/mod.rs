//! Domain model for departments, employees and projects.
//!
//! # Responsibility
//! - Define canonical records used by repositories and services.
//! - Own field-level validation shared by every write path.
//!
//! # Invariants
//! - Ids are database-generated surrogate keys and always positive.
//! - Relations are stored as ids only; there are no owning back-references.
//!   Department -> employees and project -> employees are resolved on demand.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department;
pub mod employee;
pub mod project;

/// Surrogate key of a `department` row.
pub type DepartmentId = i64;
/// Surrogate key of an `employee` row.
pub type EmployeeId = i64;
/// Surrogate key of a `project` row.
pub type ProjectId = i64;

/// Persisted entity family, used to label not-found and conflict errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Department,
    Employee,
    Project,
}

impl EntityKind {
    /// Capitalized label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Department => "Department",
            Self::Employee => "Employee",
            Self::Project => "Project",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Field-level validation failure for domain records.
///
/// Field labels match the ones used in request validation messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    BlankField(&'static str),
    /// A reference or key is zero or negative.
    InvalidId { field: &'static str, value: i64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} must not be empty"),
            Self::InvalidId { field, .. } => write!(f, "{field} must be positive"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}

pub(crate) fn require_id(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::InvalidId { field, value });
    }
    Ok(())
}
