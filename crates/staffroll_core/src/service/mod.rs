//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Turn missing rows into typed not-found errors.
//! - Keep the HTTP layer decoupled from storage details.

use crate::model::{EntityKind, ValidationError};
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_service;
pub mod employee_service;
pub mod project_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error shared by department, employee and project use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input failed field-level validation.
    Validation(ValidationError),
    /// Target entity of the use-case does not exist.
    NotFound { entity: EntityKind, id: i64 },
    /// Referenced department does not exist.
    DepartmentNotFound(i64),
    /// None of the referenced projects exist.
    ProjectsNotFound,
    /// Delete refused because employees still reference the target.
    StillReferenced { entity: EntityKind, id: i64 },
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found with id: {id}"),
            Self::DepartmentNotFound(_) => f.write_str("Department not found"),
            Self::ProjectsNotFound => f.write_str("One or more projects not found"),
            Self::StillReferenced { entity, id } => {
                write!(f, "{entity} {id} still has employees assigned")
            }
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, id } => Self::NotFound { entity, id },
            RepoError::Referenced { entity, id } => Self::StillReferenced { entity, id },
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

pub(crate) fn not_found(entity: EntityKind, id: i64) -> ServiceError {
    ServiceError::NotFound { entity, id }
}
