//! Core domain logic for the staff directory.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::department::Department;
pub use model::employee::{Employee, NewEmployee};
pub use model::project::Project;
pub use model::{DepartmentId, EmployeeId, EntityKind, ProjectId, ValidationError};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::{RepoError, RepoResult};
pub use service::department_service::DepartmentService;
pub use service::employee_service::{EmployeeService, EmployeeUpdate};
pub use service::project_service::{ProjectDetails, ProjectService};
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
