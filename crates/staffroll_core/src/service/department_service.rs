//! Department use-case service.
//!
//! # Invariants
//! - Renaming never touches the employees that reference the department.
//! - Deleting an unknown id is a not-found error, not a silent no-op.

use crate::model::department::Department;
use crate::model::{DepartmentId, EntityKind};
use crate::repo::department_repo::DepartmentRepository;
use crate::service::{not_found, ServiceResult};
use log::info;

/// Department service facade over repository implementations.
pub struct DepartmentService<R: DepartmentRepository> {
    repo: R,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_departments(&self) -> ServiceResult<Vec<Department>> {
        Ok(self.repo.list_departments()?)
    }

    /// Gets one department, failing with `NotFound` when absent.
    pub fn get_department(&self, id: DepartmentId) -> ServiceResult<Department> {
        self.repo
            .get_department(id)?
            .ok_or_else(|| not_found(EntityKind::Department, id))
    }

    pub fn create_department(&self, name: &str) -> ServiceResult<Department> {
        let department = self.repo.create_department(name)?;
        info!(
            "event=department_create module=service status=ok id={}",
            department.id
        );
        Ok(department)
    }

    /// Replaces the department name and returns the stored record.
    pub fn rename_department(&self, id: DepartmentId, name: &str) -> ServiceResult<Department> {
        let mut department = self.get_department(id)?;
        department.name = name.to_string();
        self.repo.update_department(&department)?;
        Ok(department)
    }

    /// Deletes one department.
    ///
    /// Fails with `StillReferenced` while employees belong to it.
    pub fn delete_department(&self, id: DepartmentId) -> ServiceResult<()> {
        self.repo.delete_department(id)?;
        info!("event=department_delete module=service status=ok id={id}");
        Ok(())
    }
}
