//! Employee use-case service.
//!
//! # Responsibility
//! - Resolve department and project references before persisting.
//! - Provide create/update/delete and project-set replacement APIs.
//!
//! # Invariants
//! - A missing department is reported before any write happens.
//! - A non-empty project id list that resolves to nothing is rejected;
//!   ids that do not resolve alongside ones that do are dropped.
//! - Project assignment replaces the whole set.

use crate::model::employee::{normalize_project_ids, Employee, NewEmployee};
use crate::model::{DepartmentId, EmployeeId, EntityKind, ProjectId};
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::project_repo::ProjectRepository;
use crate::service::{not_found, ServiceError, ServiceResult};
use log::info;

/// Update request for an existing employee.
///
/// `department_id` and `project_ids` are only applied when present. A
/// present, empty `project_ids` clears every assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeUpdate {
    pub name: String,
    pub position: String,
    pub department_id: Option<DepartmentId>,
    pub project_ids: Option<Vec<ProjectId>>,
}

/// Employee service facade over repository implementations.
pub struct EmployeeService<E, D, P>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    P: ProjectRepository,
{
    employees: E,
    departments: D,
    projects: P,
}

impl<E, D, P> EmployeeService<E, D, P>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    P: ProjectRepository,
{
    pub fn new(employees: E, departments: D, projects: P) -> Self {
        Self {
            employees,
            departments,
            projects,
        }
    }

    pub fn list_employees(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.employees.list_employees()?)
    }

    pub fn get_employee(&self, id: EmployeeId) -> ServiceResult<Employee> {
        self.employees
            .get_employee(id)?
            .ok_or_else(|| not_found(EntityKind::Employee, id))
    }

    /// Creates an employee after resolving its department and projects.
    pub fn create_employee(&self, employee: &NewEmployee) -> ServiceResult<Employee> {
        employee.validate()?;
        self.ensure_department(employee.department_id)?;

        let mut resolved = employee.clone();
        resolved.project_ids = self.resolve_projects(&employee.project_ids)?;

        let created = self.employees.create_employee(&resolved)?;
        info!(
            "event=employee_create module=service status=ok id={} department_id={} project_count={}",
            created.id,
            created.department_id,
            created.project_ids.len()
        );
        Ok(created)
    }

    /// Applies an update and returns the stored employee.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        update: &EmployeeUpdate,
    ) -> ServiceResult<Employee> {
        let mut employee = self.get_employee(id)?;
        employee.name = update.name.clone();
        employee.position = update.position.clone();

        if let Some(department_id) = update.department_id {
            self.ensure_department(department_id)?;
            employee.department_id = department_id;
        }

        if let Some(project_ids) = update.project_ids.as_deref() {
            let resolved = self.resolve_projects(project_ids)?;
            employee.set_projects(&resolved);
        }

        self.employees.update_employee(&employee)?;
        self.read_back(id, "updated employee not found in read-back")
    }

    /// Deletes one employee; its project links cascade.
    pub fn delete_employee(&self, id: EmployeeId) -> ServiceResult<()> {
        if self.employees.get_employee(id)?.is_none() {
            return Err(not_found(EntityKind::Employee, id));
        }
        self.employees.delete_employee(id)?;
        info!("event=employee_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Replaces the employee's full project set.
    ///
    /// Fails with `ProjectsNotFound` when `project_ids` resolves to no
    /// project, including the empty list.
    pub fn assign_projects(
        &self,
        id: EmployeeId,
        project_ids: &[ProjectId],
    ) -> ServiceResult<Employee> {
        self.get_employee(id)?;

        let resolved = self.resolve_projects(project_ids)?;
        if resolved.is_empty() {
            return Err(ServiceError::ProjectsNotFound);
        }

        self.employees.set_employee_projects(id, &resolved)?;
        info!(
            "event=employee_assign_projects module=service status=ok id={} project_count={}",
            id,
            resolved.len()
        );
        self.read_back(id, "employee missing after project replacement")
    }

    fn ensure_department(&self, department_id: DepartmentId) -> ServiceResult<()> {
        if self.departments.get_department(department_id)?.is_none() {
            return Err(ServiceError::DepartmentNotFound(department_id));
        }
        Ok(())
    }

    fn resolve_projects(&self, project_ids: &[ProjectId]) -> ServiceResult<Vec<ProjectId>> {
        let requested = normalize_project_ids(project_ids);
        if requested.is_empty() {
            return Ok(Vec::new());
        }
        let resolved: Vec<ProjectId> = self
            .projects
            .find_all_by_id(&requested)?
            .into_iter()
            .map(|project| project.id)
            .collect();
        if resolved.is_empty() {
            return Err(ServiceError::ProjectsNotFound);
        }
        Ok(resolved)
    }

    fn read_back(&self, id: EmployeeId, details: &'static str) -> ServiceResult<Employee> {
        self.employees
            .get_employee(id)?
            .ok_or(ServiceError::InconsistentState(details))
    }
}
