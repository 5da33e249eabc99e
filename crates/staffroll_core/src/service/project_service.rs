//! Project use-case service.
//!
//! # Responsibility
//! - Provide project CRUD entry points.
//! - Attach the current member list to every project read.
//!
//! # Invariants
//! - Renaming a project leaves its employee associations untouched.

use crate::model::employee::Employee;
use crate::model::project::Project;
use crate::model::{EntityKind, ProjectId};
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::project_repo::ProjectRepository;
use crate::service::{not_found, ServiceResult};
use log::info;

/// Project together with the employees assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    pub project: Project,
    /// Members ordered by employee id.
    pub employees: Vec<Employee>,
}

/// Project service facade over repository implementations.
pub struct ProjectService<P: ProjectRepository, E: EmployeeRepository> {
    projects: P,
    employees: E,
}

impl<P: ProjectRepository, E: EmployeeRepository> ProjectService<P, E> {
    pub fn new(projects: P, employees: E) -> Self {
        Self {
            projects,
            employees,
        }
    }

    pub fn list_projects(&self) -> ServiceResult<Vec<ProjectDetails>> {
        self.projects
            .list_projects()?
            .into_iter()
            .map(|project| self.with_members(project))
            .collect()
    }

    pub fn get_project(&self, id: ProjectId) -> ServiceResult<ProjectDetails> {
        let project = self
            .projects
            .get_project(id)?
            .ok_or_else(|| not_found(EntityKind::Project, id))?;
        self.with_members(project)
    }

    pub fn create_project(&self, name: &str) -> ServiceResult<ProjectDetails> {
        let project = self.projects.create_project(name)?;
        info!(
            "event=project_create module=service status=ok id={}",
            project.id
        );
        Ok(ProjectDetails {
            project,
            employees: Vec::new(),
        })
    }

    /// Replaces the project name; members are read back unchanged.
    pub fn rename_project(&self, id: ProjectId, name: &str) -> ServiceResult<ProjectDetails> {
        let mut details = self.get_project(id)?;
        details.project.name = name.to_string();
        self.projects.update_project(&details.project)?;
        Ok(details)
    }

    /// Deletes one project. Join rows cascade; employees remain.
    pub fn delete_project(&self, id: ProjectId) -> ServiceResult<()> {
        self.projects.delete_project(id)?;
        info!("event=project_delete module=service status=ok id={id}");
        Ok(())
    }

    fn with_members(&self, project: Project) -> ServiceResult<ProjectDetails> {
        let employees = self.employees.list_employees_by_project(project.id)?;
        Ok(ProjectDetails { project, employees })
    }
}
