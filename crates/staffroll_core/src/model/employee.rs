//! Employee record and its creation input.
//!
//! # Invariants
//! - `department_id` always points at an existing department row.
//! - `project_ids` is sorted ascending and free of duplicates; it mirrors
//!   the `employee_project` join rows for this employee.

use super::{require_id, require_text, DepartmentId, EmployeeId, ProjectId, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Persisted employee with resolved foreign-key ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub department_id: DepartmentId,
    pub project_ids: Vec<ProjectId>,
}

impl Employee {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_id("ID", self.id)?;
        validate_fields(&self.name, &self.position, self.department_id, &self.project_ids)
    }

    /// Replaces the project set, keeping the sorted/deduplicated invariant.
    pub fn set_projects(&mut self, project_ids: &[ProjectId]) {
        self.project_ids = normalize_project_ids(project_ids);
    }
}

/// Employee fields before the database assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub department_id: DepartmentId,
    pub project_ids: Vec<ProjectId>,
}

impl NewEmployee {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        department_id: DepartmentId,
        project_ids: &[ProjectId],
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            department_id,
            project_ids: normalize_project_ids(project_ids),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, &self.position, self.department_id, &self.project_ids)
    }

    /// Builds the persisted record once an id is known.
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            position: self.position,
            department_id: self.department_id,
            project_ids: normalize_project_ids(&self.project_ids),
        }
    }
}

/// Sorts and deduplicates project ids.
pub fn normalize_project_ids(project_ids: &[ProjectId]) -> Vec<ProjectId> {
    project_ids
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn validate_fields(
    name: &str,
    position: &str,
    department_id: DepartmentId,
    project_ids: &[ProjectId],
) -> Result<(), ValidationError> {
    require_text("Name", name)?;
    require_text("Position", position)?;
    require_id("Department ID", department_id)?;
    for project_id in project_ids {
        require_id("Project ID", *project_id)?;
    }
    Ok(())
}
