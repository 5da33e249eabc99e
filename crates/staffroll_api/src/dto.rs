//! Request/response bodies and request validation.
//!
//! # Responsibility
//! - Define the JSON shapes of the REST API (camelCase field names).
//! - Validate request bodies before any service call; every failing field
//!   contributes one message, joined with `, `.
//!
//! # Invariants
//! - Response DTOs carry ids for relations, never nested owning records
//!   (the one exception is `ProjectDto::employees`, a read-only view).

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use staffroll_core::{
    Department, DepartmentId, Employee, EmployeeId, EmployeeUpdate, NewEmployee, ProjectDetails,
    ProjectId,
};

const NAME_REQUIRED: &str = "Name must not be empty";
const POSITION_REQUIRED: &str = "Position must not be empty";
const DEPARTMENT_ID_REQUIRED: &str = "Department ID must not be null";
const PROJECT_IDS_REQUIRED: &str = "Project IDs must not be null";
const PROJECT_ID_REQUIRED: &str = "Project ID must not be null";

/// Body of department create/update requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentPayload {
    pub name: Option<String>,
}

impl DepartmentPayload {
    /// Returns the validated department name.
    pub fn into_name(self) -> ApiResult<String> {
        require_name(self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDto {
    pub id: DepartmentId,
    pub name: String,
}

impl From<Department> for DepartmentDto {
    fn from(value: Department) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

/// Body of employee create/update requests.
///
/// `id` is accepted for symmetry with `EmployeeDto` and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub id: Option<EmployeeId>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub project_ids: Option<Vec<Option<ProjectId>>>,
}

impl EmployeePayload {
    /// Validates a create request; every field is required.
    pub fn into_new_employee(self) -> ApiResult<NewEmployee> {
        let messages = self.field_errors(true);
        if !messages.is_empty() {
            return Err(ApiError::BadRequest(messages.join(", ")));
        }

        Ok(NewEmployee::new(
            self.name.unwrap_or_default(),
            self.position.unwrap_or_default(),
            self.department_id.unwrap_or_default(),
            &flatten_ids(self.project_ids.unwrap_or_default()),
        ))
    }

    /// Validates an update request; references are optional.
    pub fn into_update(self) -> ApiResult<EmployeeUpdate> {
        let messages = self.field_errors(false);
        if !messages.is_empty() {
            return Err(ApiError::BadRequest(messages.join(", ")));
        }

        Ok(EmployeeUpdate {
            name: self.name.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            department_id: self.department_id,
            project_ids: self.project_ids.map(flatten_ids),
        })
    }

    fn field_errors(&self, require_references: bool) -> Vec<&'static str> {
        let mut messages = Vec::new();
        if is_blank(self.name.as_deref()) {
            messages.push(NAME_REQUIRED);
        }
        if is_blank(self.position.as_deref()) {
            messages.push(POSITION_REQUIRED);
        }
        if require_references && self.department_id.is_none() {
            messages.push(DEPARTMENT_ID_REQUIRED);
        }
        match self.project_ids.as_deref() {
            None if require_references => messages.push(PROJECT_IDS_REQUIRED),
            Some(ids) if ids.iter().any(Option::is_none) => messages.push(PROJECT_ID_REQUIRED),
            _ => {}
        }
        messages
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub department_id: DepartmentId,
    pub project_ids: Vec<ProjectId>,
}

impl From<Employee> for EmployeeDto {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id,
            name: value.name,
            position: value.position,
            department_id: value.department_id,
            project_ids: value.project_ids,
        }
    }
}

/// Body of project create/update requests. Only `name` is mutable;
/// an `employees` field, if sent, is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPayload {
    pub name: Option<String>,
}

impl ProjectPayload {
    pub fn into_name(self) -> ApiResult<String> {
        require_name(self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub employees: Vec<EmployeeDto>,
}

impl From<ProjectDetails> for ProjectDto {
    fn from(value: ProjectDetails) -> Self {
        Self {
            id: value.project.id,
            name: value.project.name,
            employees: value.employees.into_iter().map(EmployeeDto::from).collect(),
        }
    }
}

/// Body of `GET /test/connection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
    pub status: String,
    pub core_version: String,
}

fn require_name(name: Option<String>) -> ApiResult<String> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ApiError::BadRequest(NAME_REQUIRED.to_string())),
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |value| value.trim().is_empty())
}

fn flatten_ids(ids: Vec<Option<i64>>) -> Vec<i64> {
    ids.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::{DepartmentPayload, EmployeePayload};
    use crate::error::ApiError;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> EmployeePayload {
        serde_json::from_value(value).unwrap()
    }

    fn bad_request_message(err: ApiError) -> String {
        match err {
            ApiError::BadRequest(message) => message,
            other => panic!("expected bad request, got {other:?}"),
        }
    }

    #[test]
    fn create_validation_joins_every_failing_field() {
        let err = payload(json!({ "name": " " })).into_new_employee().unwrap_err();
        assert_eq!(
            bad_request_message(err),
            "Name must not be empty, Position must not be empty, \
             Department ID must not be null, Project IDs must not be null"
        );
    }

    #[test]
    fn null_project_id_is_rejected() {
        let err = payload(json!({
            "name": "Emily",
            "position": "Analyst",
            "departmentId": 1,
            "projectIds": [1, null]
        }))
        .into_new_employee()
        .unwrap_err();
        assert_eq!(bad_request_message(err), "Project ID must not be null");
    }

    #[test]
    fn valid_create_payload_maps_to_new_employee() {
        let employee = payload(json!({
            "name": "Emily",
            "position": "Financial analyst",
            "departmentId": 1,
            "projectIds": [3, 1]
        }))
        .into_new_employee()
        .unwrap();
        assert_eq!(employee.department_id, 1);
        assert_eq!(employee.project_ids, vec![1, 3]);
    }

    #[test]
    fn update_payload_keeps_references_optional() {
        let update = payload(json!({ "name": "Emily", "position": "Lead" }))
            .into_update()
            .unwrap();
        assert_eq!(update.department_id, None);
        assert_eq!(update.project_ids, None);

        let cleared = payload(json!({ "name": "Emily", "position": "Lead", "projectIds": [] }))
            .into_update()
            .unwrap();
        assert_eq!(cleared.project_ids, Some(Vec::new()));
    }

    #[test]
    fn department_payload_requires_name() {
        let err = DepartmentPayload { name: None }.into_name().unwrap_err();
        assert_eq!(bad_request_message(err), "Name must not be empty");
    }
}
