use staffroll_core::model::employee::normalize_project_ids;
use staffroll_core::{Department, Employee, EntityKind, NewEmployee, Project, ValidationError};

#[test]
fn new_employee_normalizes_project_ids() {
    let employee = NewEmployee::new("Emily", "Financial analyst", 1, &[3, 1, 3, 2]);
    assert_eq!(employee.project_ids, vec![1, 2, 3]);
}

#[test]
fn blank_names_are_rejected() {
    let department = Department::new(1, "   ");
    assert_eq!(
        department.validate().unwrap_err(),
        ValidationError::BlankField("Name")
    );

    let project = Project::new(1, "");
    assert_eq!(
        project.validate().unwrap_err(),
        ValidationError::BlankField("Name")
    );
}

#[test]
fn employee_validation_checks_every_required_field() {
    let blank_position = NewEmployee::new("Emily", " ", 1, &[]);
    assert_eq!(
        blank_position.validate().unwrap_err(),
        ValidationError::BlankField("Position")
    );

    let bad_department = NewEmployee::new("Emily", "Analyst", 0, &[]);
    assert_eq!(
        bad_department.validate().unwrap_err(),
        ValidationError::InvalidId {
            field: "Department ID",
            value: 0
        }
    );

    let bad_project = NewEmployee::new("Emily", "Analyst", 1, &[-4]);
    assert!(matches!(
        bad_project.validate().unwrap_err(),
        ValidationError::InvalidId {
            field: "Project ID",
            ..
        }
    ));
}

#[test]
fn validation_messages_use_request_field_labels() {
    let err = NewEmployee::new(" ", "Analyst", 1, &[]).validate().unwrap_err();
    assert_eq!(err.to_string(), "Name must not be empty");

    let err = NewEmployee::new("Emily", "Analyst", -1, &[]).validate().unwrap_err();
    assert_eq!(err.to_string(), "Department ID must be positive");

    let err = NewEmployee::new("Emily", "Analyst", 1, &[0]).validate().unwrap_err();
    assert_eq!(err.to_string(), "Project ID must be positive");
}

#[test]
fn set_projects_replaces_whole_set() {
    let mut employee = NewEmployee::new("Emily", "Analyst", 1, &[1]).into_employee(7);
    employee.set_projects(&[3, 2]);
    assert_eq!(employee.project_ids, vec![2, 3]);
    employee.validate().unwrap();
}

#[test]
fn employee_serialization_uses_expected_fields() {
    let employee = Employee {
        id: 5,
        name: "Emily".to_string(),
        position: "Financial analyst".to_string(),
        department_id: 1,
        project_ids: vec![1],
    };

    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["id"], 5);
    assert_eq!(json["department_id"], 1);
    assert_eq!(json["project_ids"], serde_json::json!([1]));

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, employee);
}

#[test]
fn normalize_project_ids_handles_empty_input() {
    assert!(normalize_project_ids(&[]).is_empty());
    assert_eq!(EntityKind::Project.label(), "Project");
}
