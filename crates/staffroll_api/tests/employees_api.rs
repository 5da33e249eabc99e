mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{app, assert_error_body, seed_department, seed_project, send, send_raw};
use serde_json::{json, Value};

async fn create_employee(app: &Router, body: Value) -> (StatusCode, Value) {
    send(app, "POST", "/api/employees", Some(body)).await
}

#[tokio::test]
async fn create_employee_echoes_stored_values() {
    let app = app();
    seed_department(&app, "Finance").await;
    seed_project(&app, "Audit").await;

    let (status, body) = create_employee(
        &app,
        json!({
            "name": "Emily",
            "position": "Financial analyst",
            "departmentId": 1,
            "projectIds": [1]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Emily",
            "position": "Financial analyst",
            "departmentId": 1,
            "projectIds": [1]
        })
    );

    let (status, fetched) = send(&app, "GET", "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn create_with_missing_department_writes_nothing() {
    let app = app();

    let (status, body) = create_employee(
        &app,
        json!({
            "name": "Emily",
            "position": "Financial analyst",
            "departmentId": 42,
            "projectIds": []
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, "Department not found");

    let (_, listed) = send(&app, "GET", "/api/employees", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn create_with_empty_project_list_has_no_projects() {
    let app = app();
    let department_id = seed_department(&app, "Finance").await;

    let (status, body) = create_employee(
        &app,
        json!({
            "name": "Sam",
            "position": "Clerk",
            "departmentId": department_id,
            "projectIds": []
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["projectIds"], json!([]));
}

#[tokio::test]
async fn create_with_only_unknown_projects_is_not_found() {
    let app = app();
    let department_id = seed_department(&app, "Finance").await;

    let (status, body) = create_employee(
        &app,
        json!({
            "name": "Sam",
            "position": "Clerk",
            "departmentId": department_id,
            "projectIds": [7, 8]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, "One or more projects not found");
}

#[tokio::test]
async fn create_drops_unknown_ids_when_some_resolve() {
    let app = app();
    let department_id = seed_department(&app, "Finance").await;
    let project_id = seed_project(&app, "Audit").await;

    let (status, body) = create_employee(
        &app,
        json!({
            "name": "Sam",
            "position": "Clerk",
            "departmentId": department_id,
            "projectIds": [project_id, 99]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["projectIds"], json!([project_id]));
}

#[tokio::test]
async fn invalid_payload_lists_every_failing_field() {
    let app = app();

    let (status, body) = create_employee(&app, json!({ "name": " ", "position": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(
        &body,
        "Name must not be empty, Position must not be empty, \
         Department ID must not be null, Project IDs must not be null",
    );

    let (status, body) = create_employee(
        &app,
        json!({
            "name": "Sam",
            "position": "Clerk",
            "departmentId": 1,
            "projectIds": [null]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, "Project ID must not be null");

    let (status, body) = create_employee(
        &app,
        json!({
            "name": "Sam",
            "position": "Clerk",
            "departmentId": -1,
            "projectIds": []
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, "Department ID must be positive");

    let (status, _) = send_raw(&app, "POST", "/api/employees", Some("[1, 2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assign_projects_replaces_the_set() {
    let app = app();
    let department_id = seed_department(&app, "Finance").await;
    for name in ["Audit", "Budget", "Payroll"] {
        seed_project(&app, name).await;
    }
    let (_, employee) = create_employee(
        &app,
        json!({
            "name": "Emily",
            "position": "Financial analyst",
            "departmentId": department_id,
            "projectIds": [1]
        }),
    )
    .await;
    let employee_id = employee["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/employees/{employee_id}/projects"),
        Some(json!([2, 3])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projectIds"], json!([2, 3]));

    let (_, project) = send(&app, "GET", "/api/projects/1", None).await;
    assert_eq!(project["employees"], json!([]));
}

#[tokio::test]
async fn assign_projects_rejects_unknown_targets() {
    let app = app();
    let department_id = seed_department(&app, "Finance").await;
    seed_project(&app, "Audit").await;

    let (status, body) = send(&app, "POST", "/api/employees/9/projects", Some(json!([1]))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, "Employee not found with id: 9");

    let (_, employee) = create_employee(
        &app,
        json!({
            "name": "Sam",
            "position": "Clerk",
            "departmentId": department_id,
            "projectIds": [1]
        }),
    )
    .await;
    let uri = format!("/api/employees/{}/projects", employee["id"]);

    let (status, body) = send(&app, "POST", &uri, Some(json!([]))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, "One or more projects not found");

    let (status, _) = send(&app, "POST", &uri, Some(json!([5, 6]))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, unchanged) = send(&app, "GET", &format!("/api/employees/{}", employee["id"]), None).await;
    assert_eq!(unchanged["projectIds"], json!([1]));
}

#[tokio::test]
async fn oversized_project_lists_are_resolved_not_rejected() {
    let app = app();
    let department_id = seed_department(&app, "Finance").await;
    seed_project(&app, "Audit").await;
    let many: Vec<i64> = (1..=40_000).collect();

    let (status, employee) = create_employee(
        &app,
        json!({
            "name": "Emily",
            "position": "Financial analyst",
            "departmentId": department_id,
            "projectIds": many
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(employee["projectIds"], json!([1]));

    let uri = format!("/api/employees/{}/projects", employee["id"]);
    let (status, body) = send(&app, "POST", &uri, Some(json!(many))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projectIds"], json!([1]));

    let (status, body) = send(&app, "POST", &uri, Some(json!(vec![1; 40_000]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projectIds"], json!([1]));
}

#[tokio::test]
async fn update_employee_keeps_omitted_references() {
    let app = app();
    let finance = seed_department(&app, "Finance").await;
    let legal = seed_department(&app, "Legal").await;
    seed_project(&app, "Audit").await;
    let (_, employee) = create_employee(
        &app,
        json!({
            "name": "Sam",
            "position": "Clerk",
            "departmentId": finance,
            "projectIds": [1]
        }),
    )
    .await;
    let uri = format!("/api/employees/{}", employee["id"]);

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "name": "Samuel", "position": "Senior clerk" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Samuel");
    assert_eq!(body["departmentId"], finance);
    assert_eq!(body["projectIds"], json!([1]));

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({
            "name": "Samuel",
            "position": "Senior clerk",
            "departmentId": legal,
            "projectIds": []
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["departmentId"], legal);
    assert_eq!(body["projectIds"], json!([]));

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "name": "Samuel", "position": "Clerk", "departmentId": 77 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, "Department not found");

    let (status, _) = send(
        &app,
        "PUT",
        "/api/employees/404",
        Some(json!({ "name": "Ghost", "position": "None" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_employee_then_lookup_is_not_found() {
    let app = app();
    let department_id = seed_department(&app, "Finance").await;
    let (_, employee) = create_employee(
        &app,
        json!({
            "name": "Sam",
            "position": "Clerk",
            "departmentId": department_id,
            "projectIds": []
        }),
    )
    .await;
    let uri = format!("/api/employees/{}", employee["id"]);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, &format!("Employee not found with id: {}", employee["id"]));

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/departments/{department_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
