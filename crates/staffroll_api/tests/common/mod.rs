#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use staffroll_api::{router, AppState};
use staffroll_core::db::open_db_in_memory;
use tower::ServiceExt;

pub fn app() -> Router {
    router(AppState::new(open_db_in_memory().unwrap()))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let raw = body.map(|body| body.to_string());
    send_raw(app, method, uri, raw.as_deref()).await
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Creates a department and returns its id.
pub async fn seed_department(app: &Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/departments",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

/// Creates a project and returns its id.
pub async fn seed_project(app: &Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/projects",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

/// Asserts an error body carries only a message.
pub fn assert_error_body(body: &Value, message: &str) {
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1, "unexpected error body: {body}");
    assert_eq!(object["message"], message);
}
