//! Employee routes.
//!
//! Create and update both take an `EmployeePayload` and answer with an
//! `EmployeeDto`; validation runs before any database access.

use crate::dto::{EmployeeDto, EmployeePayload};
use crate::error::ApiResult;
use crate::routes::employee_service;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use staffroll_core::{EmployeeId, ProjectId};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route(
            "/api/employees/{employee_id}/projects",
            post(assign_projects),
        )
}

async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<EmployeeDto>>> {
    let employees = state
        .run(|conn| Ok(employee_service(conn)?.list_employees()?))
        .await?;
    Ok(Json(employees.into_iter().map(EmployeeDto::from).collect()))
}

async fn get_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> ApiResult<Json<EmployeeDto>> {
    let Path(id) = path?;
    let employee = state
        .run(move |conn| Ok(employee_service(conn)?.get_employee(id)?))
        .await?;
    Ok(Json(employee.into()))
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<EmployeeDto>)> {
    let Json(payload) = payload?;
    let employee = payload.into_new_employee()?;
    let created = state
        .run(move |conn| Ok(employee_service(conn)?.create_employee(&employee)?))
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

async fn update_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> ApiResult<Json<EmployeeDto>> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    let update = payload.into_update()?;
    let updated = state
        .run(move |conn| Ok(employee_service(conn)?.update_employee(id, &update)?))
        .await?;
    Ok(Json(updated.into()))
}

async fn delete_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    state
        .run(move |conn| Ok(employee_service(conn)?.delete_employee(id)?))
        .await?;
    Ok(StatusCode::OK)
}

async fn assign_projects(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<Vec<ProjectId>>, JsonRejection>,
) -> ApiResult<Json<EmployeeDto>> {
    let Path(employee_id) = path?;
    let Json(project_ids) = payload?;
    let updated = state
        .run(move |conn| {
            Ok(employee_service(conn)?.assign_projects(employee_id, &project_ids)?)
        })
        .await?;
    Ok(Json(updated.into()))
}
