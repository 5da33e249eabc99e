//! Department routes.

use crate::dto::{DepartmentDto, DepartmentPayload};
use crate::error::ApiResult;
use crate::routes::department_service;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use staffroll_core::DepartmentId;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/departments",
            get(list_departments).post(create_department),
        )
        .route(
            "/api/departments/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
}

async fn list_departments(State(state): State<AppState>) -> ApiResult<Json<Vec<DepartmentDto>>> {
    let departments = state
        .run(|conn| Ok(department_service(conn)?.list_departments()?))
        .await?;
    Ok(Json(
        departments.into_iter().map(DepartmentDto::from).collect(),
    ))
}

async fn get_department(
    State(state): State<AppState>,
    path: Result<Path<DepartmentId>, PathRejection>,
) -> ApiResult<Json<DepartmentDto>> {
    let Path(id) = path?;
    let department = state
        .run(move |conn| Ok(department_service(conn)?.get_department(id)?))
        .await?;
    Ok(Json(department.into()))
}

async fn create_department(
    State(state): State<AppState>,
    payload: Result<Json<DepartmentPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DepartmentDto>)> {
    let Json(payload) = payload?;
    let name = payload.into_name()?;
    let department = state
        .run(move |conn| Ok(department_service(conn)?.create_department(&name)?))
        .await?;
    Ok((StatusCode::CREATED, Json(department.into())))
}

async fn update_department(
    State(state): State<AppState>,
    path: Result<Path<DepartmentId>, PathRejection>,
    payload: Result<Json<DepartmentPayload>, JsonRejection>,
) -> ApiResult<Json<DepartmentDto>> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    let name = payload.into_name()?;
    let department = state
        .run(move |conn| Ok(department_service(conn)?.rename_department(id, &name)?))
        .await?;
    Ok(Json(department.into()))
}

async fn delete_department(
    State(state): State<AppState>,
    path: Result<Path<DepartmentId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    state
        .run(move |conn| Ok(department_service(conn)?.delete_department(id)?))
        .await?;
    Ok(StatusCode::OK)
}
