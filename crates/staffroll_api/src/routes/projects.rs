//! Project routes.
//!
//! Every response body is a `ProjectDto` carrying the current members.

use crate::dto::{ProjectDto, ProjectPayload};
use crate::error::ApiResult;
use crate::routes::project_service;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use staffroll_core::ProjectId;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
}

async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let projects = state
        .run(|conn| Ok(project_service(conn)?.list_projects()?))
        .await?;
    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

async fn get_project(
    State(state): State<AppState>,
    path: Result<Path<ProjectId>, PathRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let Path(id) = path?;
    let project = state
        .run(move |conn| Ok(project_service(conn)?.get_project(id)?))
        .await?;
    Ok(Json(project.into()))
}

async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let Json(payload) = payload?;
    let name = payload.into_name()?;
    let project = state
        .run(move |conn| Ok(project_service(conn)?.create_project(&name)?))
        .await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

async fn update_project(
    State(state): State<AppState>,
    path: Result<Path<ProjectId>, PathRejection>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    let name = payload.into_name()?;
    let project = state
        .run(move |conn| Ok(project_service(conn)?.rename_project(id, &name)?))
        .await?;
    Ok(Json(project.into()))
}

async fn delete_project(
    State(state): State<AppState>,
    path: Result<Path<ProjectId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    state
        .run(move |conn| Ok(project_service(conn)?.delete_project(id)?))
        .await?;
    Ok(StatusCode::OK)
}
