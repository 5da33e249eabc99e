//! REST routes.
//!
//! Routes:
//! - `/api/departments`, `/api/departments/{id}`
//! - `/api/employees`, `/api/employees/{id}`, `/api/employees/{employee_id}/projects`
//! - `/api/projects`, `/api/projects/{id}`
//! - `/test/connection`

use crate::error::ApiResult;
use crate::middleware::log_requests;
use crate::state::AppState;
use axum::Router;
use rusqlite::Connection;
use staffroll_core::{
    DepartmentService, EmployeeService, ProjectService, SqliteDepartmentRepository,
    SqliteEmployeeRepository, SqliteProjectRepository,
};

pub mod departments;
pub mod employees;
pub mod health;
pub mod projects;

/// Builds the full application router with request logging.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(departments::routes())
        .merge(employees::routes())
        .merge(projects::routes())
        .merge(health::routes())
        .layer(axum::middleware::from_fn(log_requests))
        .with_state(state)
}

pub(crate) fn department_service(
    conn: &Connection,
) -> ApiResult<DepartmentService<SqliteDepartmentRepository<'_>>> {
    Ok(DepartmentService::new(SqliteDepartmentRepository::try_new(
        conn,
    )?))
}

pub(crate) fn employee_service(
    conn: &Connection,
) -> ApiResult<
    EmployeeService<
        SqliteEmployeeRepository<'_>,
        SqliteDepartmentRepository<'_>,
        SqliteProjectRepository<'_>,
    >,
> {
    Ok(EmployeeService::new(
        SqliteEmployeeRepository::try_new(conn)?,
        SqliteDepartmentRepository::try_new(conn)?,
        SqliteProjectRepository::try_new(conn)?,
    ))
}

pub(crate) fn project_service(
    conn: &Connection,
) -> ApiResult<ProjectService<SqliteProjectRepository<'_>, SqliteEmployeeRepository<'_>>> {
    Ok(ProjectService::new(
        SqliteProjectRepository::try_new(conn)?,
        SqliteEmployeeRepository::try_new(conn)?,
    ))
}
