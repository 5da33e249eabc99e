//! Database connectivity check.

use crate::dto::ConnectionStatus;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use staffroll_core::core_version;
use staffroll_core::db::ping_db;

pub fn routes() -> Router<AppState> {
    Router::new().route("/test/connection", get(test_connection))
}

async fn test_connection(State(state): State<AppState>) -> ApiResult<Json<ConnectionStatus>> {
    state
        .run(|conn| ping_db(conn).map_err(|err| ApiError::internal(err.to_string())))
        .await?;
    Ok(Json(ConnectionStatus {
        status: "Database connection successful!".to_string(),
        core_version: core_version().to_string(),
    }))
}
