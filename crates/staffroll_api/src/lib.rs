//! HTTP surface for the staff directory.
//!
//! # Responsibility
//! - Expose department, employee and project use-cases as REST endpoints.
//! - Map request validation and service errors to status codes.
//!
//! # Invariants
//! - Handlers never touch SQL directly; they go through core services.
//! - Every error response body is `{"message": ...}`.

pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::router;
pub use state::AppState;
