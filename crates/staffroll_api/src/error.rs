//! HTTP error mapping.
//!
//! # Responsibility
//! - Convert service, validation and extractor failures into status codes
//!   with a `{message}` body.
//!
//! # Invariants
//! - 500 responses never echo internal detail; the detail travels in a
//!   response extension and is logged by the request middleware.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use staffroll_core::{RepoError, ServiceError};
use std::error::Error;
use std::fmt::{Display, Formatter};

const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Internal failure detail attached to 500 responses for logging only.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

#[derive(Debug)]
pub enum ApiError {
    /// 400: validation failure or malformed request.
    BadRequest(String),
    /// 404: missing entity or unresolvable reference.
    NotFound(String),
    /// 409: delete refused while other rows reference the target.
    Conflict(String),
    /// 500: carries server-side detail only.
    Internal(String),
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client.
    pub fn public_message(&self) -> &str {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) | Self::Conflict(message) => {
                message
            }
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Internal(detail) => write!(f, "internal error: {detail}"),
            other => write!(f, "{}", other.public_message()),
        }
    }
}

impl Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.public_message().to_string(),
        };
        let mut response = (self.status(), Json(body)).into_response();
        if let Self::Internal(detail) = self {
            response.extensions_mut().insert(ErrorDetail(detail));
        }
        response
    }
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::Validation(_) => Self::BadRequest(value.to_string()),
            ServiceError::NotFound { .. }
            | ServiceError::DepartmentNotFound(_)
            | ServiceError::ProjectsNotFound => Self::NotFound(value.to_string()),
            ServiceError::StillReferenced { .. } => Self::Conflict(value.to_string()),
            ServiceError::Repo(_) | ServiceError::InconsistentState(_) => {
                Self::Internal(value.to_string())
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        ServiceError::from(value).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(format!("Malformed request body: {}", value.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::BadRequest(format!("Invalid path parameter: {}", value.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, INTERNAL_ERROR_MESSAGE};
    use axum::http::StatusCode;
    use staffroll_core::{EntityKind, ServiceError};

    #[test]
    fn service_errors_map_to_expected_statuses() {
        let not_found = ApiError::from(ServiceError::NotFound {
            entity: EntityKind::Employee,
            id: 4,
        });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.public_message(), "Employee not found with id: 4");

        let reference = ApiError::from(ServiceError::DepartmentNotFound(9));
        assert_eq!(reference.status(), StatusCode::NOT_FOUND);
        assert_eq!(reference.public_message(), "Department not found");

        let conflict = ApiError::from(ServiceError::StillReferenced {
            entity: EntityKind::Department,
            id: 1,
        });
        assert_eq!(conflict.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn internal_errors_hide_detail() {
        let err = ApiError::from(ServiceError::InconsistentState("read-back failed"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
        assert!(err.to_string().contains("read-back failed"));
    }
}
