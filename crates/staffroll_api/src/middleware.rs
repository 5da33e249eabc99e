//! Request logging middleware.
//!
//! Emits one `event=http_request` line per request, tagged with a fresh
//! `request_id` that is also returned in the `x-request-id` header.

use crate::error::ErrorDetail;
use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use log::{error, info, warn};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    let duration_ms = started_at.elapsed().as_millis();
    if status.is_server_error() {
        let detail = response
            .extensions()
            .get::<ErrorDetail>()
            .map_or("unknown", |detail| detail.0.as_str());
        error!(
            "event=http_request module=api status=error method={} path={} http_status={} duration_ms={} request_id={} error={}",
            method,
            path,
            status.as_u16(),
            duration_ms,
            request_id,
            detail
        );
    } else if status.is_client_error() {
        warn!(
            "event=http_request module=api status=rejected method={} path={} http_status={} duration_ms={} request_id={}",
            method,
            path,
            status.as_u16(),
            duration_ms,
            request_id
        );
    } else {
        info!(
            "event=http_request module=api status=ok method={} path={} http_status={} duration_ms={} request_id={}",
            method,
            path,
            status.as_u16(),
            duration_ms,
            request_id
        );
    }

    response
}
