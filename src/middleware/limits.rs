//! Request limits: header size and the body of timed-out requests.
//!
//! Requests whose header block exceeds [`MAX_HEADER_BYTES`] are rejected
//! with 431 before reaching any handler. The connection read buffer is
//! sized in `server` so that hyper lets such requests through to this check.

use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// 1 MiB, counting header names and values.
pub const MAX_HEADER_BYTES: usize = 1 << 20;

pub async fn limit_header_size(request: Request, next: Next) -> Response {
    let size: usize = request
        .headers()
        .iter()
        .map(|(name, value)| name.as_str().len() + value.len())
        .sum();

    if size > MAX_HEADER_BYTES {
        tracing::warn!(size, limit = MAX_HEADER_BYTES, "request headers too large");
        return (
            StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE,
            Json(json!({ "error": "request headers too large" })),
        )
            .into_response();
    }

    next.run(request).await
}

/// Give the timeout layer's empty 408 the same `{"error": ...}` shape as
/// every other failure.
pub async fn timeout_error_body(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("request timed out");
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(json!({ "error": "request timed out" })),
    )
        .into_response()
}
