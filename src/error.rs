//! Error types and HTTP error response handling.
//!
//! Every failure a handler can hit is an [`AppError`]. Clients see the same
//! shape for all of them: HTTP 400 with `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::PathRejection,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Decoding Errors**: malformed JSON bodies, non-integer path ids
/// - **Storage Errors**: any `sqlx::Error`, or a missing account
/// - **Validation Errors**: requests that decode but make no sense
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection error, constraint violation, ...).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No account row matched the requested id.
    #[error("account with id {0} not found")]
    AccountNotFound(i32),

    /// Request body could not be decoded as the expected JSON document.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// A path segment (usually `{id}`) could not be parsed.
    #[error("invalid path parameter: {0}")]
    InvalidPath(String),

    /// Request decoded fine but failed validation.
    ///
    /// The String contains details about what was invalid.
    #[error("{0}")]
    InvalidRequest(String),

    /// The route exists but does not handle this HTTP method.
    #[error("unsupported method {0}")]
    UnsupportedMethod(Method),
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPath(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "account with id 7 not found" }
/// ```
///
/// The status is always 400 Bad Request; only the message tells a missing
/// row apart from a database failure.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(ref err) = self {
            tracing::error!(error = %err, "storage operation failed");
        }

        let body = Json(json!({ "error": self.to_string() }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
