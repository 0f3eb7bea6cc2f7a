//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Calls the store
//! 3. Returns a JSON response, or an `AppError` rendered as a 400

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Account management endpoints
pub mod accounts;
/// Service health endpoint
pub mod health;
/// Transfer endpoint
pub mod transfer;

/// JSON request body.
///
/// Unlike `axum::Json` the `Content-Type` header is not checked: any body
/// that decodes as `T` is accepted. Decode failures become
/// [`AppError::InvalidBody`].
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(ApiJson)
            .map_err(|err| AppError::InvalidBody(err.to_string()))
    }
}

/// `axum::extract::Path` whose rejection is an [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
