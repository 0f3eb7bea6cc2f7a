//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /account - List all accounts
//! - POST /account - Create new account
//! - PUT /account - Update account named by the body's id
//! - DELETE /account - Delete account named by the body's id
//! - GET /account/{id} - Get account by ID
//! - any other method on /account/{id}, and /delete/{id} - Delete account by ID

use axum::{Json, extract::State, http::Method, http::StatusCode};

use crate::{
    error::AppError,
    handlers::{ApiJson, ApiPath},
    models::account::{
        Account, CreateAccountRequest, DeleteAccountRequest, NewAccount, UpdateAccountRequest,
    },
    storage::AppState,
};

/// List every account.
///
/// # Response
///
/// - **Success (200 OK)**: array of accounts ordered by id (may be empty)
pub async fn list_accounts(State(store): State<AppState>) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = store.get_accounts().await?;

    Ok(Json(accounts))
}

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// { "first_name": "Ann", "last_name": "Lee" }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the stored account, with id, number,
///   a zero balance and `created_at` filled in by the database
pub async fn create_account(
    State(store): State<AppState>,
    ApiJson(request): ApiJson<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let account = store.create_account(&NewAccount::from(request)).await?;
    tracing::info!(id = account.id, number = account.number, "account created");

    Ok((StatusCode::CREATED, Json(account)))
}

/// Update an account from a full account body.
///
/// Only `first_name`, `last_name` and `balance` are written. The response is
/// the stored row, so `number` and `created_at` always reflect the database.
pub async fn update_account(
    State(store): State<AppState>,
    ApiJson(request): ApiJson<UpdateAccountRequest>,
) -> Result<Json<Account>, AppError> {
    let account = store.update_account(&request).await?;

    Ok(Json(account))
}

/// Delete the account named by the body, `{"id": 7}`.
pub async fn delete_account_by_body(
    State(store): State<AppState>,
    ApiJson(request): ApiJson<DeleteAccountRequest>,
) -> Result<StatusCode, AppError> {
    store.delete_account(request.id).await?;

    Ok(StatusCode::OK)
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: account details
/// - **Error (400)**: `{"error": "account with id 7 not found"}`
pub async fn get_account(
    State(store): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Account>, AppError> {
    let account = store.get_account_by_id(id).await?;

    Ok(Json(account))
}

/// Delete an account by path id.
///
/// Mounted for every non-GET verb on `/account/{id}` and for any verb on
/// `/delete/{id}`. Deleting a missing id still answers 200.
pub async fn delete_account(
    method: Method,
    State(store): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, AppError> {
    if method != Method::DELETE {
        tracing::warn!(%method, id, "non-DELETE request is deleting an account");
    }

    store.delete_account(id).await?;

    Ok(StatusCode::OK)
}

/// Fallback for verbs `/account` does not dispatch.
pub async fn unsupported_method(method: Method) -> AppError {
    AppError::UnsupportedMethod(method)
}
