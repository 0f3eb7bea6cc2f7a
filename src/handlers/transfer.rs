//! Transfer HTTP handler.

use axum::Json;

use crate::{error::AppError, handlers::ApiJson, models::transfer::TransferRequest};

/// Validate a transfer request and echo it back.
///
/// # Request Body
///
/// ```json
/// { "from": 1, "to": 2, "amount": 50 }
/// ```
///
/// # Response (200)
///
/// The decoded request, unchanged. Balances are not modified.
pub async fn transfer(
    ApiJson(request): ApiJson<TransferRequest>,
) -> Result<Json<TransferRequest>, AppError> {
    request.validate()?;

    tracing::info!(
        from = request.from,
        to = request.to,
        amount = request.amount,
        "transfer accepted (not executed)"
    );

    Ok(Json(request))
}
