//! Transfer request model.
//!
//! Transfers are not executed yet: the endpoint validates the request and
//! echoes it back unchanged. No balance is touched.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Request body for `/transfer`.
///
/// ```json
/// { "from": 1, "to": 2, "amount": 50 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Source account id
    pub from: i32,

    /// Destination account id
    pub to: i32,

    /// Amount in cents
    pub amount: i64,
}

impl TransferRequest {
    /// Reject transfers that could never be executed.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.amount <= 0 {
            return Err(AppError::InvalidRequest(
                "amount must be positive".to_string(),
            ));
        }

        if self.from == self.to {
            return Err(AppError::InvalidRequest(
                "cannot transfer to the same account".to_string(),
            ));
        }

        Ok(())
    }
}
