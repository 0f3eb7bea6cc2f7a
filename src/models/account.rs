//! Account data models and API request types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account
//! - `NewAccount`: Insert payload handed to the store
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `UpdateAccountRequest`: Request body for `PUT /account`
//! - `DeleteAccountRequest`: Request body for `DELETE /account`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a row of the `account` table.
///
/// # Balance Storage
///
/// Balances are stored as `i64` minor units (cents) to avoid floating-point
/// precision issues. $10.50 is stored as 1050.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Account {
    /// Primary key, assigned by the database
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    /// Account number, assigned once at insert and never changed afterwards
    pub number: i64,

    /// Current balance in cents
    pub balance: i64,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

/// Columns the caller controls when inserting an account.
///
/// Id, number and creation time are produced by the store.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub balance: i64,
}

impl NewAccount {
    /// A fresh account starts with a zero balance.
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            first_name,
            last_name,
            balance: 0,
        }
    }
}

/// Request body for creating a new account.
///
/// ```json
/// { "first_name": "Ann", "last_name": "Lee" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateAccountRequest> for NewAccount {
    fn from(request: CreateAccountRequest) -> Self {
        NewAccount::new(request.first_name, request.last_name)
    }
}

/// Request body for `PUT /account`.
///
/// Clients usually send back a full account object; `number` and
/// `created_at` are accepted but ignored because they are immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAccountRequest {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub balance: i64,
}

/// Request body for `DELETE /account`.
#[derive(Debug, Deserialize)]
pub struct DeleteAccountRequest {
    pub id: i32,
}
