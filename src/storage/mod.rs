//! Persistence abstraction for accounts.
//!
//! Handlers only see [`Storage`]; the process wires in
//! [`postgres::PostgresStore`], tests wire in the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::account::{Account, NewAccount, UpdateAccountRequest},
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Shared handle to the store, injected into every handler as router state.
pub type AppState = Arc<dyn Storage>;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Insert a new account and return the stored row, including the
    /// generated id, number and creation time.
    async fn create_account(&self, account: &NewAccount) -> Result<Account, AppError>;

    /// Overwrite names and balance of an existing account.
    ///
    /// Fails with `AccountNotFound` when no row has the given id.
    async fn update_account(&self, account: &UpdateAccountRequest) -> Result<Account, AppError>;

    /// Delete an account. Deleting an id that does not exist is not an error.
    async fn delete_account(&self, id: i32) -> Result<(), AppError>;

    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError>;

    /// All accounts ordered by id. No rows is an empty vector.
    async fn get_accounts(&self) -> Result<Vec<Account>, AppError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
