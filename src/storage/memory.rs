//! In-memory [`Storage`] used to exercise the HTTP layer without a database.
//!
//! Mirrors the Postgres column defaults: ids and numbers come from separate
//! counters starting at 1, and `created_at` is stamped at insert.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    error::AppError,
    models::account::{Account, NewAccount, UpdateAccountRequest},
    storage::Storage,
};

#[derive(Default)]
struct Tables {
    accounts: BTreeMap<i32, Account>,
    next_id: i32,
    next_number: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn create_account(&self, account: &NewAccount) -> Result<Account, AppError> {
        let mut tables = self.tables.lock().await;
        tables.next_id += 1;
        tables.next_number += 1;

        let stored = Account {
            id: tables.next_id,
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            number: tables.next_number,
            balance: account.balance,
            created_at: Utc::now(),
        };
        tables.accounts.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn update_account(&self, account: &UpdateAccountRequest) -> Result<Account, AppError> {
        let mut tables = self.tables.lock().await;
        let stored = tables
            .accounts
            .get_mut(&account.id)
            .ok_or(AppError::AccountNotFound(account.id))?;

        stored.first_name = account.first_name.clone();
        stored.last_name = account.last_name.clone();
        stored.balance = account.balance;

        Ok(stored.clone())
    }

    async fn delete_account(&self, id: i32) -> Result<(), AppError> {
        self.tables.lock().await.accounts.remove(&id);
        Ok(())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError> {
        self.tables
            .lock()
            .await
            .accounts
            .get(&id)
            .cloned()
            .ok_or(AppError::AccountNotFound(id))
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.tables.lock().await.accounts.values().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
