//! PostgreSQL implementation of [`Storage`].
//!
//! All queries go straight to the pool; there is no caching and no retry.
//! A single database error surfaces immediately to the caller.

use async_trait::async_trait;

use crate::{
    db::DbPool,
    error::AppError,
    models::account::{Account, NewAccount, UpdateAccountRequest},
    storage::Storage,
};

pub struct PostgresStore {
    pool: DbPool,
}

impl PostgresStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `account` table if it does not exist yet.
    ///
    /// Safe to run on every startup.
    pub async fn init(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS account (
                id SERIAL PRIMARY KEY,
                first_name VARCHAR(255) NOT NULL,
                last_name VARCHAR(255) NOT NULL,
                number BIGSERIAL NOT NULL,
                balance BIGINT NOT NULL DEFAULT 0,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("account table ready");
        Ok(())
    }
}

#[async_trait]
impl Storage for PostgresStore {
    async fn create_account(&self, account: &NewAccount) -> Result<Account, AppError> {
        // id, number and created_at are filled in by column defaults
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO account (first_name, last_name, balance)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, number, balance, created_at
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.balance)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = account.id, number = account.number, "account created");
        Ok(account)
    }

    async fn update_account(&self, account: &UpdateAccountRequest) -> Result<Account, AppError> {
        // number and created_at are never rewritten
        sqlx::query_as::<_, Account>(
            r#"
            UPDATE account
            SET first_name = $1,
                last_name = $2,
                balance = $3
            WHERE id = $4
            RETURNING id, first_name, last_name, number, balance, created_at
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.balance)
        .bind(account.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::AccountNotFound(account.id))
    }

    async fn delete_account(&self, id: i32) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(id, deleted, "account delete");
        Ok(())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM account
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::AccountNotFound(id))
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM account
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
