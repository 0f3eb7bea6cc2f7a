//! Account Service - Main Application Entry Point
//!
//! A JSON API over a single `account` table: list, create, fetch, update
//! and delete accounts, plus a transfer endpoint that validates and echoes
//! its request without moving money.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, behind the `Storage` trait
//! - **Format**: JSON requests/responses, every error is a 400 `{"error": ...}`
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool and ping it
//! 3. Create the `account` table if missing
//! 4. Build HTTP router
//! 5. Serve until SIGINT/SIGTERM, then drain for up to 5 seconds

mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod server;
mod storage;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::storage::{Storage, postgres::PostgresStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    let store = PostgresStore::new(pool);
    store.ping().await?;
    tracing::info!("Database connected");

    store.init().await?;

    let app = routes::create_router(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("JSON API server listening on {}", config.listen_addr);

    server::run(
        listener,
        app,
        server::shutdown_signal(),
        server::SHUTDOWN_TIMEOUT,
    )
    .await;

    Ok(())
}
