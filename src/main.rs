//! Bank Transaction Service - Main Application Entry Point
//!
//! REST API server for opening accounts, registering fee-bearing
//! transactions and querying balances.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, or in-memory maps
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the stores (create pool and run migrations for postgres)
//! 3. Build HTTP router
//! 4. Start server on configured port

use std::sync::Arc;

use bank_transaction_service::{
    AppState,
    config::{Config, StorageBackend},
    db, routes,
    store::{InMemoryAccountStore, InMemoryTransactionStore, PgAccountStore, PgTransactionStore},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(backend = ?config.storage_backend, "Configuration loaded");

    let state = match (config.storage_backend, config.database_url.as_deref()) {
        (StorageBackend::Postgres, Some(database_url)) => {
            let pool = db::create_pool(database_url, config.database_max_connections).await?;
            tracing::info!("Database pool created");

            db::run_migrations(&pool).await?;
            tracing::info!("Database migrations complete");

            AppState::new(
                Arc::new(PgAccountStore::new(pool.clone())),
                Arc::new(PgTransactionStore::new(pool)),
            )
        }
        (StorageBackend::Postgres, None) => {
            anyhow::bail!("DATABASE_URL must be set when STORAGE_BACKEND is postgres")
        }
        (StorageBackend::Memory, _) => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            AppState::new(
                Arc::new(InMemoryAccountStore::new()),
                Arc::new(InMemoryTransactionStore::new()),
            )
        }
    };

    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
