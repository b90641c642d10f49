//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository implementations of the core storage traits
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{InventoryRepository, SettingsRepository, TransactionRepository};

use std::time::Duration;

use cajachica_shared::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a pooled connection to the configured database.
///
/// Returns `Ok(None)` when no database URL is configured, so the service
/// can run without storage.
///
/// # Errors
///
/// Returns an error if a URL is configured but the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<Option<DatabaseConnection>, DbErr> {
    let Some(url) = config.configured_url() else {
        tracing::warn!("No database URL configured, storage endpoints will return 503");
        return Ok(None);
    };

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database connection established"
    );
    Ok(Some(db))
}
