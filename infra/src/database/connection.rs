//! MySQL connection pool construction

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use hs_core::errors::DomainError;
use hs_shared::config::DatabaseConfig;

/// Create a MySQL connection pool from configuration
///
/// # Arguments
/// * `config` - Database configuration (URL, pool sizing, timeouts)
///
/// # Returns
/// * `Ok(MySqlPool)` - Ready-to-use connection pool
/// * `Err(DomainError)` - The database was unreachable
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    tracing::info!(
        max_connections = config.max_connections,
        "connecting to database"
    );

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database(format!("Failed to connect to database: {}", e)))
}
