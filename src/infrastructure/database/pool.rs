//! Connection pools for the SQL template backends.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;

/// Create a PostgreSQL pool from configuration.
pub async fn connect_postgres(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.connections)
        .acquire_timeout(Duration::from_secs(config.timeout))
        .connect(&config.url)
        .await?;

    tracing::info!(
        url = %mask_database_url(&config.url),
        pool_size = config.connections,
        "PostgreSQL connection pool created"
    );

    Ok(pool)
}

/// Create a SQLite pool from configuration, creating the file if missing.
///
/// In-memory databases are limited to one connection so that every query sees
/// the same database.
pub async fn connect_sqlite(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let max_connections = if config.url.contains(":memory:") {
        1
    } else {
        config.connections
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(config.timeout))
        .connect_with(options)
        .await?;

    tracing::info!(
        url = %config.url,
        pool_size = max_connections,
        "SQLite connection pool created"
    );

    Ok(pool)
}

/// Mask the password in a database URL for safe logging.
pub fn mask_database_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let prefix = &url[..colon_pos + 1];
            let suffix = &url[at_pos..];
            return format!("{}***{}", prefix, suffix);
        }
    }
    url.to_string()
}
