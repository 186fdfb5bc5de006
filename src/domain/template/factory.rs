//! Template backend factory

use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::database::{connect_postgres, connect_sqlite, mask_database_url};

use super::memory_backend::MemoryTemplateStore;
use super::postgres_backend::PostgresTemplateStore;
use super::sqlite_backend::SqliteTemplateStore;
use super::store::TemplateRepository;
use super::types::{TemplateError, TemplateResult};

/// Create a template backend based on configuration.
///
/// Returns the implementation named by `backend`:
/// - `"sqlite"`: `SqliteTemplateStore`, creating the database file if needed
/// - `"postgres"`: `PostgresTemplateStore`
/// - `"memory"`: `MemoryTemplateStore`
///
/// SQL backends create the `templates` table on first use.
pub async fn create_template_store(
    config: &DatabaseConfig,
) -> TemplateResult<Arc<dyn TemplateRepository>> {
    match config.backend.as_str() {
        "sqlite" => {
            tracing::info!(backend = "sqlite", url = %config.url, "Creating SQLite template store");
            let store = SqliteTemplateStore::new(connect_sqlite(config).await?);
            store.ensure_schema().await?;
            Ok(Arc::new(store))
        }
        "postgres" | "postgresql" => {
            tracing::info!(
                backend = "postgres",
                url = %mask_database_url(&config.url),
                "Creating PostgreSQL template store"
            );
            let store = PostgresTemplateStore::new(connect_postgres(config).await?);
            store.ensure_schema().await?;
            Ok(Arc::new(store))
        }
        "memory" => {
            tracing::info!(backend = "memory", "Creating memory template store");
            Ok(Arc::new(MemoryTemplateStore::new()))
        }
        other => Err(TemplateError::UnsupportedBackend(other.to_string())),
    }
}
