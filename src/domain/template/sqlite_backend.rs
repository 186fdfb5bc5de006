//! SQLite-based template storage, the default for single-node deployments.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::store::{TemplateRepository, CREATE_TEMPLATES_NAME_INDEX, CREATE_TEMPLATES_TABLE};
use super::types::{Template, TemplateDraft, TemplateError, TemplateResult};

pub struct SqliteTemplateStore {
    pool: SqlitePool,
}

impl SqliteTemplateStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `templates` table and its index if they do not exist yet.
    pub async fn ensure_schema(&self) -> TemplateResult<()> {
        sqlx::query(CREATE_TEMPLATES_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(CREATE_TEMPLATES_NAME_INDEX)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl TemplateRepository for SqliteTemplateStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn list(&self) -> TemplateResult<Vec<Template>> {
        let templates = sqlx::query_as::<_, Template>("SELECT id, name, content FROM templates")
            .fetch_all(&self.pool)
            .await?;
        Ok(templates)
    }

    async fn get(&self, id: &str) -> TemplateResult<Template> {
        sqlx::query_as::<_, Template>("SELECT id, name, content FROM templates WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: TemplateDraft) -> TemplateResult<Template> {
        let template = Template::from_draft(draft);

        sqlx::query("INSERT INTO templates (id, name, content) VALUES (?1, ?2, ?3)")
            .bind(&template.id)
            .bind(&template.name)
            .bind(&template.content)
            .execute(&self.pool)
            .await?;

        tracing::debug!(template_id = %template.id, "Template created (SQLite)");
        Ok(template)
    }

    async fn update(&self, id: &str, draft: TemplateDraft) -> TemplateResult<Template> {
        let result = sqlx::query("UPDATE templates SET name = ?2, content = ?3 WHERE id = ?1")
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.content)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TemplateError::NotFound(id.to_string()));
        }

        tracing::debug!(template_id = %id, "Template updated (SQLite)");
        Ok(Template {
            id: id.to_string(),
            name: draft.name,
            content: draft.content,
        })
    }

    async fn delete(&self, id: &str) -> TemplateResult<()> {
        let result = sqlx::query("DELETE FROM templates WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TemplateError::NotFound(id.to_string()));
        }

        tracing::debug!(template_id = %id, "Template deleted (SQLite)");
        Ok(())
    }

    async fn ping(&self) -> TemplateResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::database::connect_sqlite;

    async fn memory_store() -> SqliteTemplateStore {
        let config = DatabaseConfig {
            backend: "sqlite".to_string(),
            url: "sqlite::memory:".to_string(),
            connections: 1,
            timeout: 5,
        };
        let store = SqliteTemplateStore::new(connect_sqlite(&config).await.unwrap());
        store.ensure_schema().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_create_update_get_roundtrip() {
        let store = memory_store().await;

        let created = store
            .create(TemplateDraft::new("Invoice", "<p>TOTAL</p>"))
            .await
            .unwrap();

        let updated = store
            .update(&created.id, TemplateDraft::new("Invoice v2", "<p>AMOUNT</p>"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Invoice v2");
        assert_eq!(fetched.content, "<p>AMOUNT</p>");
    }

    #[tokio::test]
    async fn test_missing_ids_report_not_found() {
        let store = memory_store().await;

        assert!(matches!(
            store.get("nope").await,
            Err(TemplateError::NotFound(_))
        ));
        assert!(matches!(
            store.update("nope", TemplateDraft::new("a", "b")).await,
            Err(TemplateError::NotFound(_))
        ));
        assert!(matches!(
            store.delete("nope").await,
            Err(TemplateError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let store = memory_store().await;

        let created = store.create(TemplateDraft::new("Gone", "")).await.unwrap();
        store.delete(&created.id).await.unwrap();

        assert!(matches!(
            store.get(&created.id).await,
            Err(TemplateError::NotFound(_))
        ));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_schema_creation_is_repeatable() {
        let store = memory_store().await;
        store.ensure_schema().await.unwrap();
        store.ping().await.unwrap();
    }
}
