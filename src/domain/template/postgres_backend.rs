//! PostgreSQL-based template storage.
//!
//! Templates live in a single `templates` table and survive service restarts.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{TemplateRepository, CREATE_TEMPLATES_NAME_INDEX, CREATE_TEMPLATES_TABLE};
use super::types::{Template, TemplateDraft, TemplateError, TemplateResult};

pub struct PostgresTemplateStore {
    pool: PgPool,
}

impl PostgresTemplateStore {
    pub fn new(pool: PgPool) -> Self {
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
impl TemplateRepository for PostgresTemplateStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self) -> TemplateResult<Vec<Template>> {
        let templates = sqlx::query_as::<_, Template>("SELECT id, name, content FROM templates")
            .fetch_all(&self.pool)
            .await?;
        Ok(templates)
    }

    async fn get(&self, id: &str) -> TemplateResult<Template> {
        sqlx::query_as::<_, Template>("SELECT id, name, content FROM templates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: TemplateDraft) -> TemplateResult<Template> {
        let template = Template::from_draft(draft);

        sqlx::query("INSERT INTO templates (id, name, content) VALUES ($1, $2, $3)")
            .bind(&template.id)
            .bind(&template.name)
            .bind(&template.content)
            .execute(&self.pool)
            .await?;

        tracing::debug!(template_id = %template.id, "Template created (PostgreSQL)");
        Ok(template)
    }

    async fn update(&self, id: &str, draft: TemplateDraft) -> TemplateResult<Template> {
        let updated = sqlx::query_as::<_, Template>(
            r#"
            UPDATE templates
            SET name = $2, content = $3
            WHERE id = $1
            RETURNING id, name, content
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.content)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| TemplateError::NotFound(id.to_string()))?;

        tracing::debug!(template_id = %id, "Template updated (PostgreSQL)");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> TemplateResult<()> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TemplateError::NotFound(id.to_string()));
        }

        tracing::debug!(template_id = %id, "Template deleted (PostgreSQL)");
        Ok(())
    }

    async fn ping(&self) -> TemplateResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
