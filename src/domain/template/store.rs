//! Storage abstraction for templates.
//!
//! Backends (memory, SQLite, PostgreSQL) implement [`TemplateRepository`] so the
//! rest of the service never depends on which engine holds the records.

use async_trait::async_trait;

use super::types::{Template, TemplateDraft, TemplateResult};

/// Table definition shared by the SQL backends.
pub(crate) const CREATE_TEMPLATES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS templates (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        content TEXT NOT NULL
    )
"#;

pub(crate) const CREATE_TEMPLATES_NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS ix_templates_name ON templates (name)";

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Backend type identifier
    fn backend_name(&self) -> &'static str;

    /// All templates, in backing-store order.
    async fn list(&self) -> TemplateResult<Vec<Template>>;

    /// Point lookup by identifier.
    async fn get(&self, id: &str) -> TemplateResult<Template>;

    /// Persist a new template under a generated identifier.
    async fn create(&self, draft: TemplateDraft) -> TemplateResult<Template>;

    /// Replace name and content of an existing template.
    async fn update(&self, id: &str, draft: TemplateDraft) -> TemplateResult<Template>;

    /// Remove a template.
    async fn delete(&self, id: &str) -> TemplateResult<()>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> TemplateResult<()> {
        Ok(())
    }
}
