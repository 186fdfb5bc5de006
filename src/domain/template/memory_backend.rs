//! In-memory template storage

use async_trait::async_trait;
use dashmap::DashMap;

use super::store::TemplateRepository;
use super::types::{Template, TemplateDraft, TemplateError, TemplateResult};

/// In-memory template storage. Contents are lost on restart.
pub struct MemoryTemplateStore {
    templates: DashMap<String, Template>,
}

impl Default for MemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }
}

#[async_trait]
impl TemplateRepository for MemoryTemplateStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> TemplateResult<Vec<Template>> {
        Ok(self
            .templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn get(&self, id: &str) -> TemplateResult<Template> {
        self.templates
            .get(id)
            .map(|t| t.clone())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: TemplateDraft) -> TemplateResult<Template> {
        let template = Template::from_draft(draft);
        self.templates.insert(template.id.clone(), template.clone());

        tracing::debug!(template_id = %template.id, "Template created (memory)");
        Ok(template)
    }

    async fn update(&self, id: &str, draft: TemplateDraft) -> TemplateResult<Template> {
        let mut entry = self
            .templates
            .get_mut(id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))?;

        entry.apply(draft);

        tracing::debug!(template_id = %id, "Template updated (memory)");
        Ok(entry.clone())
    }

    async fn delete(&self, id: &str) -> TemplateResult<()> {
        match self.templates.remove(id) {
            Some(_) => {
                tracing::debug!(template_id = %id, "Template deleted (memory)");
                Ok(())
            }
            None => Err(TemplateError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_create_and_get() {
        let store = MemoryTemplateStore::new();

        let created = store
            .create(TemplateDraft::new("Welcome", "<h1>NAME</h1>"))
            .await
            .unwrap();

        let retrieved = store.get(&created.id).await.unwrap();
        assert_eq!(retrieved, created);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_update_keeps_id() {
        let store = MemoryTemplateStore::new();

        let created = store
            .create(TemplateDraft::new("Original", "old"))
            .await
            .unwrap();

        let updated = store
            .update(&created.id, TemplateDraft::new("Updated", "new"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched.name, "Updated");
        assert_eq!(fetched.content, "new");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_store_update_missing() {
        let store = MemoryTemplateStore::new();

        let result = store
            .update("missing", TemplateDraft::new("x", "y"))
            .await;
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_delete() {
        let store = MemoryTemplateStore::new();

        let created = store.create(TemplateDraft::new("Test", "")).await.unwrap();
        store.delete(&created.id).await.unwrap();

        assert!(matches!(
            store.get(&created.id).await,
            Err(TemplateError::NotFound(_))
        ));
        assert!(matches!(
            store.delete(&created.id).await,
            Err(TemplateError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_store_list() {
        let store = MemoryTemplateStore::new();

        for i in 0..3 {
            store
                .create(TemplateDraft::new(format!("Template {}", i), "body"))
                .await
                .unwrap();
        }

        let list = store.list().await.unwrap();
        assert_eq!(list.len(), 3);
    }
}
