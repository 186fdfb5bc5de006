//! Template types and error definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Unsupported storage backend: {0}")]
    UnsupportedBackend(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// A stored HTML template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Template {
    /// Server-generated identifier, never rewritten
    pub id: String,

    /// Display label
    pub name: String,

    /// HTML body containing placeholder tokens
    pub content: String,
}

impl Template {
    /// Build a new record with a freshly generated identifier.
    pub fn from_draft(draft: TemplateDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            content: draft.content,
        }
    }

    /// Replace the mutable fields, keeping the identifier.
    pub fn apply(&mut self, draft: TemplateDraft) {
        self.name = draft.name;
        self.content = draft.content;
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDraft {
    pub name: String,
    pub content: String,
}

impl TemplateDraft {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
