//! HTML template storage.
//!
//! This module provides:
//! - The `Template` record (`id`, `name`, `content`)
//! - The `TemplateRepository` trait with memory, SQLite and PostgreSQL backends
//! - A factory that picks the backend from configuration
//!
//! # Example
//!
//! ```ignore
//! let store = create_template_store(&settings.database).await?;
//!
//! let created = store
//!     .create(TemplateDraft::new("Welcome", "<h1>Hello NAME</h1>"))
//!     .await?;
//!
//! store
//!     .update(&created.id, TemplateDraft::new("Welcome", "<h1>Hi NAME</h1>"))
//!     .await?;
//! ```

mod factory;
mod memory_backend;
mod postgres_backend;
mod sqlite_backend;
mod store;
mod types;

pub use factory::create_template_store;
pub use memory_backend::MemoryTemplateStore;
pub use postgres_backend::PostgresTemplateStore;
pub use sqlite_backend::SqliteTemplateStore;
pub use store::TemplateRepository;
pub use types::{Template, TemplateDraft, TemplateError, TemplateResult};
