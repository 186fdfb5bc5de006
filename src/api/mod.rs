//! API layer - HTTP endpoint handlers organized by domain.

mod auth;
mod generate;
mod health;
mod metrics;
mod routes;
mod template;

// Re-export all handlers for use in server/app.rs
pub use auth::{login, LoginForm};
pub use generate::{generate_from_template, generate_html, GenerationRequest, StoredGenerationRequest};
pub use health::health;
pub use metrics::prometheus_metrics;
pub use routes::api_routes;
pub use template::{
    create_template, delete_template, get_template, list_templates, update_template,
    DeleteResponse,
};
