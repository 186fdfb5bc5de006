//! Template CRUD endpoints.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use crate::error::AppError;
use crate::metrics::TemplateMetrics;
use crate::server::{AdminIdentity, AppState};
use crate::template::{Template, TemplateDraft};

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// GET /api/templates - List all templates
#[tracing::instrument(name = "http.list_templates", skip(state, admin), fields(user = %admin.0))]
pub async fn list_templates(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
) -> Result<Json<Vec<Template>>, AppError> {
    let templates = state.template_store.list().await?;
    TemplateMetrics::record("list");

    Ok(Json(templates))
}

/// POST /api/templates - Create a new template
#[tracing::instrument(
    name = "http.create_template",
    skip(state, admin, request),
    fields(user = %admin.0, name = %request.name)
)]
pub async fn create_template(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Json(request): Json<TemplateDraft>,
) -> Result<Json<Template>, AppError> {
    let created = state.template_store.create(request).await?;
    TemplateMetrics::record("create");

    tracing::info!(template_id = %created.id, "Template created");
    Ok(Json(created))
}

/// GET /api/templates/{id} - Get a specific template
#[tracing::instrument(name = "http.get_template", skip(state, admin), fields(user = %admin.0))]
pub async fn get_template(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<String>,
) -> Result<Json<Template>, AppError> {
    let template = state.template_store.get(&id).await?;
    TemplateMetrics::record("get");

    Ok(Json(template))
}

/// PUT /api/templates/{id} - Replace name and content of a template
#[tracing::instrument(
    name = "http.update_template",
    skip(state, admin, request),
    fields(user = %admin.0)
)]
pub async fn update_template(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<String>,
    Json(request): Json<TemplateDraft>,
) -> Result<Json<Template>, AppError> {
    let updated = state.template_store.update(&id, request).await?;
    TemplateMetrics::record("update");

    tracing::info!(template_id = %updated.id, "Template updated");
    Ok(Json(updated))
}

/// DELETE /api/templates/{id} - Delete a template
#[tracing::instrument(name = "http.delete_template", skip(state, admin), fields(user = %admin.0))]
pub async fn delete_template(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.template_store.delete(&id).await?;
    TemplateMetrics::record("delete");

    tracing::info!(template_id = %id, "Template deleted");
    Ok(Json(DeleteResponse {
        message: "Template deleted".to_string(),
    }))
}
