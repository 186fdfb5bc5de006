//! HTML generation endpoints.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::metrics::GenerationMetrics;
use crate::render::{generate, RenderedHtml};
use crate::server::{AdminIdentity, AppState};

#[derive(Debug, Deserialize)]
pub struct GenerationRequest {
    pub template_content: String,
    pub input_text: String,
}

#[derive(Debug, Deserialize)]
pub struct StoredGenerationRequest {
    pub input_text: String,
}

/// POST /api/generate - Render ad-hoc template content
#[tracing::instrument(
    name = "http.generate",
    skip(admin, request),
    fields(user = %admin.0, template_len = request.template_content.len())
)]
pub async fn generate_html(
    Extension(admin): Extension<AdminIdentity>,
    Json(request): Json<GenerationRequest>,
) -> Json<RenderedHtml> {
    let rendered = generate(&request.template_content, &request.input_text);
    GenerationMetrics::record(rendered.replacements_count);

    tracing::debug!(replacements = rendered.replacements_count, "HTML generated");
    Json(rendered)
}

/// POST /api/templates/{id}/generate - Render a stored template
#[tracing::instrument(
    name = "http.generate_from_template",
    skip(state, admin, request),
    fields(user = %admin.0)
)]
pub async fn generate_from_template(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<String>,
    Json(request): Json<StoredGenerationRequest>,
) -> Result<Json<RenderedHtml>, AppError> {
    let template = state.template_store.get(&id).await?;

    let rendered = generate(&template.content, &request.input_text);
    GenerationMetrics::record(rendered.replacements_count);

    tracing::debug!(
        template_id = %id,
        replacements = rendered.replacements_count,
        "HTML generated from stored template"
    );
    Ok(Json(rendered))
}
