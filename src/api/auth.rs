//! Token endpoint.

use axum::{extract::State, Form, Json};
use serde::Deserialize;

use crate::auth::AccessToken;
use crate::error::AppError;
use crate::metrics::AuthMetrics;
use crate::server::AppState;

/// OAuth2 password-grant style form. Extra fields (grant_type, scope) are ignored.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// POST /api/token - Exchange admin credentials for a bearer token
#[tracing::instrument(
    name = "http.login",
    skip(state, form),
    fields(username = %form.username)
)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<AccessToken>, AppError> {
    let token = state
        .credential_validator
        .login(&form.username, &form.password)?;

    AuthMetrics::record_login();
    Ok(Json(token))
}
