use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use super::AppState;
use crate::auth::AuthError;
use crate::error::AppError;

/// Identity attached to requests that passed [`bearer_auth`].
#[derive(Debug, Clone)]
pub struct AdminIdentity(pub String);

/// Bearer token authentication middleware
/// Rejects the request with 401 unless the token belongs to the configured admin
pub async fn bearer_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&req).ok_or(AuthError::MissingToken)?;
    let identity = state.token_guard.authorize(token)?;

    req.extensions_mut().insert(AdminIdentity(identity));
    Ok(next.run(req).await)
}

/// Extract bearer token from Authorization header
pub fn extract_bearer_token(req: &Request<Body>) -> Option<&str> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())?;

    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/api/templates");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extracts_bearer_token() {
        let req = request_with(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer_token(&req), Some("abc.def.ghi"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let req = request_with(Some("bearer abc"));
        assert_eq!(extract_bearer_token(&req), Some("abc"));
    }

    #[test]
    fn test_rejects_other_schemes_and_missing_header() {
        assert_eq!(extract_bearer_token(&request_with(Some("Basic abc"))), None);
        assert_eq!(extract_bearer_token(&request_with(Some("Bearer"))), None);
        assert_eq!(extract_bearer_token(&request_with(Some("Bearer   "))), None);
        assert_eq!(extract_bearer_token(&request_with(None)), None);
    }
}
