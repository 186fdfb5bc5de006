use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::server::{bearer_auth, AppState};

use super::auth::login;
use super::generate::{generate_from_template, generate_html};
use super::health::health;
use super::metrics::prometheus_metrics;
use super::template::{
    create_template, delete_template, get_template, list_templates, update_template,
};

pub fn api_routes(state: AppState) -> Router<AppState> {
    // Everything except token issuance requires a valid admin bearer token
    let protected = Router::new()
        .route("/templates", get(list_templates).post(create_template))
        .route(
            "/templates/{id}",
            get(get_template).put(update_template).delete(delete_template),
        )
        .route("/templates/{id}/generate", post(generate_from_template))
        .route("/generate", post(generate_html))
        .route_layer(middleware::from_fn_with_state(state, bearer_auth));

    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        .nest(
            "/api",
            Router::new()
                .route("/token", post(login))
                .merge(protected),
        )
}
