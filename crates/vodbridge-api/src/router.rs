//! Route definitions for the VodBridge HTTP API.
//!
//! LMS-facing routes are mounted under `/api`; the platform-facing SSO
//! callback sits at the root so the configured callback URL stays short.

use axum::http::{HeaderValue, Method};
use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use vodbridge_core::config::app::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/browse", get(handlers::browse::browse))
        .route("/search", get(handlers::search::search))
        .route("/sessions/{id}", get(handlers::session::get_session))
        .route(
            "/sessions/{id}/viewer-url",
            get(handlers::session::get_viewer_url),
        )
        .route("/health", get(handlers::health::health));

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .route("/sso/callback", get(handlers::sso::callback))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Builds a CORS tower layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    if config.allowed_origins.contains(&"*".to_string()) {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    if config.allowed_headers.contains(&"*".to_string()) {
        layer = layer.allow_headers(Any);
    }

    layer
}
