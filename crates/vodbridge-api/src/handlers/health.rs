//! Health check handler.

use axum::Json;
use axum::extract::State;

use vodbridge_core::traits::cache::CacheProvider;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let cache_ok = state.cache.health_check().await.unwrap_or(false);

    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cache: if cache_ok { "connected" } else { "unavailable" }.to_string(),
        platform_configured: state.config.platform.is_configured(),
    }))
}
