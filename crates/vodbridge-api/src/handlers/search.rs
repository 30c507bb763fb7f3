//! Name search handler.

use axum::Json;
use axum::extract::{Query, State};
use tracing::warn;

use vodbridge_core::types::Warning;

use crate::error::ApiError;
use crate::dto::request::SearchParams;
use crate::dto::response::{ApiResponse, SearchResponse};
use crate::extractors::ActingUser;
use crate::state::AppState;

/// GET /api/search
pub async fn search(
    State(state): State<AppState>,
    acting: ActingUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchResponse>>, ApiError> {
    let response = match state.listing_service.search(&acting, &params.q).await {
        Ok(children) => SearchResponse {
            children,
            warnings: Vec::new(),
        },
        Err(err) if err.is_degradable() => {
            warn!(error = %err, query = %params.q, "Search degraded");
            SearchResponse {
                children: Vec::new(),
                warnings: vec![Warning::from_error("search", &err)],
            }
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Json(ApiResponse::ok(response)))
}
