//! Folder/session browsing handler.

use axum::Json;
use axum::extract::{Query, State};
use tracing::warn;

use vodbridge_core::types::Warning;

use crate::error::ApiError;
use crate::dto::request::BrowseParams;
use crate::dto::response::{ApiResponse, BrowseResponse};
use crate::extractors::ActingUser;
use crate::state::AppState;

/// GET /api/browse
///
/// Remote faults and missing configuration degrade to an empty listing
/// with a warning so the LMS picker still renders.
pub async fn browse(
    State(state): State<AppState>,
    acting: ActingUser,
    Query(params): Query<BrowseParams>,
) -> Result<Json<ApiResponse<BrowseResponse>>, ApiError> {
    let response = match state.listing_service.list(&acting, &params.path).await {
        Ok(listing) => BrowseResponse {
            breadcrumbs: listing.breadcrumbs,
            children: listing.children,
            warnings: Vec::new(),
        },
        Err(err) if err.is_degradable() => {
            warn!(error = %err, path = %params.path, "Listing degraded");
            BrowseResponse {
                breadcrumbs: Vec::new(),
                children: Vec::new(),
                warnings: vec![Warning::from_error("listing", &err)],
            }
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Json(ApiResponse::ok(response)))
}
