//! Single-session lookup handler for the picker preview.

use axum::Json;
use axum::extract::{Path, State};
use tracing::warn;
use uuid::Uuid;

use vodbridge_core::types::Warning;

use crate::error::ApiError;
use crate::dto::response::{ApiResponse, SessionResponse, ViewerUrlResponse};
use crate::extractors::ActingUser;
use crate::state::AppState;

/// GET /api/sessions/{id}
///
/// A session nobody can resolve is not an HTTP error: the picker shows
/// the `session_missing` warning in place of the preview.
pub async fn get_session(
    State(state): State<AppState>,
    acting: ActingUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SessionResponse>>, ApiError> {
    let response = match state.session_directory.resolve(&acting, id).await {
        Ok(Some(session)) => SessionResponse {
            session: Some(session),
            warnings: Vec::new(),
        },
        Ok(None) => SessionResponse {
            session: None,
            warnings: vec![Warning::session_missing(id.to_string())],
        },
        Err(err) if err.is_degradable() => {
            warn!(error = %err, session_id = %id, "Session lookup degraded");
            SessionResponse {
                session: None,
                warnings: vec![Warning::from_error("session", &err)],
            }
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Json(ApiResponse::ok(response)))
}

/// GET /api/sessions/{id}/viewer-url
///
/// Resolves the session, then asks the platform to sign its viewer URL for
/// the acting user so the embed skips the platform's own login screen.
pub async fn get_viewer_url(
    State(state): State<AppState>,
    acting: ActingUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ViewerUrlResponse>>, ApiError> {
    let response = match state.session_directory.resolve(&acting, id).await {
        Ok(Some(session)) => {
            match state
                .session_directory
                .authenticated_viewer_url(&acting, &session.viewer_url)
                .await
            {
                Ok(url) => ViewerUrlResponse {
                    url: Some(url),
                    warnings: Vec::new(),
                },
                Err(err) if err.is_degradable() => {
                    warn!(error = %err, session_id = %id, "Viewer URL signing degraded");
                    ViewerUrlResponse {
                        url: None,
                        warnings: vec![Warning::from_error("session", &err)],
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(None) => ViewerUrlResponse {
            url: None,
            warnings: vec![Warning::session_missing(id.to_string())],
        },
        Err(err) if err.is_degradable() => {
            warn!(error = %err, session_id = %id, "Session lookup degraded");
            ViewerUrlResponse {
                url: None,
                warnings: vec![Warning::from_error("session", &err)],
            }
        }
        Err(err) => return Err(err.into()),
    };

    Ok(Json(ApiResponse::ok(response)))
}
