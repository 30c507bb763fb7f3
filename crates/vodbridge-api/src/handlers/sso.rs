//! SSO callback handler.

use axum::extract::{Query, State};
use axum::response::Redirect;

use vodbridge_service::sso::SsoRequest;

use crate::error::ApiError;
use crate::dto::request::SsoParams;
use crate::extractors::ActingUser;
use crate::state::AppState;

/// GET /sso/callback
///
/// The video platform lands a browser here mid-login; a valid signature
/// turns into a 302 back to the platform, anything else is a 400.
pub async fn callback(
    State(state): State<AppState>,
    acting: ActingUser,
    Query(params): Query<SsoParams>,
) -> Result<Redirect, ApiError> {
    let request = SsoRequest {
        server_name: params.server_name,
        auth_code: params.auth_code,
        callback_url: params.callback_url,
        expiration: params.expiration,
    };
    let location = state.sso_service.handle(&acting, &request).await?;
    Ok(Redirect::temporary(&location))
}
