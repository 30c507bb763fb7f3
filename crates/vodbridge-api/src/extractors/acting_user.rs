//! `ActingUser` extractor — reads the asserted LMS identity and injects
//! the request context.
//!
//! This service sits behind the LMS, which authenticates its own users and
//! forwards the username in the `X-Acting-User` header. The header is
//! trusted as-is; network-level access control keeps other callers out.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use vodbridge_core::error::AppError;
use vodbridge_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the LMS-asserted username.
pub const ACTING_USER_HEADER: &str = "x-acting-user";

/// Extracted acting-user context available in handlers.
#[derive(Debug, Clone)]
pub struct ActingUser(pub RequestContext);

impl std::ops::Deref for ActingUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for ActingUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let username = parts
            .headers
            .get(ACTING_USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::authentication("Missing X-Acting-User header"))?;

        Ok(ActingUser(RequestContext::new(username)))
    }
}
