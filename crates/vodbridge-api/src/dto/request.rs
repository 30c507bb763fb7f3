//! Request DTOs.

use serde::Deserialize;

/// Query parameters for `GET /api/browse`.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseParams {
    /// `/`-joined folder id path; empty or absent means the root.
    #[serde(default)]
    pub path: String,
}

/// Query parameters for `GET /api/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Wildcard name query.
    pub q: String,
}

/// Query parameters the video platform sends to `GET /sso/callback`.
///
/// Field names match the platform's query string exactly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsoParams {
    /// Platform server name.
    #[serde(default)]
    pub server_name: String,
    /// Signature over server name and expiration.
    #[serde(default)]
    pub auth_code: String,
    /// Platform URL to redirect back to.
    #[serde(default)]
    pub callback_url: String,
    /// Expiration timestamp chosen by the platform.
    #[serde(default)]
    pub expiration: String,
}
