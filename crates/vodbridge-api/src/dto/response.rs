//! Response DTOs.

use serde::{Deserialize, Serialize};

use vodbridge_core::types::Warning;
use vodbridge_entity::{Crumb, SessionView, TreeNode};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of `GET /api/browse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseResponse {
    /// Breadcrumb trail from the root to the requested path.
    pub breadcrumbs: Vec<Crumb>,
    /// Children at the requested level; folder nodes at the root carry
    /// their full subtree.
    pub children: Vec<TreeNode>,
    /// Non-fatal problems encountered while listing.
    pub warnings: Vec<Warning>,
}

/// Body of `GET /api/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching folders first, then matching playable sessions.
    pub children: Vec<TreeNode>,
    /// Non-fatal problems encountered while searching.
    pub warnings: Vec<Warning>,
}

/// Body of `GET /api/sessions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// The resolved session, absent when no credential could see it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionView>,
    /// Non-fatal problems, including `session_missing`.
    pub warnings: Vec<Warning>,
}

/// Body of `GET /api/sessions/{id}/viewer-url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerUrlResponse {
    /// Signed viewer URL for the acting user, absent when the session
    /// could not be resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Non-fatal problems, including `session_missing`.
    pub warnings: Vec<Warning>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status string.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Cache backend health.
    pub cache: String,
    /// Whether the remote platform connection is configured.
    pub platform_configured: bool,
}
