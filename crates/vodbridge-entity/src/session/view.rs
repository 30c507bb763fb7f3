//! Display-ready session metadata for the picker widget.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A session prepared for preview/embedding: dates and durations are
/// human-formatted and the thumbnail URL is absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    /// Remote session id.
    pub id: Uuid,
    /// Session name.
    pub name: String,
    /// Human-formatted creation date.
    pub created: String,
    /// Human-formatted duration (`H:MM:SS`).
    pub duration: String,
    /// Viewer page URL.
    pub viewer_url: String,
    /// Absolute thumbnail URL.
    pub thumb_url: String,
    /// Whether the acting user can actually view the source video.
    /// False when the session resolved only via the admin credential.
    pub can_access: bool,
}
