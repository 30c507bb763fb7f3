//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Processing state of a session on the remote platform.
///
/// Only `Complete` sessions are playable and eligible for embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Placeholder created, nothing recorded yet.
    Created,
    /// Recording is scheduled.
    Scheduled,
    /// Currently being recorded.
    Recording,
    /// Live broadcast in progress.
    Broadcasting,
    /// Recording finished, upload in progress.
    Uploading,
    /// Server-side processing in progress.
    Processing,
    /// Fully processed and playable.
    Complete,
    /// State string not recognized.
    Unknown,
}

impl SessionState {
    /// Parse the remote API's state string.
    pub fn from_remote(value: &str) -> Self {
        match value {
            "Created" => Self::Created,
            "Scheduled" => Self::Scheduled,
            "Recording" => Self::Recording,
            "Broadcasting" => Self::Broadcasting,
            "Uploading" => Self::Uploading,
            "Processing" => Self::Processing,
            "Complete" => Self::Complete,
            _ => Self::Unknown,
        }
    }

    /// The remote API's name for this state.
    pub fn as_remote(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Scheduled => "Scheduled",
            Self::Recording => "Recording",
            Self::Broadcasting => "Broadcasting",
            Self::Uploading => "Uploading",
            Self::Processing => "Processing",
            Self::Complete => "Complete",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether the session is playable.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// A recorded video session, the leaf unit embedded into course content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier on the remote platform.
    pub id: Uuid,
    /// Session name.
    pub name: String,
    /// When the session was recorded.
    pub created_at: DateTime<Utc>,
    /// Session length in seconds (fractional, as reported remotely).
    pub duration_seconds: f64,
    /// URL of the platform's viewer page for this session.
    pub viewer_url: String,
    /// Thumbnail URL as reported remotely; may be protocol- or
    /// host-relative.
    pub thumb_url: String,
    /// Containing folder id (None or unknown means orphaned).
    pub folder_id: Option<Uuid>,
    /// Processing state.
    pub state: SessionState,
}
