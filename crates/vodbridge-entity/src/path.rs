//! Navigation paths and breadcrumbs.
//!
//! A path is a `/`-joined sequence of folder ids walked from the root; the
//! root itself is the reserved all-zero id. The LMS echoes path strings
//! back verbatim on lazy-load requests.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vodbridge_core::{AppError, AppResult};

/// One breadcrumb entry: a display name plus the path string that
/// re-lists that level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crumb {
    /// Display name for the segment.
    pub name: String,
    /// `/`-joined id path from the root to this segment.
    pub path: String,
}

/// A parsed navigation path: an ordered, non-empty sequence of folder ids,
/// the first of which is the root marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPath {
    segments: Vec<Uuid>,
}

impl FolderPath {
    /// The root path.
    pub fn root() -> Self {
        Self {
            segments: vec![Uuid::nil()],
        }
    }

    /// Parse a raw path string. Empty input normalizes to the root; any
    /// segment that is not a UUID is a validation error.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        for part in trimmed.split('/') {
            let id = Uuid::parse_str(part)
                .map_err(|_| AppError::validation(format!("Invalid path segment: {part}")))?;
            segments.push(id);
        }

        // Paths handed out by listings always start at the root marker;
        // accept bare folder paths too by prepending it.
        if segments.first() != Some(&Uuid::nil()) {
            segments.insert(0, Uuid::nil());
        }

        Ok(Self { segments })
    }

    /// The folder id this path points at.
    pub fn leaf(&self) -> Uuid {
        *self.segments.last().expect("path is never empty")
    }

    /// Whether this path points at the root.
    pub fn is_root(&self) -> bool {
        self.leaf().is_nil()
    }

    /// All segments from root to leaf.
    pub fn segments(&self) -> &[Uuid] {
        &self.segments
    }

    /// Path strings for each prefix of this path, aligned with
    /// [`segments`](Self::segments).
    pub fn prefixes(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.segments.len());
        let mut current = String::new();
        for (i, id) in self.segments.iter().enumerate() {
            if i > 0 {
                current.push('/');
            }
            current.push_str(&id.to_string());
            out.push(current.clone());
        }
        out
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .segments
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("/");
        write!(f, "{joined}")
    }
}
