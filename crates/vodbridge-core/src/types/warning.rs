//! Per-operation warning records.
//!
//! Remote faults and missing items are attached to the response as warnings
//! where the rest of the page can still render, instead of failing the
//! whole request.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A non-fatal problem attached to an otherwise successful operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    /// The item category the warning relates to (e.g. `"session"`, `"listing"`).
    pub item: String,
    /// Identifier of the affected item, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// Machine-readable warning code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl Warning {
    /// Create a new warning.
    pub fn new(
        item: impl Into<String>,
        item_id: Option<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            item_id,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Warning for a session that does not resolve for anyone.
    pub fn session_missing(session_id: impl Into<String>) -> Self {
        let id = session_id.into();
        Self::new(
            "session",
            Some(id),
            "session_missing",
            "Session was not found or has been removed",
        )
    }

    /// Warning derived from a degradable error on a listing-style operation.
    pub fn from_error(item: impl Into<String>, err: &AppError) -> Self {
        Self::new(
            item,
            None,
            err.kind.to_string().to_lowercase(),
            err.message.clone(),
        )
    }
}
