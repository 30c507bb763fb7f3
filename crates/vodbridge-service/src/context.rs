//! Request context carrying the acting user's identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context for the current request.
///
/// The fronting LMS asserts the acting user's identity; it is passed into
/// service methods explicitly so every remote call knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// LMS username of the acting user.
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            request_time: Utc::now(),
        }
    }
}
