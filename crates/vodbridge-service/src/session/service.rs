//! Single-session resolution with admin fallback.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use vodbridge_client::{PlatformAuth, SessionLookup, VideoPlatform};
use vodbridge_core::AppResult;
use vodbridge_core::config::platform::PlatformConfig;
use vodbridge_entity::{Session, SessionView};

use crate::context::RequestContext;

/// Resolves individual sessions into display-ready views.
///
/// The remote API returns an empty result both for sessions that do not
/// exist and for sessions the caller may not see, so a miss as the acting
/// user is retried once with the admin credential. A session visible only
/// to the admin is still embeddable by reference, and the view carries
/// `can_access = false` so the picker can say so.
#[derive(Debug, Clone)]
pub struct SessionDirectory {
    platform: Arc<dyn VideoPlatform>,
    config: PlatformConfig,
}

impl SessionDirectory {
    /// Creates a new session directory.
    pub fn new(platform: Arc<dyn VideoPlatform>, config: PlatformConfig) -> Self {
        Self { platform, config }
    }

    /// Look up one session; `None` means neither credential resolved it.
    pub async fn resolve(
        &self,
        ctx: &RequestContext,
        session_id: Uuid,
    ) -> AppResult<Option<SessionView>> {
        let user_auth = PlatformAuth::for_user(&self.config, &ctx.username);
        if let SessionLookup::Found(session) =
            self.platform.get_session_by_id(&user_auth, session_id).await?
        {
            return Ok(Some(self.view(session, true)));
        }

        debug!(%session_id, "Session not visible to acting user, retrying as admin");
        let admin_auth = PlatformAuth::admin(&self.config);
        match self
            .platform
            .get_session_by_id(&admin_auth, session_id)
            .await?
        {
            SessionLookup::Found(session) => Ok(Some(self.view(session, false))),
            SessionLookup::NotFound => Ok(None),
        }
    }

    /// Mint a short-lived viewer URL that skips the platform's own login.
    /// Signed for the acting user; valid for a few seconds only.
    pub async fn authenticated_viewer_url(
        &self,
        ctx: &RequestContext,
        viewer_url: &str,
    ) -> AppResult<String> {
        let auth = PlatformAuth::for_user(&self.config, &ctx.username);
        self.platform.get_authenticated_url(&auth, viewer_url).await
    }

    fn view(&self, session: Session, can_access: bool) -> SessionView {
        SessionView {
            id: session.id,
            name: session.name,
            created: session.created_at.format("%-d %B %Y, %-I:%M %p").to_string(),
            duration: format_duration(session.duration_seconds),
            viewer_url: session.viewer_url,
            thumb_url: self.absolutize(&session.thumb_url),
            can_access,
        }
    }

    /// Thumbnail URLs arrive in several shapes (absolute,
    /// protocol-relative, host-relative, bare path); normalize all of them
    /// against the configured server.
    fn absolutize(&self, url: &str) -> String {
        if url.is_empty() {
            return String::new();
        }
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        if let Some(rest) = url.strip_prefix("//") {
            return format!("https://{rest}");
        }
        if url.starts_with('/') {
            return format!("{}{url}", self.config.base_url());
        }
        format!("{}/{url}", self.config.base_url())
    }
}

/// Format a second count as `H:MM:SS`, rounding fractional seconds.
fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}
