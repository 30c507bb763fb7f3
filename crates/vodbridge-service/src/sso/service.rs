//! SSO callback validation and response signing.
//!
//! The video platform redirects a browser here when it needs the LMS to
//! vouch for a viewer. The incoming request is signed with the shared
//! application key; a valid signature gets the acting user provisioned
//! remotely and a counter-signed redirect back to the platform.

use std::sync::Arc;

use tracing::{info, warn};

use vodbridge_client::{PlatformAuth, VideoPlatform, auth};
use vodbridge_core::config::platform::PlatformConfig;
use vodbridge_core::{AppError, AppResult};

use crate::context::RequestContext;

/// Parameters the platform sends to the callback endpoint.
#[derive(Debug, Clone)]
pub struct SsoRequest {
    /// Platform server name the handshake is for.
    pub server_name: String,
    /// Signature over the server name and expiration.
    pub auth_code: String,
    /// Platform URL to redirect back to.
    pub callback_url: String,
    /// Expiration timestamp (epoch seconds) the platform chose.
    pub expiration: String,
}

impl SsoRequest {
    fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("serverName", &self.server_name),
            ("authCode", &self.auth_code),
            ("callbackUrl", &self.callback_url),
            ("expiration", &self.expiration),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "Missing SSO parameter: {name}"
                )));
            }
        }
        Ok(())
    }
}

/// Handles the platform's SSO handshake.
#[derive(Debug, Clone)]
pub struct SsoService {
    platform: Arc<dyn VideoPlatform>,
    config: PlatformConfig,
}

impl SsoService {
    /// Creates a new SSO service.
    pub fn new(platform: Arc<dyn VideoPlatform>, config: PlatformConfig) -> Self {
        Self { platform, config }
    }

    /// Validate the incoming signature, provision the acting user
    /// remotely, and return the counter-signed redirect URL.
    pub async fn handle(&self, ctx: &RequestContext, request: &SsoRequest) -> AppResult<String> {
        request.validate()?;

        let signed_payload = format!(
            "serverName={}&expiration={}",
            request.server_name, request.expiration
        );
        let expected = auth::signed_code(&signed_payload, &self.config.application_key);
        if !expected.eq_ignore_ascii_case(&request.auth_code) {
            warn!(
                server_name = %request.server_name,
                "SSO auth code mismatch"
            );
            return Err(AppError::validation("Invalid SSO auth code"));
        }

        let external_user_key = auth::external_user_key(&self.config, &ctx.username);
        let admin = PlatformAuth::admin(&self.config);
        self.platform
            .sync_external_user(&admin, &external_user_key)
            .await?;
        info!(user_key = %external_user_key, "SSO handshake accepted");

        let response_payload = format!(
            "serverName={}&externalUserKey={}&expiration={}",
            request.server_name, external_user_key, request.expiration
        );
        let response_code = auth::signed_code(&response_payload, &self.config.application_key);

        let separator = if request.callback_url.contains('?') {
            '&'
        } else {
            '?'
        };
        Ok(format!(
            "{}{}serverName={}&externalUserKey={}&expiration={}&authCode={}",
            request.callback_url,
            separator,
            urlencoding::encode(&request.server_name),
            urlencoding::encode(&external_user_key),
            urlencoding::encode(&request.expiration),
            response_code,
        ))
    }
}
