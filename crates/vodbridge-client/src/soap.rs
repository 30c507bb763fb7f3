//! SOAP transport implementation of [`VideoPlatform`].

use async_trait::async_trait;
use uuid::Uuid;

use vodbridge_core::config::platform::PlatformConfig;
use vodbridge_core::error::ErrorKind;
use vodbridge_core::{AppError, AppResult};
use vodbridge_entity::{Folder, Session};

use crate::auth::PlatformAuth;
use crate::envelope;
use crate::parse;
use crate::platform::{ListFoldersRequest, ListSessionsRequest, SessionLookup, VideoPlatform};

/// Client for the platform's SOAP web service.
///
/// Construction never fails: every call checks the configuration first and
/// returns `ErrorKind::Configuration` when the platform settings are
/// incomplete, so an unconfigured deployment degrades instead of crashing.
#[derive(Debug, Clone)]
pub struct SoapPlatformClient {
    http: reqwest::Client,
    config: PlatformConfig,
}

impl SoapPlatformClient {
    /// Create a client from platform settings.
    pub fn new(config: PlatformConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn ensure_configured(&self) -> AppResult<()> {
        if self.config.is_configured() {
            Ok(())
        } else {
            Err(AppError::configuration(
                "Video platform is not configured (hostname, instance name, or application key missing)",
            ))
        }
    }

    async fn call(
        &self,
        path: &str,
        contract: &str,
        operation: &str,
        fragment: String,
    ) -> AppResult<String> {
        self.ensure_configured()?;

        let url = format!("{}{path}", self.config.base_url());
        let action = envelope::action(contract, operation);
        tracing::debug!(%url, operation, "Calling remote video platform");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{action}\""))
            .body(envelope::wrap(&fragment))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Remote call {operation} failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed reading {operation} response: {e}"),
                e,
            )
        })?;

        // Faults arrive with a 500 status; surface the faultstring rather
        // than the bare status line.
        parse::check_fault(&body)?;
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Remote call {operation} returned HTTP {status}"
            )));
        }
        Ok(body)
    }
}

#[async_trait]
impl VideoPlatform for SoapPlatformClient {
    async fn list_folders(
        &self,
        auth: &PlatformAuth,
        request: &ListFoldersRequest,
    ) -> AppResult<Vec<Folder>> {
        let body = self
            .call(
                envelope::SESSION_MANAGEMENT_PATH,
                "ISessionManagement",
                "GetFoldersList",
                envelope::get_folders_list(auth, request),
            )
            .await?;
        parse::parse_folders(&body)
    }

    async fn list_sessions(
        &self,
        auth: &PlatformAuth,
        request: &ListSessionsRequest,
    ) -> AppResult<Vec<Session>> {
        let body = self
            .call(
                envelope::SESSION_MANAGEMENT_PATH,
                "ISessionManagement",
                "GetSessionsList",
                envelope::get_sessions_list(auth, request),
            )
            .await?;
        parse::parse_sessions(&body)
    }

    async fn get_folders_by_id(
        &self,
        auth: &PlatformAuth,
        ids: &[Uuid],
    ) -> AppResult<Vec<Folder>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let body = self
            .call(
                envelope::SESSION_MANAGEMENT_PATH,
                "ISessionManagement",
                "GetFoldersById",
                envelope::get_folders_by_id(auth, ids),
            )
            .await?;
        parse::parse_folders(&body)
    }

    async fn get_session_by_id(
        &self,
        auth: &PlatformAuth,
        id: Uuid,
    ) -> AppResult<SessionLookup> {
        let body = self
            .call(
                envelope::SESSION_MANAGEMENT_PATH,
                "ISessionManagement",
                "GetSessionsById",
                envelope::get_sessions_by_id(auth, id),
            )
            .await?;
        let mut sessions = parse::parse_sessions(&body)?;
        Ok(match sessions.pop() {
            Some(session) => SessionLookup::Found(session),
            None => SessionLookup::NotFound,
        })
    }

    async fn get_authenticated_url(
        &self,
        auth: &PlatformAuth,
        viewer_url: &str,
    ) -> AppResult<String> {
        let body = self
            .call(
                envelope::AUTH_PATH,
                "IAuth",
                "GetAuthenticatedUrl",
                envelope::get_authenticated_url(auth, viewer_url),
            )
            .await?;
        parse::text_result(&body, "GetAuthenticatedUrlResult")?.ok_or_else(|| {
            AppError::external_service("GetAuthenticatedUrl returned no URL")
        })
    }

    async fn sync_external_user(
        &self,
        auth: &PlatformAuth,
        external_user_key: &str,
    ) -> AppResult<()> {
        self.call(
            envelope::USER_MANAGEMENT_PATH,
            "IUserManagement",
            "SyncExternalUser",
            envelope::sync_external_user(auth, external_user_key),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_client_degrades() {
        let client = SoapPlatformClient::new(PlatformConfig::default());
        let auth = PlatformAuth::admin(&PlatformConfig::default());
        let err = client
            .list_folders(&auth, &ListFoldersRequest::snapshot())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.is_degradable());
    }
}
