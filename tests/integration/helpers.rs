//! Shared test helpers for integration tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::{TimeZone, Utc};
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use vodbridge_api::AppState;
use vodbridge_cache::CacheManager;
use vodbridge_client::{
    ListFoldersRequest, ListSessionsRequest, PlatformAuth, SessionLookup, VideoPlatform,
};
use vodbridge_core::config::AppConfig;
use vodbridge_core::config::platform::PlatformConfig;
use vodbridge_core::{AppError, AppResult};
use vodbridge_entity::{Folder, Session, SessionState};

/// Scripted stand-in for the remote video platform.
///
/// Listing calls ignore the requested state filter on purpose so tests can
/// observe the service enforcing it locally. `fail_remote` makes every
/// listing call fail the way an unreachable server would.
#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    pub folders: Vec<Folder>,
    pub sessions: Vec<Session>,
    /// Session ids only the admin credential can resolve.
    pub admin_only: HashSet<Uuid>,
    pub fail_remote: bool,
    pub folder_calls: AtomicUsize,
    pub session_calls: AtomicUsize,
    pub synced_users: Mutex<Vec<String>>,
}

impl ScriptedPlatform {
    fn check_remote(&self) -> AppResult<()> {
        if self.fail_remote {
            return Err(AppError::external_service("Remote platform unreachable"));
        }
        Ok(())
    }
}

#[async_trait]
impl VideoPlatform for ScriptedPlatform {
    async fn list_folders(
        &self,
        _auth: &PlatformAuth,
        request: &ListFoldersRequest,
    ) -> AppResult<Vec<Folder>> {
        self.check_remote()?;
        self.folder_calls.fetch_add(1, Ordering::SeqCst);
        let mut out = self.folders.clone();
        if let Some(parent) = request.parent_folder_id {
            out.retain(|f| f.parent_id == Some(parent));
        }
        if let Some(query) = &request.query {
            out.retain(|f| f.name.contains(query.as_str()));
        }
        Ok(out)
    }

    async fn list_sessions(
        &self,
        _auth: &PlatformAuth,
        request: &ListSessionsRequest,
    ) -> AppResult<Vec<Session>> {
        self.check_remote()?;
        self.session_calls.fetch_add(1, Ordering::SeqCst);
        let mut out = self.sessions.clone();
        if let Some(folder) = request.folder_id {
            out.retain(|s| s.folder_id == Some(folder));
        }
        if let Some(query) = &request.query {
            out.retain(|s| s.name.contains(query.as_str()));
        }
        Ok(out)
    }

    async fn get_folders_by_id(
        &self,
        _auth: &PlatformAuth,
        ids: &[Uuid],
    ) -> AppResult<Vec<Folder>> {
        self.check_remote()?;
        Ok(self
            .folders
            .iter()
            .filter(|f| ids.contains(&f.id))
            .cloned()
            .collect())
    }

    async fn get_session_by_id(
        &self,
        auth: &PlatformAuth,
        id: Uuid,
    ) -> AppResult<SessionLookup> {
        self.check_remote()?;
        let is_admin = auth.password.is_some();
        let session = self.sessions.iter().find(|s| s.id == id);
        Ok(match session {
            Some(s) if is_admin || !self.admin_only.contains(&id) => {
                SessionLookup::Found(s.clone())
            }
            _ => SessionLookup::NotFound,
        })
    }

    async fn get_authenticated_url(
        &self,
        _auth: &PlatformAuth,
        viewer_url: &str,
    ) -> AppResult<String> {
        Ok(format!("{viewer_url}&auth=signed"))
    }

    async fn sync_external_user(
        &self,
        _auth: &PlatformAuth,
        external_user_key: &str,
    ) -> AppResult<()> {
        self.synced_users
            .lock()
            .unwrap()
            .push(external_user_key.to_string());
        Ok(())
    }
}

/// A response captured from the router.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The scripted remote behind the router
    pub platform: Arc<ScriptedPlatform>,
    /// Cache shared with the listing service
    pub cache: Arc<CacheManager>,
}

impl TestApp {
    /// Router over an empty scripted platform and default test config.
    pub fn new() -> Self {
        Self::with_platform(ScriptedPlatform::default())
    }

    /// Router over a prepared scripted platform.
    pub fn with_platform(platform: ScriptedPlatform) -> Self {
        let config = Arc::new(test_config());
        let platform = Arc::new(platform);
        let cache = Arc::new(CacheManager::new(&config.cache));
        let state = AppState::new(config, cache.clone(), platform.clone());
        Self {
            router: vodbridge_api::build_router(state),
            platform,
            cache,
        }
    }

    /// Issue a GET with the given acting user and capture the response.
    pub async fn get(&self, uri: &str, acting_user: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(user) = acting_user {
            builder = builder.header("X-Acting-User", user);
        }
        let request = builder.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router error");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Configuration pointing at a fictional but fully configured platform.
pub fn test_config() -> AppConfig {
    AppConfig {
        platform: PlatformConfig {
            server_hostname: "demo.hosted.example.com".to_string(),
            admin_userkey: "admin".to_string(),
            admin_password: "secret".to_string(),
            instance_name: "lms".to_string(),
            application_key: "KEY".to_string(),
            ..PlatformConfig::default()
        },
        ..AppConfig::default()
    }
}

pub fn folder(name: &str, parent_id: Option<Uuid>) -> Folder {
    Folder {
        id: Uuid::new_v4(),
        name: name.to_string(),
        parent_id,
    }
}

pub fn session(name: &str, folder_id: Option<Uuid>, state: SessionState) -> Session {
    Session {
        id: Uuid::new_v4(),
        name: name.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap(),
        duration_seconds: 125.0,
        viewer_url: "https://demo.hosted.example.com/Viewer.aspx?id=x".to_string(),
        thumb_url: "/Thumb/x.jpg".to_string(),
        folder_id,
        state,
    }
}
