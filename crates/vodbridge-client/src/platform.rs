//! The typed remote-API surface.

use async_trait::async_trait;
use uuid::Uuid;

use vodbridge_core::AppResult;
use vodbridge_core::types::{PageRequest, SortField};
use vodbridge_entity::{Folder, Session, SessionState};

use crate::auth::PlatformAuth;

/// Parameters for a folder listing call.
#[derive(Debug, Clone)]
pub struct ListFoldersRequest {
    /// Pagination window.
    pub pagination: PageRequest,
    /// Sort specification.
    pub sort: SortField,
    /// Restrict results to direct children of this folder.
    pub parent_folder_id: Option<Uuid>,
    /// Server-side wildcard name search.
    pub query: Option<String>,
}

impl ListFoldersRequest {
    /// One full unscoped snapshot, name-ordered.
    pub fn snapshot() -> Self {
        Self {
            pagination: PageRequest::snapshot(),
            sort: SortField::by_name(),
            parent_folder_id: None,
            query: None,
        }
    }

    /// Direct children of one folder.
    pub fn scoped(parent_folder_id: Uuid) -> Self {
        Self {
            parent_folder_id: Some(parent_folder_id),
            ..Self::snapshot()
        }
    }

    /// Name search across the whole hierarchy.
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::snapshot()
        }
    }
}

/// Parameters for a session listing call.
#[derive(Debug, Clone)]
pub struct ListSessionsRequest {
    /// Pagination window.
    pub pagination: PageRequest,
    /// Sort specification.
    pub sort: SortField,
    /// Restrict results to sessions in this folder.
    pub folder_id: Option<Uuid>,
    /// Server-side wildcard name search.
    pub query: Option<String>,
    /// Restrict results to these processing states.
    pub states: Vec<SessionState>,
}

impl ListSessionsRequest {
    /// One full unscoped snapshot of playable sessions, name-ordered.
    pub fn snapshot() -> Self {
        Self {
            pagination: PageRequest::snapshot(),
            sort: SortField::by_name(),
            folder_id: None,
            query: None,
            states: vec![SessionState::Complete],
        }
    }

    /// Playable sessions in one folder.
    pub fn scoped(folder_id: Uuid) -> Self {
        Self {
            folder_id: Some(folder_id),
            ..Self::snapshot()
        }
    }

    /// Name search across playable sessions.
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::snapshot()
        }
    }
}

/// Outcome of a single-session lookup.
///
/// The remote API does not distinguish "not found" from "forbidden" for
/// this caller; both arrive as an empty result. Transport and SOAP faults
/// are `ErrorKind::ExternalService` errors instead, so callers can
/// discriminate without matching message text.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLookup {
    /// The session resolved for this credential.
    Found(Session),
    /// Nothing resolved: missing, removed, or not visible to this caller.
    NotFound,
}

/// The remote video platform, reduced to the operations this application
/// actually uses. Implemented by the SOAP client and by scripted fakes in
/// tests.
#[async_trait]
pub trait VideoPlatform: Send + Sync + std::fmt::Debug + 'static {
    /// List folders, optionally scoped to a parent or a name query.
    async fn list_folders(
        &self,
        auth: &PlatformAuth,
        request: &ListFoldersRequest,
    ) -> AppResult<Vec<Folder>>;

    /// List sessions, optionally scoped to a folder, a name query, and a
    /// state filter.
    async fn list_sessions(
        &self,
        auth: &PlatformAuth,
        request: &ListSessionsRequest,
    ) -> AppResult<Vec<Session>>;

    /// Fetch folders by id (breadcrumb name resolution).
    async fn get_folders_by_id(
        &self,
        auth: &PlatformAuth,
        ids: &[Uuid],
    ) -> AppResult<Vec<Folder>>;

    /// Fetch one session by id.
    async fn get_session_by_id(
        &self,
        auth: &PlatformAuth,
        id: Uuid,
    ) -> AppResult<SessionLookup>;

    /// Mint a short-lived viewer URL that bypasses the platform's own
    /// login (valid for a few seconds after the call).
    async fn get_authenticated_url(
        &self,
        auth: &PlatformAuth,
        viewer_url: &str,
    ) -> AppResult<String>;

    /// Ensure an identity-provider user exists on the remote side.
    async fn sync_external_user(
        &self,
        auth: &PlatformAuth,
        external_user_key: &str,
    ) -> AppResult<()>;
}
