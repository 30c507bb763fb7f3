//! SOAP 1.1 request envelope construction.
//!
//! The remote service is WCF; element order inside data contracts is
//! significant (alphabetical), which is why the fragments below are built
//! by hand rather than derived.

use quick_xml::escape::escape;
use uuid::Uuid;

use vodbridge_core::types::SortDirection;

use crate::auth::PlatformAuth;
use crate::platform::{ListFoldersRequest, ListSessionsRequest};

/// Service namespace shared by all operations.
pub const NAMESPACE: &str = "http://tempuri.org/";

/// Session management endpoint path.
pub const SESSION_MANAGEMENT_PATH: &str = "/Panopto/PublicAPI/4.6/SessionManagement.svc";
/// Auth endpoint path.
pub const AUTH_PATH: &str = "/Panopto/PublicAPI/4.2/Auth.svc";
/// User management endpoint path.
pub const USER_MANAGEMENT_PATH: &str = "/Panopto/PublicAPI/4.0/UserManagement.svc";

/// Wrap an operation fragment in the SOAP envelope.
pub fn wrap(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <s:Body>{body}</s:Body></s:Envelope>"
    )
}

/// The `SOAPAction` header value for an operation on a service contract.
pub fn action(contract: &str, operation: &str) -> String {
    format!("{NAMESPACE}{contract}/{operation}")
}

fn element(name: &str, value: &str) -> String {
    format!("<{name}>{}</{name}>", escape(value))
}

fn auth_fragment(auth: &PlatformAuth) -> String {
    let mut out = String::from("<auth>");
    if let Some(code) = &auth.auth_code {
        out.push_str(&element("AuthCode", code));
    }
    if let Some(password) = &auth.password {
        out.push_str(&element("Password", password));
    }
    out.push_str(&element("UserKey", &auth.user_key));
    out.push_str("</auth>");
    out
}

fn pagination_fragment(page: u32, max_results: u32) -> String {
    format!(
        "<Pagination><MaxNumberResults>{max_results}</MaxNumberResults>\
         <PageNumber>{page}</PageNumber></Pagination>"
    )
}

/// `GetFoldersList` operation fragment.
pub fn get_folders_list(auth: &PlatformAuth, request: &ListFoldersRequest) -> String {
    let mut inner = pagination_fragment(request.pagination.page, request.pagination.max_results);
    if let Some(parent) = request.parent_folder_id {
        inner.push_str(&element("ParentFolderId", &parent.to_string()));
    }
    inner.push_str(&element("SortBy", &request.sort.field));
    inner.push_str(&element(
        "SortIncreasing",
        if request.sort.direction == SortDirection::Asc {
            "true"
        } else {
            "false"
        },
    ));

    let query = request.query.as_deref().unwrap_or("");
    format!(
        "<GetFoldersList xmlns=\"{NAMESPACE}\">{}<request>{inner}</request>{}</GetFoldersList>",
        auth_fragment(auth),
        element("searchQuery", query),
    )
}

/// `GetSessionsList` operation fragment.
pub fn get_sessions_list(auth: &PlatformAuth, request: &ListSessionsRequest) -> String {
    let mut inner = pagination_fragment(request.pagination.page, request.pagination.max_results);
    if let Some(folder) = request.folder_id {
        inner.push_str(&element("FolderId", &folder.to_string()));
    }
    inner.push_str(&element("SortBy", &request.sort.field));
    inner.push_str(&element(
        "SortIncreasing",
        if request.sort.direction == SortDirection::Asc {
            "true"
        } else {
            "false"
        },
    ));
    if !request.states.is_empty() {
        inner.push_str("<States>");
        for state in &request.states {
            inner.push_str(&element("SessionState", state.as_remote()));
        }
        inner.push_str("</States>");
    }

    let query = request.query.as_deref().unwrap_or("");
    format!(
        "<GetSessionsList xmlns=\"{NAMESPACE}\">{}<request>{inner}</request>{}</GetSessionsList>",
        auth_fragment(auth),
        element("searchQuery", query),
    )
}

/// `GetFoldersById` operation fragment.
pub fn get_folders_by_id(auth: &PlatformAuth, ids: &[Uuid]) -> String {
    let mut guids = String::from("<folderIds>");
    for id in ids {
        guids.push_str(&element("guid", &id.to_string()));
    }
    guids.push_str("</folderIds>");
    format!(
        "<GetFoldersById xmlns=\"{NAMESPACE}\">{}{guids}</GetFoldersById>",
        auth_fragment(auth),
    )
}

/// `GetSessionsById` operation fragment.
pub fn get_sessions_by_id(auth: &PlatformAuth, id: Uuid) -> String {
    format!(
        "<GetSessionsById xmlns=\"{NAMESPACE}\">{}<sessionIds>{}</sessionIds></GetSessionsById>",
        auth_fragment(auth),
        element("guid", &id.to_string()),
    )
}

/// `GetAuthenticatedUrl` operation fragment.
pub fn get_authenticated_url(auth: &PlatformAuth, viewer_url: &str) -> String {
    format!(
        "<GetAuthenticatedUrl xmlns=\"{NAMESPACE}\">{}{}</GetAuthenticatedUrl>",
        auth_fragment(auth),
        element("viewerUrl", viewer_url),
    )
}

/// `SyncExternalUser` operation fragment.
pub fn sync_external_user(auth: &PlatformAuth, external_user_key: &str) -> String {
    format!(
        "<SyncExternalUser xmlns=\"{NAMESPACE}\">{}{}</SyncExternalUser>",
        auth_fragment(auth),
        element("externalUserKey", external_user_key),
    )
}
