//! Integration tests for the search endpoint.

use http::StatusCode;
use vodbridge_entity::SessionState;

use crate::helpers::{self, ScriptedPlatform, TestApp};

#[tokio::test]
async fn test_search_returns_folders_then_sessions() {
    let matching = helpers::folder("Physics videos", None);
    let done = helpers::session("Physics lecture", None, SessionState::Complete);
    let app = TestApp::with_platform(ScriptedPlatform {
        folders: vec![matching, helpers::folder("Chemistry", None)],
        sessions: vec![done],
        ..ScriptedPlatform::default()
    });

    let response = app.get("/api/search?q=Physics", Some("alice")).await;
    assert_eq!(response.status, StatusCode::OK);

    let children = response.body["data"]["children"].as_array().unwrap().clone();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["kind"], "folder");
    assert_eq!(children[0]["folder"]["name"], "Physics videos");
    assert_eq!(children[1]["kind"], "session");
    assert_eq!(children[1]["session"]["name"], "Physics lecture");
}

#[tokio::test]
async fn test_search_drops_unprocessed_sessions() {
    // The scripted remote ignores the state filter entirely, so anything
    // unprocessed in the result must be removed by the service.
    let app = TestApp::with_platform(ScriptedPlatform {
        sessions: vec![
            helpers::session("Draft recording", None, SessionState::Processing),
            helpers::session("Draft final", None, SessionState::Complete),
        ],
        ..ScriptedPlatform::default()
    });

    let response = app.get("/api/search?q=Draft", Some("alice")).await;
    let children = response.body["data"]["children"].as_array().unwrap().clone();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["session"]["name"], "Draft final");
}

#[tokio::test]
async fn test_search_requires_query() {
    let app = TestApp::new();
    let response = app.get("/api/search", Some("alice")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_degrades_when_remote_unreachable() {
    let app = TestApp::with_platform(ScriptedPlatform {
        fail_remote: true,
        ..ScriptedPlatform::default()
    });

    let response = app.get("/api/search?q=x", Some("alice")).await;
    assert_eq!(response.status, StatusCode::OK);
    let warnings = response.body["data"]["warnings"].as_array().unwrap().clone();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["item"], "search");
}
