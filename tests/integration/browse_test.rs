//! Integration tests for the browse endpoint.

use std::sync::atomic::Ordering;

use http::StatusCode;
use uuid::Uuid;
use vodbridge_entity::SessionState;

use crate::helpers::{self, ScriptedPlatform, TestApp};

#[tokio::test]
async fn test_browse_root_returns_tree() {
    let top = helpers::folder("Course videos", None);
    let child = helpers::folder("Week 1", Some(top.id));
    let video = helpers::session("Lecture", Some(child.id), SessionState::Complete);
    let app = TestApp::with_platform(ScriptedPlatform {
        folders: vec![top.clone(), child],
        sessions: vec![video],
        ..ScriptedPlatform::default()
    });

    let response = app.get("/api/browse", Some("alice")).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    assert_eq!(data["breadcrumbs"].as_array().unwrap().len(), 1);
    assert_eq!(data["breadcrumbs"][0]["name"], "Video library");

    let children = data["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["kind"], "folder");
    assert_eq!(children[0]["folder"]["name"], "Course videos");
    // Root listing carries the full subtree.
    assert_eq!(
        children[0]["children"][0]["folder"]["name"],
        "Week 1"
    );
    assert_eq!(data["warnings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_browse_root_is_cached() {
    let app = TestApp::with_platform(ScriptedPlatform {
        folders: vec![helpers::folder("Top", None)],
        ..ScriptedPlatform::default()
    });

    app.get("/api/browse", Some("alice")).await;
    app.get("/api/browse", Some("alice")).await;

    assert_eq!(app.platform.folder_calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.platform.session_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_browse_subfolder_lists_one_level() {
    let top = helpers::folder("Top", None);
    let child = helpers::folder("Child", Some(top.id));
    let grandchild = helpers::folder("Grandchild", Some(child.id));
    let app = TestApp::with_platform(ScriptedPlatform {
        folders: vec![top.clone(), child.clone(), grandchild],
        ..ScriptedPlatform::default()
    });

    let path = format!("{}/{}", Uuid::nil(), top.id);
    let response = app.get(&format!("/api/browse?path={path}"), Some("alice")).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    let breadcrumbs = data["breadcrumbs"].as_array().unwrap();
    assert_eq!(breadcrumbs.len(), 2);
    assert_eq!(breadcrumbs[1]["name"], "Top");

    let children = data["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["folder"]["name"], "Child");
    // One level deep only.
    assert_eq!(children[0]["children"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_browse_orphan_session_appears_at_root() {
    let app = TestApp::with_platform(ScriptedPlatform {
        folders: vec![helpers::folder("Top", None)],
        sessions: vec![helpers::session(
            "Orphan",
            Some(Uuid::new_v4()),
            SessionState::Complete,
        )],
        ..ScriptedPlatform::default()
    });

    let response = app.get("/api/browse", Some("alice")).await;
    let children = response.body["data"]["children"].as_array().unwrap().clone();
    assert_eq!(children.len(), 2);
    assert_eq!(children[1]["kind"], "session");
    assert_eq!(children[1]["session"]["name"], "Orphan");
}

#[tokio::test]
async fn test_browse_invalid_path_is_rejected() {
    let app = TestApp::new();
    let response = app.get("/api/browse?path=not-a-uuid", Some("alice")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_browse_without_acting_user_is_unauthorized() {
    let app = TestApp::new();
    let response = app.get("/api/browse", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_browse_degrades_when_remote_unreachable() {
    let app = TestApp::with_platform(ScriptedPlatform {
        fail_remote: true,
        ..ScriptedPlatform::default()
    });

    let response = app.get("/api/browse", Some("alice")).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    assert_eq!(data["children"].as_array().unwrap().len(), 0);
    let warnings = data["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "external_service");
}
