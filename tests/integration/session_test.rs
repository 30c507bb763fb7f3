//! Integration tests for the session lookup endpoint.

use std::collections::HashSet;

use http::StatusCode;
use uuid::Uuid;
use vodbridge_entity::SessionState;

use crate::helpers::{self, ScriptedPlatform, TestApp};

#[tokio::test]
async fn test_session_visible_to_acting_user() {
    let video = helpers::session("Lecture", None, SessionState::Complete);
    let id = video.id;
    let app = TestApp::with_platform(ScriptedPlatform {
        sessions: vec![video],
        ..ScriptedPlatform::default()
    });

    let response = app
        .get(&format!("/api/sessions/{id}"), Some("alice"))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let session = &response.body["data"]["session"];
    assert_eq!(session["name"], "Lecture");
    assert_eq!(session["can_access"], true);
    assert_eq!(session["created"], "5 March 2024, 2:30 PM");
    assert_eq!(session["duration"], "0:02:05");
    assert_eq!(
        session["thumb_url"],
        "https://demo.hosted.example.com/Thumb/x.jpg"
    );
}

#[tokio::test]
async fn test_session_visible_only_to_admin() {
    let video = helpers::session("Restricted", None, SessionState::Complete);
    let id = video.id;
    let app = TestApp::with_platform(ScriptedPlatform {
        sessions: vec![video],
        admin_only: HashSet::from([id]),
        ..ScriptedPlatform::default()
    });

    let response = app
        .get(&format!("/api/sessions/{id}"), Some("alice"))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let session = &response.body["data"]["session"];
    assert_eq!(session["name"], "Restricted");
    assert_eq!(session["can_access"], false);
}

#[tokio::test]
async fn test_missing_session_yields_warning_not_error() {
    let app = TestApp::new();
    let id = Uuid::new_v4();

    let response = app
        .get(&format!("/api/sessions/{id}"), Some("alice"))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    assert!(data.get("session").is_none());
    let warnings = data["warnings"].as_array().unwrap();
    assert_eq!(warnings[0]["code"], "session_missing");
    assert_eq!(warnings[0]["item_id"], id.to_string());
}

#[tokio::test]
async fn test_viewer_url_is_signed_for_acting_user() {
    let video = helpers::session("Lecture", None, SessionState::Complete);
    let id = video.id;
    let viewer_url = video.viewer_url.clone();
    let app = TestApp::with_platform(ScriptedPlatform {
        sessions: vec![video],
        ..ScriptedPlatform::default()
    });

    let response = app
        .get(&format!("/api/sessions/{id}/viewer-url"), Some("alice"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["url"],
        format!("{viewer_url}&auth=signed")
    );
    assert!(response.body["data"]["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_viewer_url_for_missing_session_yields_warning() {
    let app = TestApp::new();
    let id = Uuid::new_v4();

    let response = app
        .get(&format!("/api/sessions/{id}/viewer-url"), Some("alice"))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    assert!(data.get("url").is_none());
    let warnings = data["warnings"].as_array().unwrap();
    assert_eq!(warnings[0]["code"], "session_missing");
    assert_eq!(warnings[0]["item_id"], id.to_string());
}

#[tokio::test]
async fn test_session_lookup_degrades_when_remote_unreachable() {
    let app = TestApp::with_platform(ScriptedPlatform {
        fail_remote: true,
        ..ScriptedPlatform::default()
    });

    let response = app
        .get(&format!("/api/sessions/{}", Uuid::new_v4()), Some("alice"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let warnings = response.body["data"]["warnings"].as_array().unwrap().clone();
    assert_eq!(warnings[0]["code"], "external_service");
}
