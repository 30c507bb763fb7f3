//! Integration tests for the SSO callback.

use http::StatusCode;

use crate::helpers::{ScriptedPlatform, TestApp};

// SHA1("serverName=host.example&expiration=1700000000|KEY")
const VALID_CODE: &str = "495DD99F5EAEB88BDB5B1160801B71BBF4CD57D9";

fn callback_uri(auth_code: &str) -> String {
    format!(
        "/sso/callback?serverName=host.example&authCode={auth_code}\
         &callbackUrl=https%3A%2F%2Fhost.example%2FLogin.aspx&expiration=1700000000"
    )
}

#[tokio::test]
async fn test_valid_callback_redirects_with_signed_response() {
    let app = TestApp::new();

    let response = app.get(&callback_uri(VALID_CODE), Some("alice")).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);

    let location = response.headers["location"].to_str().unwrap();
    assert!(location.starts_with("https://host.example/Login.aspx?serverName=host.example"));
    assert!(location.contains("externalUserKey=lms%5Calice"));
    // SHA1("serverName=host.example&externalUserKey=lms\alice&expiration=1700000000|KEY")
    assert!(location.ends_with("authCode=82FE2D6CC5AD4546F946E7589C977A89D0B9A527"));

    assert_eq!(
        app.platform.synced_users.lock().unwrap().as_slice(),
        ["lms\\alice"]
    );
}

#[tokio::test]
async fn test_invalid_code_is_rejected_without_sync() {
    let app = TestApp::new();

    let response = app
        .get(
            &callback_uri("0000000000000000000000000000000000000000"),
            Some("alice"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(app.platform.synced_users.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_parameter_is_rejected() {
    let app = TestApp::new();

    let response = app
        .get(
            "/sso/callback?serverName=host.example&expiration=1700000000",
            Some("alice"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_callback_requires_acting_user() {
    let app = TestApp::with_platform(ScriptedPlatform::default());
    let response = app.get(&callback_uri(VALID_CODE), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
