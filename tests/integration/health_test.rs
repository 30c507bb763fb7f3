//! Integration test for the health endpoint.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_cache_and_platform() {
    let app = TestApp::new();

    let response = app.get("/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    assert_eq!(data["status"], "ok");
    assert_eq!(data["cache"], "connected");
    assert_eq!(data["platform_configured"], true);
}
