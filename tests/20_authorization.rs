mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use campus_api::resources::RESOURCE_PATHS;
use common::{query, TestApp};

#[tokio::test]
async fn anonymous_callers_are_denied_everywhere() -> Result<()> {
    let app = TestApp::new();

    for path in RESOURCE_PATHS {
        let res = app.get(&format!("/api/{}/all", path), None).await?;
        assert_eq!(res.status, StatusCode::FORBIDDEN, "list {}", path);
        assert_eq!(res.body["type"], "AccessDeniedException");

        let res = app.get(&format!("/api/{}?id=1", path), None).await?;
        assert_eq!(res.status, StatusCode::FORBIDDEN, "get {}", path);
    }
    Ok(())
}

#[tokio::test]
async fn invalid_tokens_are_treated_as_anonymous() -> Result<()> {
    let app = TestApp::new();

    let res = app.get("/api/helprequests/all", Some("not-a-jwt")).await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn users_can_read() -> Result<()> {
    let app = TestApp::new();
    let user = app.user_token();

    for path in RESOURCE_PATHS {
        let res = app.get(&format!("/api/{}/all", path), Some(&user)).await?;
        assert_eq!(res.status, StatusCode::OK, "list {}", path);
        assert_eq!(res.body, json!([]));
    }
    Ok(())
}

#[tokio::test]
async fn users_cannot_create() -> Result<()> {
    let app = TestApp::new();
    let params = query(&[
        ("requesterEmail", "a@b.com"),
        ("teamId", "7"),
        ("tableOrBreakoutRoom", "table1"),
        ("requestTime", "2024-01-01T10:00:00"),
        ("explanation", "need help"),
        ("solved", "false"),
    ]);

    let res = app
        .post(&format!("/api/helprequests/post?{}", params), Some(&app.user_token()))
        .await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .get("/api/helprequests/all", Some(&app.admin_token()))
        .await?;
    assert_eq!(res.body, json!([]));
    Ok(())
}

#[tokio::test]
async fn role_check_precedes_existence_check() -> Result<()> {
    let app = TestApp::new();
    let user = app.user_token();

    let res = app.delete("/api/articles?id=404", Some(&user)).await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .put("/api/ucsborganization?id=missing", Some(&user), json!({}))
        .await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    // Parameters are not even looked at before the role check
    let res = app.post("/api/menuitemreview/post", None).await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn admins_get_bad_request_for_missing_parameters() -> Result<()> {
    let app = TestApp::new();

    let res = app
        .post("/api/menuitemreview/post?itemId=1", Some(&app.admin_token()))
        .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["type"], "IllegalArgumentException");

    let res = app.get("/api/helprequests?id=abc", Some(&app.user_token())).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    Ok(())
}
