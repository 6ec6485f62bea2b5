mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{TestApp, ADMIN_EMAIL, USER_EMAIL};

#[tokio::test]
async fn health_endpoint_reports_storage() -> Result<()> {
    let app = TestApp::new();

    let res = app.get("/health", None).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert_eq!(res.body["storage"], "memory");
    Ok(())
}

#[tokio::test]
async fn root_lists_every_resource() -> Result<()> {
    let app = TestApp::new();

    let res = app.get("/", None).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Campus API");

    let resources = res.body["endpoints"]["resources"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    assert_eq!(resources.len(), 8);
    assert!(resources.contains(&json!("/api/helprequests")));
    Ok(())
}

#[tokio::test]
async fn current_user_requires_a_token() -> Result<()> {
    let app = TestApp::new();

    let res = app.get("/api/currentUser", None).await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.body["type"], "AccessDeniedException");
    Ok(())
}

#[tokio::test]
async fn current_user_reports_roles() -> Result<()> {
    let app = TestApp::new();

    let res = app.get("/api/currentUser", Some(&app.admin_token())).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({"email": ADMIN_EMAIL, "roles": ["USER", "ADMIN"], "admin": true})
    );

    let res = app.get("/api/currentUser", Some(&app.user_token())).await?;
    assert_eq!(
        res.body,
        json!({"email": USER_EMAIL, "roles": ["USER"], "admin": false})
    );
    Ok(())
}
