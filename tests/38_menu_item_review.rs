mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{not_found_body, query, TestApp};

#[tokio::test]
async fn review_lifecycle() -> Result<()> {
    let app = TestApp::new();
    let admin = app.admin_token();
    let user = app.user_token();

    let params = query(&[
        ("itemId", "27"),
        ("reviewerEmail", "cgaucho@ucsb.edu"),
        ("stars", "3"),
        ("dateReviewed", "2022-04-20T12:00:00"),
        ("comments", "bland af"),
    ]);
    let created = app
        .post(&format!("/api/menuitemreview/post?{}", params), Some(&admin))
        .await?;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(
        created.body,
        json!({
            "id": 1,
            "itemId": 27,
            "reviewerEmail": "cgaucho@ucsb.edu",
            "stars": 3,
            "dateReviewed": "2022-04-20T12:00:00",
            "comments": "bland af"
        })
    );

    let updated = app
        .put(
            "/api/menuitemreview?id=1",
            Some(&admin),
            json!({
                "itemId": 29,
                "reviewerEmail": "ldelplaya@ucsb.edu",
                "stars": 5,
                "dateReviewed": "2022-04-21T12:00:00",
                "comments": "best apple pie ever"
            }),
        )
        .await?;
    assert_eq!(updated.body["id"], 1);
    assert_eq!(updated.body["stars"], 5);
    assert_eq!(updated.body["itemId"], 29);

    let listed = app.get("/api/menuitemreview/all", Some(&user)).await?;
    assert_eq!(listed.body, json!([updated.body]));

    let deleted = app.delete("/api/menuitemreview?id=1", Some(&admin)).await?;
    assert_eq!(deleted.body, json!({"message": "MenuItemReview with id 1 deleted"}));

    let gone = app.get("/api/menuitemreview?id=1", Some(&user)).await?;
    assert_eq!(gone.body, not_found_body("MenuItemReview", 1));
    Ok(())
}

#[tokio::test]
async fn non_numeric_stars_are_rejected() -> Result<()> {
    let app = TestApp::new();

    let params = query(&[
        ("itemId", "27"),
        ("reviewerEmail", "cgaucho@ucsb.edu"),
        ("stars", "three"),
        ("dateReviewed", "2022-04-20T12:00:00"),
        ("comments", "bland af"),
    ]);
    let res = app
        .post(&format!("/api/menuitemreview/post?{}", params), Some(&app.admin_token()))
        .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    Ok(())
}
