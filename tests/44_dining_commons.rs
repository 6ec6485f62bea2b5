mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{not_found_body, query, TestApp};

#[tokio::test]
async fn dining_commons_keyed_by_code() -> Result<()> {
    let app = TestApp::new();
    let admin = app.admin_token();
    let user = app.user_token();

    let params = query(&[
        ("code", "carrillo"),
        ("name", "Carrillo"),
        ("hasSackMeal", "false"),
        ("hasTakeOutMeal", "false"),
        ("hasDiningCam", "true"),
        ("latitude", "34.409953"),
        ("longitude", "-119.85277"),
    ]);
    let created = app
        .post(&format!("/api/ucsbdiningcommons/post?{}", params), Some(&admin))
        .await?;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(
        created.body,
        json!({
            "code": "carrillo",
            "name": "Carrillo",
            "hasSackMeal": false,
            "hasTakeOutMeal": false,
            "hasDiningCam": true,
            "latitude": 34.409953,
            "longitude": -119.85277
        })
    );

    let updated = app
        .put(
            "/api/ucsbdiningcommons?id=carrillo",
            Some(&admin),
            json!({
                "code": "ortega",
                "name": "Carrillo Dining",
                "hasSackMeal": true,
                "hasTakeOutMeal": true,
                "hasDiningCam": true,
                "latitude": 34.409953,
                "longitude": -119.85277
            }),
        )
        .await?;
    assert_eq!(updated.body["code"], "carrillo");
    assert_eq!(updated.body["hasSackMeal"], true);

    let ortega = app.get("/api/ucsbdiningcommons?id=ortega", Some(&user)).await?;
    assert_eq!(ortega.status, StatusCode::NOT_FOUND);
    assert_eq!(ortega.body, not_found_body("UCSBDiningCommons", "ortega"));

    let deleted = app.delete("/api/ucsbdiningcommons?id=carrillo", Some(&admin)).await?;
    assert_eq!(
        deleted.body,
        json!({"message": "UCSBDiningCommons with id carrillo deleted"})
    );
    Ok(())
}
