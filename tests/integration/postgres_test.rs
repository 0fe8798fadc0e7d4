//! The same flows against PostgreSQL. Run with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_pg_crud_roundtrip() {
    let app = TestApp::postgres().await;
    let created = app.create_product("Pg Desert Boot", &["1.jpg", "2.jpg"]).await;
    let path = format!("/api/products/{}", created["id"].as_str().unwrap());

    let response = app.request("GET", "/api/products/pg_desert_boot", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["images"], json!(["1.jpg", "2.jpg"]));

    let response = app
        .request("PATCH", &path, Some(json!({ "images": ["c.jpg", "a.jpg", "b.jpg"] })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["images"], json!(["c.jpg", "a.jpg", "b.jpg"]));

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_pg_duplicate_slug_on_update_rolls_back() {
    let app = TestApp::postgres().await;
    app.create_product("Pg Slim Tee", &[]).await;
    let other = app.create_product("Pg Wide Tee", &["w.jpg"]).await;
    let path = format!("/api/products/{}", other["id"].as_str().unwrap());

    let response = app
        .request(
            "PATCH",
            &path,
            Some(json!({ "slug": "pg_slim_tee", "images": ["new.jpg"] })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "DUPLICATE_KEY");

    let response = app.request("GET", &path, None).await;
    assert_eq!(response.body["slug"], "pg_wide_tee");
    assert_eq!(response.body["images"], json!(["w.jpg"]));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_pg_pagination_order() {
    let app = TestApp::postgres().await;
    app.create_product("Pg One", &["one.jpg"]).await;
    app.create_product("Pg Two", &["two-c.jpg", "two-a.jpg", "two-b.jpg"]).await;
    app.create_product("Pg Three", &["three.jpg"]).await;

    let response = app.request("GET", "/api/products?limit=1&offset=1", None).await;
    let items = response.body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Pg Two");
    assert_eq!(items[0]["images"], json!(["two-c.jpg", "two-a.jpg", "two-b.jpg"]));

    let response = app.request("GET", "/api/products", None).await;
    let items = response.body.as_array().unwrap();
    assert_eq!(items[0]["images"], json!(["one.jpg"]));
    assert_eq!(items[2]["images"], json!(["three.jpg"]));
}
