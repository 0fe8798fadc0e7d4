//! Product endpoints over the memory store.

use http::StatusCode;
use serde_json::json;

use catalog_database::memory::{FailPoint, MemoryProductStore};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_returns_flat_product() {
    let app = TestApp::memory(false);

    let body = app
        .create_product("Women's Cropped Puffer", &["a.jpg", "b.jpg"])
        .await;

    assert_eq!(body["slug"], "womens_cropped_puffer");
    assert_eq!(body["images"], json!(["a.jpg", "b.jpg"]));
    assert_eq!(body["stock"], 0);
    assert_eq!(body["tags"], json!([]));
}

#[tokio::test]
async fn test_create_validation_error() {
    let app = TestApp::memory(false);

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "title": "Tee", "price": -5, "sizes": [], "gender": "men" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app
        .request("POST", "/api/products", Some(json!({ "title": "Tee" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_is_bad_request() {
    let app = TestApp::memory(false);
    app.create_product("Slim Tee", &[]).await;

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "title": "Slim Tee", "sizes": ["M"], "gender": "men" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "DUPLICATE_KEY");
    assert!(response.body["message"].as_str().unwrap().contains("Slim Tee"));
}

#[tokio::test]
async fn test_list_with_limit_and_offset() {
    let app = TestApp::memory(false);
    app.create_product("One", &["one.jpg"]).await;
    app.create_product("Two", &["two-front.jpg", "two-back.jpg"]).await;
    app.create_product("Three", &[]).await;

    let response = app.request("GET", "/api/products?limit=1&offset=1", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Two");
    assert_eq!(items[0]["images"], json!(["two-front.jpg", "two-back.jpg"]));

    let response = app.request("GET", "/api/products", None).await;
    assert_eq!(response.body.as_array().unwrap().len(), 3);

    let response = app.request("GET", "/api/products?limit=-1", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_store_failure_hides_detail() {
    let store = MemoryProductStore::new();
    let app = TestApp::memory_with(store.clone(), false);
    store.fail_next(FailPoint::FindPage).await;

    let response = app.request("GET", "/api/products", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
    assert_eq!(response.body["message"], "Unexpected error, check server logs");
    assert!(!response.body.to_string().contains("Injected failure"));

    let response = app.request("GET", "/api/products", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_by_id_title_and_slug() {
    let app = TestApp::memory(false);
    let created = app.create_product("Desert Boot", &["boot.jpg"]).await;
    let id = created["id"].as_str().unwrap();

    for term in [id, "DESERT%20boot", "desert_boot"] {
        let response = app.request("GET", &format!("/api/products/{term}"), None).await;
        assert_eq!(response.status, StatusCode::OK, "{term}");
        assert_eq!(response.body["id"], created["id"]);
        assert_eq!(response.body["images"], json!(["boot.jpg"]));
    }
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let app = TestApp::memory(false);

    let response = app.request("GET", "/api/products/no-such-thing", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Product with no-such-thing not found");
}

#[tokio::test]
async fn test_patch_replaces_images() {
    let app = TestApp::memory(false);
    let created = app.create_product("Desert Boot", &["1.jpg", "2.jpg"]).await;
    let path = format!("/api/products/{}", created["id"].as_str().unwrap());

    let response = app
        .request("PATCH", &path, Some(json!({ "stock": 4, "images": ["3.jpg"] })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["stock"], 4);
    assert_eq!(response.body["title"], "Desert Boot");
    assert_eq!(response.body["images"], json!(["3.jpg"]));

    let response = app.request("PATCH", &path, Some(json!({ "price": 99.0 }))).await;
    assert_eq!(response.body["images"], json!(["3.jpg"]));

    let response = app.request("PATCH", &path, Some(json!({ "images": [] }))).await;
    assert_eq!(response.body["images"], json!([]));
}

#[tokio::test]
async fn test_patch_requires_uuid() {
    let app = TestApp::memory(false);

    let response = app
        .request("PATCH", "/api/products/desert_boot", Some(json!({ "stock": 1 })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PATCH",
            "/api/products/00000000-0000-4000-8000-000000000000",
            Some(json!({ "stock": 1 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product() {
    let app = TestApp::memory(false);
    let created = app.create_product("Desert Boot", &["1.jpg"]).await;
    let path = format!("/api/products/{}", created["id"].as_str().unwrap());

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", "/api/products/not-a-uuid", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_all_gate() {
    let locked = TestApp::memory(false);
    locked.create_product("Desert Boot", &[]).await;
    let response = locked.request("DELETE", "/api/products", None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");

    let open = TestApp::memory(true);
    open.create_product("Desert Boot", &[]).await;
    let response = open.request("DELETE", "/api/products", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let response = open.request("GET", "/api/products", None).await;
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::memory(false);

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "memory");
}

#[tokio::test]
async fn test_create_rejects_apostrophe_only_title() {
    let app = TestApp::memory(false);

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({ "title": "'", "sizes": ["M"], "gender": "unisex" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
