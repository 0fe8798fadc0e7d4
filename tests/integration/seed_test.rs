//! Seed endpoint.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_seed_populates_catalog() {
    let app = TestApp::memory(true);

    let response = app.request("POST", "/api/seed", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let inserted = response.body["inserted"].as_u64().unwrap();
    assert!(inserted > 0);

    let response = app.request("GET", "/api/products?limit=100", None).await;
    assert_eq!(response.body.as_array().unwrap().len() as u64, inserted);
}

#[tokio::test]
async fn test_seed_forbidden_without_bulk_delete() {
    let app = TestApp::memory(false);

    let response = app.request("POST", "/api/seed", None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
