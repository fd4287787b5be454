//! API integration tests
//!
//! These run against a live server: start one with `cargo run`, then
//! `cargo test -- --ignored`. Tests touching Open Library need network
//! access.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_ready_reports_catalog_size() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
    assert!(body["total_books"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_manual_add_get_delete_cycle() {
    let client = Client::new();

    // Create
    let response = client
        .post(format!("{}/books/manual", BASE_URL))
        .json(&json!({
            "title": "Test Book",
            "author": "Test Author",
            "isbn": "978-0-00-000000-2"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["isbn"], "9780000000002");

    // Get
    let response = client
        .get(format!("{}/books/9780000000002", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Test Book");

    // Delete
    let response = client
        .delete(format!("{}/books/9780000000002", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["deleted_book"]["isbn"], "9780000000002");

    // Gone
    let response = client
        .get(format!("{}/books/9780000000002", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_manual_add_is_rejected() {
    let client = Client::new();

    let payload = json!({
        "title": "Twice",
        "author": "Nobody",
        "isbn": "978-0-00-000000-3"
    });

    let response = client
        .post(format!("{}/books/manual", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/books/manual", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Existing entries also short-circuit the enrichment route
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({"isbn": "9780000000003"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Cleanup
    let _ = client
        .delete(format!("{}/books/9780000000003", BASE_URL))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_invalid_isbn_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({"isbn": "123"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_unknown_isbn_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/0000000000999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_add_by_isbn_from_open_library() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({"isbn": "9780743273565"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "The Great Gatsby");
    assert!(body["author"]
        .as_str()
        .expect("No author in response")
        .contains("Fitzgerald"));

    // Cleanup
    let _ = client
        .delete(format!("{}/books/9780743273565", BASE_URL))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_get_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total_books"].is_number());
    assert!(body["total_authors"].is_number());
    assert!(body["books_by_author"].is_object());
}
