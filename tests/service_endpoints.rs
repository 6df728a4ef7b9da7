//! HTTP contract tests for the two pass-through CRUD services, plus the
//! metrics surface every process shares.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use microshop::metrics::RequestMetrics;
use microshop::{collections, services};
use serde_json::{json, Value};

async fn spawn_app(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    addr
}

async fn spawn_user_service() -> String {
    let (actor, users) = collections::users::new();
    tokio::spawn(actor.run());
    let metrics = Arc::new(RequestMetrics::new("user-service"));
    let addr = spawn_app(services::users::app(users, metrics)).await;
    format!("http://{addr}")
}

async fn spawn_product_service() -> String {
    let (actor, products) = collections::products::new();
    tokio::spawn(actor.run());
    let metrics = Arc::new(RequestMetrics::new("product-service"));
    let addr = spawn_app(services::products::app(products, metrics)).await;
    format!("http://{addr}")
}

#[tokio::test]
async fn user_create_and_list_round_trip() {
    let client = reqwest::Client::new();
    let base = spawn_user_service().await;

    let body: Value = client
        .post(format!("{base}/api/users"))
        .json(&json!({ "name": "Alice", "email": "alice@example.com" }))
        .send()
        .await
        .expect("Failed to create user")
        .json()
        .await
        .expect("Invalid create user response");
    assert_eq!(body["message"], "User created");
    assert_eq!(body["user"]["id"], "user_1");
    assert_eq!(body["user"]["name"], "Alice");

    let users: Value = client
        .get(format!("{base}/api/users"))
        .send()
        .await
        .expect("Failed to list users")
        .json()
        .await
        .expect("Invalid list response");
    let users = users.as_array().expect("Expected an array of users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "alice@example.com");
}

#[tokio::test]
async fn product_creation_is_schema_loose() {
    let client = reqwest::Client::new();
    let base = spawn_product_service().await;

    // No price, no stock: stored with zero defaults, not rejected.
    let body: Value = client
        .post(format!("{base}/api/products"))
        .json(&json!({ "name": "Mystery Widget" }))
        .send()
        .await
        .expect("Failed to create product")
        .json()
        .await
        .expect("Invalid create product response");
    assert_eq!(body["message"], "Product added");
    assert_eq!(body["product"]["price"], 0.0);
    assert_eq!(body["product"]["stock"], 0);

    let products: Value = client
        .get(format!("{base}/api/products"))
        .send()
        .await
        .expect("Failed to list products")
        .json()
        .await
        .expect("Invalid list response");
    assert_eq!(products.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn liveness_routes_answer_in_plain_text() {
    let client = reqwest::Client::new();

    let users = spawn_user_service().await;
    let products = spawn_product_service().await;

    let text = client
        .get(format!("{users}/"))
        .send()
        .await
        .expect("Liveness request failed")
        .text()
        .await
        .expect("Invalid liveness body");
    assert_eq!(text, "User Service Running");

    let text = client
        .get(format!("{products}/"))
        .send()
        .await
        .expect("Liveness request failed")
        .text()
        .await
        .expect("Invalid liveness body");
    assert_eq!(text, "Product Service Running");
}

/// Extracts the value of one counter line from a metrics scrape.
fn counter_value(scrape: &str, line_prefix: &str) -> Option<u64> {
    scrape
        .lines()
        .find(|line| line.starts_with(line_prefix))
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}

#[tokio::test]
async fn request_counters_are_monotonic_across_scrapes() {
    let client = reqwest::Client::new();
    let base = spawn_user_service().await;

    for _ in 0..2 {
        client
            .get(format!("{base}/"))
            .send()
            .await
            .expect("Liveness request failed");
    }

    let prefix = "http_requests_total{method=\"GET\",route=\"/\",status_code=\"200\"}";

    let first_scrape = client
        .get(format!("{base}/metrics"))
        .send()
        .await
        .expect("Metrics request failed")
        .text()
        .await
        .expect("Invalid metrics body");
    let first = counter_value(&first_scrape, prefix).expect("Counter missing from scrape");
    assert_eq!(first, 2);

    client
        .get(format!("{base}/"))
        .send()
        .await
        .expect("Liveness request failed");

    let second_scrape = client
        .get(format!("{base}/metrics"))
        .send()
        .await
        .expect("Metrics request failed")
        .text()
        .await
        .expect("Invalid metrics body");
    let second = counter_value(&second_scrape, prefix).expect("Counter missing from scrape");

    assert!(second >= first, "counter went backwards: {first} -> {second}");
    assert_eq!(second, 3);

    // The latency histogram is present for the same label set.
    assert!(second_scrape.contains(
        "http_request_duration_seconds_bucket{method=\"GET\",route=\"/\",status_code=\"200\",le=\"+Inf\"}"
    ));
}
