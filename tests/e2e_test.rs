//! End-to-end tests over the real HTTP surface: each test boots the service
//! on an OS-assigned free port with its own in-memory state and drives it
//! with reqwest.

use std::time::Duration;

use purchase_cart_service::{build_server, default_services};
use reqwest::Client;
use serde_json::{json, Value};

fn free_port() -> u16 {
    // Bind to port 0 to let the OS assign a free port, then release it.
    // There is a small TOCTOU window, but it is acceptable for test usage.
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind failed")
        .local_addr()
        .expect("addr failed")
        .port()
}

/// Start the service in a background task and wait for /health to answer.
/// Returns the base URL.
async fn spawn_app() -> String {
    let port = free_port();
    let (order_service, product_service) = default_services();
    let server = build_server(order_service, product_service, "127.0.0.1", port)
        .expect("Failed to bind the purchase cart service");
    tokio::spawn(server);

    let base_url = format!("http://127.0.0.1:{}", port);

    let client = Client::new();
    let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
    loop {
        if tokio::time::Instant::now() > deadline {
            panic!("service did not become ready within 10 s");
        }
        if client
            .get(format!("{}/health", base_url))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    base_url
}

fn order_body(country_code: &str, items: Value) -> Value {
    json!({ "country_code": country_code, "items": items })
}

#[tokio::test]
async fn health_returns_ok() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let resp = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .expect("GET /health failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
async fn create_order_returns_201_with_totals() {
    let base_url = spawn_app().await;
    let client = Client::new();

    // IT applies 22%: 2 x prod1 (10.00) and 1 x prod2 (20.00) give 4.40 VAT
    // and 24.40 gross per line.
    let resp = client
        .put(format!("{}/api/v1/orders", base_url))
        .json(&order_body(
            "IT",
            json!([
                { "product_id": "prod1", "quantity": 2 },
                { "product_id": "prod2", "quantity": 1 }
            ]),
        ))
        .send()
        .await
        .expect("PUT /orders failed");

    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["total_price"].as_str(), Some("48.80"));
    assert_eq!(body["total_vat"].as_str(), Some("8.80"));

    let items = body["items"].as_array().expect("items array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["line_total"].as_str(), Some("24.40"));
    assert_eq!(items[0]["unit_price"].as_str(), Some("10.00"));
    assert_eq!(items[1]["line_total"].as_str(), Some("24.40"));
    assert!(body["order_id"].as_str().is_some());
}

#[tokio::test]
async fn create_order_with_empty_items_returns_400() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let resp = client
        .put(format!("{}/api/v1/orders", base_url))
        .json(&order_body("IT", json!([])))
        .send()
        .await
        .expect("PUT /orders failed");

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn create_order_with_zero_quantity_returns_400() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let resp = client
        .put(format!("{}/api/v1/orders", base_url))
        .json(&order_body(
            "IT",
            json!([{ "product_id": "prod1", "quantity": 0 }]),
        ))
        .send()
        .await
        .expect("PUT /orders failed");

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn create_order_with_unknown_country_returns_400() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let resp = client
        .put(format!("{}/api/v1/orders", base_url))
        .json(&order_body(
            "XX",
            json!([{ "product_id": "prod1", "quantity": 1 }]),
        ))
        .send()
        .await
        .expect("PUT /orders failed");

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn create_order_with_unknown_product_returns_404() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let resp = client
        .put(format!("{}/api/v1/orders", base_url))
        .json(&order_body(
            "IT",
            json!([{ "product_id": "prod99", "quantity": 1 }]),
        ))
        .send()
        .await
        .expect("PUT /orders failed");

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn created_order_round_trips_through_get() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let created: Value = client
        .put(format!("{}/api/v1/orders", base_url))
        .json(&order_body(
            "de",
            json!([{ "product_id": "prod1", "quantity": 3 }]),
        ))
        .send()
        .await
        .expect("PUT /orders failed")
        .json()
        .await
        .expect("parse body");

    let order_id = created["order_id"].as_str().expect("order_id").to_string();

    let fetched: Value = client
        .get(format!("{}/api/v1/orders/{}", base_url, order_id))
        .send()
        .await
        .expect("GET /orders/{id} failed")
        .json()
        .await
        .expect("parse body");

    assert_eq!(fetched["order_id"], created["order_id"]);
    assert_eq!(fetched["total_price"], created["total_price"]);
    assert_eq!(fetched["total_vat"], created["total_vat"]);
    assert_eq!(
        fetched["items"].as_array().expect("items").len(),
        created["items"].as_array().expect("items").len()
    );
}

#[tokio::test]
async fn get_unknown_order_returns_404() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let resp = client
        .get(format!(
            "{}/api/v1/orders/{}",
            base_url,
            uuid::Uuid::new_v4()
        ))
        .send()
        .await
        .expect("GET /orders/{id} failed");

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn list_orders_starts_empty_and_sees_concurrent_creates() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let empty: Value = client
        .get(format!("{}/api/v1/orders", base_url))
        .send()
        .await
        .expect("GET /orders failed")
        .json()
        .await
        .expect("parse body");
    assert_eq!(empty.as_array().expect("array").len(), 0);

    // Fan out concurrent creates; every order must get a distinct id and
    // all of them must be visible afterwards.
    let creates = (0..5).map(|_| {
        let client = client.clone();
        let url = format!("{}/api/v1/orders", base_url);
        async move {
            let body: Value = client
                .put(url)
                .json(&order_body(
                    "UK",
                    json!([{ "product_id": "prod2", "quantity": 1 }]),
                ))
                .send()
                .await
                .expect("PUT /orders failed")
                .json()
                .await
                .expect("parse body");
            body["order_id"].as_str().expect("order_id").to_string()
        }
    });
    let mut ids = futures::future::join_all(creates).await;
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);

    let listed: Value = client
        .get(format!("{}/api/v1/orders", base_url))
        .send()
        .await
        .expect("GET /orders failed")
        .json()
        .await
        .expect("parse body");
    assert_eq!(listed.as_array().expect("array").len(), 5);
}

#[tokio::test]
async fn products_list_applies_vat() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let products: Value = client
        .get(format!("{}/api/v1/products?country_code=IT", base_url))
        .send()
        .await
        .expect("GET /products failed")
        .json()
        .await
        .expect("parse body");

    let products = products.as_array().expect("array");
    assert_eq!(products.len(), 5);
    let prod1 = products
        .iter()
        .find(|p| p["id"] == "prod1")
        .expect("prod1 present");
    assert_eq!(prod1["price"].as_str(), Some("10.00"));
    assert_eq!(prod1["vat_rate"].as_str(), Some("0.22"));
    assert_eq!(prod1["price_with_vat"].as_str(), Some("12.20"));
}

#[tokio::test]
async fn product_with_zero_rate_keeps_its_price() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let product: Value = client
        .get(format!(
            "{}/api/v1/products/prod1?country_code=US",
            base_url
        ))
        .send()
        .await
        .expect("GET /products/{id} failed")
        .json()
        .await
        .expect("parse body");

    assert_eq!(product["price"], product["price_with_vat"]);
}

#[tokio::test]
async fn unknown_product_returns_404() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let resp = client
        .get(format!(
            "{}/api/v1/products/prod99?country_code=IT",
            base_url
        ))
        .send()
        .await
        .expect("GET /products/{id} failed");

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn products_with_unknown_country_return_500() {
    let base_url = spawn_app().await;
    let client = Client::new();

    let resp = client
        .get(format!("{}/api/v1/products?country_code=XX", base_url))
        .send()
        .await
        .expect("GET /products failed");

    assert_eq!(resp.status(), 500);
}
