//! Helpers for seeding the catalog and reading error envelopes

use serde_json::{Value, json};

use super::server::TestServer;

/// Create a category through the API and return its view
pub async fn create_category(server: &TestServer, name: &str) -> Value {
    let body = json!({
        "name": name,
        "description": format!("Description for {name}"),
        "logoUrl": "https://logo.jpeg",
    });

    let resp = server
        .client()
        .post(server.url("/api/v1/categories"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    resp.json().await.unwrap()
}

/// Create a product through the API and return its view
pub async fn create_product(server: &TestServer, name: &str, category_id: i64) -> Value {
    let resp = server
        .client()
        .post(server.url("/api/v1/products"))
        .json(&product_body(name, category_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    resp.json().await.unwrap()
}

pub fn product_body(name: &str, category_id: i64) -> Value {
    json!({
        "name": name,
        "description": "Test product description",
        "price": 9.99,
        "stockQuantity": 30,
        "categoryId": category_id,
    })
}

/// Check the envelope shape and return its faults as sorted pairs
pub fn faults(envelope: &Value) -> Vec<(String, String)> {
    assert!(envelope["timestamp"].is_string(), "missing timestamp: {envelope}");
    let trace_id = envelope["traceId"].as_str().expect("traceId must be a string");
    assert!(uuid::Uuid::parse_str(trace_id).is_ok(), "traceId is not a UUID: {trace_id}");

    let faults = envelope["faults"].as_array().expect("faults must be an array");
    assert!(!faults.is_empty(), "envelope without faults");

    let mut pairs: Vec<_> = faults
        .iter()
        .map(|fault| {
            (
                fault["message"].as_str().unwrap().to_owned(),
                fault["reason"].as_str().unwrap().to_owned(),
            )
        })
        .collect();
    pairs.sort();
    pairs
}

pub fn fault(message: &str, reason: &str) -> (String, String) {
    (message.to_owned(), reason.to_owned())
}
