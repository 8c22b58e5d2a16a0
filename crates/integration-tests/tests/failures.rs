//! Every recognized failure reaches the client as the same envelope

mod harness;

use harness::catalog::{fault, faults};
use harness::server::TestServer;
use serde_json::{Value, json};

async fn get_failure(server: &TestServer, path: &str) -> (u16, Value) {
    let resp = server.client().get(server.url(path)).send().await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let server = TestServer::default_config().await.unwrap();

    let (status, envelope) = get_failure(&server, "/api/v1/categories/1414141").await;

    assert_eq!(status, 404);
    assert_eq!(faults(&envelope), vec![fault("Entity not found", "Wrong id")]);
}

#[tokio::test]
async fn non_numeric_id_is_a_type_mismatch() {
    let server = TestServer::default_config().await.unwrap();

    for path in ["/api/v1/categories/AA", "/api/v1/products/AA"] {
        let (status, envelope) = get_failure(&server, path).await;

        assert_eq!(status, 400);
        let faults = faults(&envelope);
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].0, "Invalid parameter: id");
        assert!(faults[0].1.contains("'AA'"));
    }
}

#[tokio::test]
async fn non_numeric_page_size_is_a_type_mismatch() {
    let server = TestServer::default_config().await.unwrap();

    let (status, envelope) = get_failure(&server, "/api/v1/products?pageSize=ten").await;

    assert_eq!(status, 400);
    assert_eq!(faults(&envelope)[0].0, "Invalid parameter: pageSize");
}

#[tokio::test]
async fn negative_paging_reports_both_parameters() {
    let server = TestServer::default_config().await.unwrap();

    let (status, envelope) = get_failure(&server, "/api/v1/categories?pageSize=-2&pageNumber=-9").await;

    assert_eq!(status, 400);
    assert_eq!(
        faults(&envelope),
        vec![
            fault("Invalid parameter: pageNumber", "Must be greater than or equal to 0"),
            fault("Invalid parameter: pageSize", "Must be greater than 0"),
        ]
    );
}

#[tokio::test]
async fn blank_search_name_breaks_both_rules() {
    let server = TestServer::default_config().await.unwrap();

    let (status, envelope) = get_failure(&server, "/api/v1/products/search?name=").await;

    assert_eq!(status, 400);
    assert_eq!(
        faults(&envelope),
        vec![
            fault("Invalid parameter: name", "Must be between 3 and 85 characters"),
            fault("Invalid parameter: name", "Must be present"),
        ]
    );
}

#[tokio::test]
async fn missing_search_name() {
    let server = TestServer::default_config().await.unwrap();

    let (status, envelope) = get_failure(&server, "/api/v1/products/search").await;

    assert_eq!(status, 400);
    let faults = faults(&envelope);
    assert_eq!(faults[0].0, "Invalid parameter: name");
    assert!(faults[0].1.contains("is not present"));
}

#[tokio::test]
async fn missing_category_name() {
    let server = TestServer::default_config().await.unwrap();

    let (status, envelope) = get_failure(&server, "/api/v1/products/category").await;

    assert_eq!(status, 400);
    assert_eq!(
        faults(&envelope),
        vec![fault(
            "Invalid parameter: categoryName",
            "Required request parameter 'categoryName' for method parameter type String is not present",
        )]
    );
}

#[tokio::test]
async fn invalid_body_reports_one_fault_per_field() {
    let server = TestServer::default_config().await.unwrap();

    let body = json!({ "name": "AB", "description": "Some product", "price": -1, "stockQuantity": 0 });
    let resp = server
        .client()
        .post(server.url("/api/v1/products"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(
        faults(&envelope),
        vec![
            fault("Invalid parameter: categoryId", "Must not be null"),
            fault("Invalid parameter: name", "Must be between 3 and 85 characters"),
            fault("Invalid parameter: price", "Must be positive"),
            fault("Invalid parameter: stockQuantity", "Must be positive"),
        ]
    );
}

#[tokio::test]
async fn body_faults_are_ordered_by_field() {
    let server = TestServer::default_config().await.unwrap();

    let resp = server
        .client()
        .post(server.url("/api/v1/categories"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let envelope: Value = resp.json().await.unwrap();
    let messages: Vec<_> = envelope["faults"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Invalid parameter: description",
            "Invalid parameter: logoUrl",
            "Invalid parameter: name",
        ]
    );
}

#[tokio::test]
async fn repeated_failures_get_distinct_trace_ids() {
    let server = TestServer::default_config().await.unwrap();

    let (_, first) = get_failure(&server, "/api/v1/categories/5").await;
    let (_, second) = get_failure(&server, "/api/v1/categories/5").await;

    assert_eq!(faults(&first), faults(&second));
    assert_ne!(first["traceId"], second["traceId"]);
}

#[tokio::test]
async fn malformed_json_is_not_an_envelope() {
    let server = TestServer::default_config().await.unwrap();

    let resp = server
        .client()
        .post(server.url("/api/v1/categories"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let text = resp.text().await.unwrap();
    assert!(serde_json::from_str::<Value>(&text).is_err());
}
