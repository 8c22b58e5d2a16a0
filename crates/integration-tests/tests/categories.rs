mod harness;

use harness::catalog::{create_category, create_product, fault, faults};
use harness::config::ConfigBuilder;
use harness::server::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn create_and_fetch_category() {
    let server = TestServer::default_config().await.unwrap();
    let created = create_category(&server, "Books").await;

    assert_eq!(created["id"], 1);
    assert_eq!(created["logoUrl"], "https://logo.jpeg");

    let resp = server
        .client()
        .get(server.url("/api/v1/categories/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_categories_is_paged() {
    let server = TestServer::default_config().await.unwrap();
    for name in ["Books", "Games", "Music", "Toys", "Tools"] {
        create_category(&server, name).await;
    }

    let resp = server
        .client()
        .get(server.url("/api/v1/categories?pageNumber=1&pageSize=2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let page: Vec<Value> = resp.json().await.unwrap();
    let names: Vec<_> = page.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Music", "Toys"]);
}

#[tokio::test]
async fn empty_paging_parameters_fall_back_to_defaults() {
    let server = TestServer::default_config().await.unwrap();
    for name in ["Books", "Games"] {
        create_category(&server, name).await;
    }

    let resp = server
        .client()
        .get(server.url("/api/v1/categories?pageSize=&pageNumber="))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let page: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn large_page_size_is_accepted() {
    let server = TestServer::default_config().await.unwrap();
    create_category(&server, "Books").await;

    let resp = server
        .client()
        .get(server.url("/api/v1/categories?pageSize=1000"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn configured_default_page_size() {
    let config = ConfigBuilder::new().with_default_page_size(2).build();
    let server = TestServer::start(config).await.unwrap();
    for name in ["Books", "Games", "Music"] {
        create_category(&server, name).await;
    }

    let page: Vec<Value> = server
        .client()
        .get(server.url("/api/v1/categories"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn update_category() {
    let server = TestServer::default_config().await.unwrap();
    create_category(&server, "Books").await;

    let body = json!({
        "id": 1,
        "name": "Comics",
        "description": "Drawn stories",
        "logoUrl": "https://comics.jpeg",
    });
    let resp = server
        .client()
        .put(server.url("/api/v1/categories"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["name"], "Comics");
}

#[tokio::test]
async fn update_unknown_category_is_not_found() {
    let server = TestServer::default_config().await.unwrap();

    let body = json!({
        "id": 77,
        "name": "Comics",
        "description": "Drawn stories",
        "logoUrl": "https://comics.jpeg",
    });
    let resp = server
        .client()
        .put(server.url("/api/v1/categories"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(faults(&envelope), vec![fault("Entity not found", "Wrong id")]);
}

#[tokio::test]
async fn delete_category_in_use_conflicts() {
    let server = TestServer::default_config().await.unwrap();
    create_category(&server, "Books").await;
    create_product(&server, "Novel", 1).await;

    let resp = server
        .client()
        .delete(server.url("/api/v1/categories/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);

    let envelope: Value = resp.json().await.unwrap();
    assert_eq!(
        faults(&envelope),
        vec![fault("Entity in use", "Category has products")]
    );
}

#[tokio::test]
async fn delete_category() {
    let server = TestServer::default_config().await.unwrap();
    create_category(&server, "Books").await;

    let resp = server
        .client()
        .delete(server.url("/api/v1/categories/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = server
        .client()
        .get(server.url("/api/v1/categories/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
