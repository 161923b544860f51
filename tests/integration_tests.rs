//! End-to-end integration tests for the catalog API
//!
//! Exercises the complete router over real HTTP semantics: typed path and
//! query parameters, JSON body validation, the closed model-name set, and
//! the wildcard path capture.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use catalog_api::{Config, create_router};

/// Helper to create a test server with custom configuration
fn create_test_server_with_config(config: Config) -> TestServer {
    let app = create_router(&config);
    TestServer::new(app).expect("Failed to create test server")
}

/// Helper to create a test server with default configuration
fn create_test_server() -> TestServer {
    create_test_server_with_config(Config::default())
}

#[tokio::test]
async fn test_root_greeting() {
    let server = create_test_server();

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"Hello": "World"}));
}

#[tokio::test]
async fn test_create_item_with_tax_derives_gross_price() {
    let server = create_test_server();

    let response = server
        .post("/items/")
        .json(&json!({"name": "Foo", "price": 10.0, "tax": 2.0}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "name": "Foo",
            "description": null,
            "price": 10.0,
            "tax": 2.0,
            "price_with_tax": 12.0
        })
    );
}

#[tokio::test]
async fn test_create_item_without_tax_omits_derived_field() {
    let server = create_test_server();

    let response = server
        .post("/items/")
        .json(&json!({"name": "Foo", "price": 10.0}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert!(body.get("price_with_tax").is_none());
    assert_eq!(body["name"], "Foo");
    assert!(body["tax"].is_null());
}

#[tokio::test]
async fn test_create_item_rejects_overlong_description() {
    let server = create_test_server();

    let response = server
        .post("/items/")
        .json(&json!({
            "name": "Foo",
            "description": "x".repeat(301),
            "price": 10.0
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["field"], "description");
    assert!(body["request_id"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_item_accepts_description_at_the_bound() {
    let server = create_test_server();

    let response = server
        .post("/items/")
        .json(&json!({
            "name": "Foo",
            "description": "x".repeat(300),
            "price": 10.0
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_item_rejects_malformed_body() {
    let server = create_test_server();

    // price is required; the body extractor rejects before the handler runs
    let response = server.post("/items/").json(&json!({"name": "Foo"})).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_item_merges_path_id_with_body() {
    let server = create_test_server();

    let response = server
        .put("/items/5")
        .json(&json!({"name": "X", "price": 1.0}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "item_id": 5,
            "name": "X",
            "description": null,
            "price": 1.0,
            "tax": null
        })
    );
}

#[tokio::test]
async fn test_update_item_rejects_non_integer_id() {
    let server = create_test_server();

    let response = server
        .put("/items/abc")
        .json(&json!({"name": "X", "price": 1.0}))
        .await;
    assert!(
        response.status_code().is_client_error(),
        "unexpected status: {}",
        response.status_code()
    );
}

#[tokio::test]
async fn test_read_item_echoes_query_when_present() {
    let server = create_test_server();

    let response = server.get("/items/abc?q=hi").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"item_id": "abc", "q": "hi"})
    );
}

#[tokio::test]
async fn test_read_item_omits_absent_query() {
    let server = create_test_server();

    let response = server.get("/items/abc").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"item_id": "abc"}));
}

#[tokio::test]
async fn test_read_item_treats_empty_query_as_absent() {
    let server = create_test_server();

    let response = server.get("/items/abc?q=").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"item_id": "abc"}));
}

#[tokio::test]
async fn test_list_items_default_window_returns_whole_catalog() {
    let server = create_test_server();

    let response = server.get("/items/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!([
            {"item_name": "Foo"},
            {"item_name": "Bar"},
            {"item_name": "Baz"}
        ])
    );
}

#[tokio::test]
async fn test_list_items_skip_and_limit_slice_the_catalog() {
    let server = create_test_server();

    let response = server.get("/items/?skip=1&limit=1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([{"item_name": "Bar"}]));
}

#[tokio::test]
async fn test_list_items_window_past_the_end_is_empty() {
    let server = create_test_server();

    let response = server.get("/items/?skip=10&limit=10").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_get_model_explicit_branches() {
    let server = create_test_server();

    let response = server.get("/models/alexnet").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"model_name": "alexnet", "message": "Deep Learning FTW!"})
    );

    let response = server.get("/models/lenet").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"model_name": "lenet", "message": "LeCNN all the images"})
    );
}

#[tokio::test]
async fn test_get_model_default_branch() {
    let server = create_test_server();

    let response = server.get("/models/resnet").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"model_name": "resnet", "message": "Have some residuals"})
    );
}

#[tokio::test]
async fn test_get_model_outside_the_closed_set_is_rejected() {
    let server = create_test_server();

    let response = server.get("/models/other").await;
    assert!(
        response.status_code().is_client_error(),
        "unexpected status: {}",
        response.status_code()
    );
}

#[tokio::test]
async fn test_read_file_preserves_embedded_separators() {
    let server = create_test_server();

    let response = server.get("/files/home/x.txt").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"file_path": "home/x.txt"})
    );
}

#[tokio::test]
async fn test_repeated_requests_are_idempotent() {
    let server = create_test_server();

    let first = server.get("/items/?skip=1&limit=1").await.json::<Value>();
    let second = server.get("/items/?skip=1&limit=1").await.json::<Value>();
    assert_eq!(first, second);

    let body = json!({"name": "Foo", "price": 10.0, "tax": 2.0});
    let first = server.post("/items/").json(&body).await.json::<Value>();
    let second = server.post("/items/").json(&body).await.json::<Value>();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_default_configuration() {
    let config = Config::default();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8000);
    assert!(config.server.enable_docs);
    assert_eq!(config.logging.level, "info");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let server = create_test_server();

    let response = server.get("/api-docs/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let doc: Value = response.json();
    assert_eq!(doc["info"]["title"], "Catalog API");
    assert!(doc["paths"]["/items/"].is_object());
    assert!(doc["paths"]["/models/{model_name}"].is_object());
}
