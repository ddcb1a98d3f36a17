use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use product_api::{
    abstract_trait::{DynProductRepository, DynProductService},
    handler::app,
    repository::InMemoryProductRepository,
    service::ProductService,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    let repository: DynProductRepository = Arc::new(InMemoryProductRepository::new());
    let service: DynProductService = Arc::new(ProductService::new(repository));

    app(service)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}

fn macbook() -> Value {
    json!({
        "name": "Macbook Pro",
        "description": "O poderoso computador da Apple",
        "price": 23000.00
    })
}

#[tokio::test]
async fn post_creates_product_inside_envelope() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/v1/products", Some(macbook())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Macbook Pro");
    assert_eq!(body["data"]["description"], "O poderoso computador da Apple");
    assert_eq!(body["data"]["price"], 23000.00);
}

#[tokio::test]
async fn post_with_non_positive_price_is_unprocessable() {
    let app = test_app();

    let mut body = macbook();
    body["price"] = json!(0.0);

    let (status, body) = send(&app, "POST", "/api/v1/products", Some(body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["data"]["error"], "the field 'price' is gt");
}

#[tokio::test]
async fn post_with_malformed_json_is_bad_request() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/products")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("json body");

    assert!(
        body["data"]["error"]
            .as_str()
            .expect("error message")
            .starts_with("Invalid JSON")
    );
}

#[tokio::test]
async fn post_with_absent_field_is_bad_request() {
    let app = test_app();

    // On create every field is required by the DTO shape itself, so a body
    // that omits one fails at parse time, before field rules run.
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/products",
        Some(json!({
            "description": "O poderoso computador da Apple",
            "price": 23000.00
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["data"]["error"]
            .as_str()
            .expect("error message")
            .starts_with("Invalid JSON")
    );
}

#[tokio::test]
async fn get_lists_only_live_products() {
    let app = test_app();

    send(&app, "POST", "/api/v1/products", Some(macbook())).await;
    send(
        &app,
        "POST",
        "/api/v1/products",
        Some(json!({
            "name": "iPhone 15 Pro Max",
            "description": "Description",
            "price": 50.60
        })),
    )
    .await;
    send(&app, "DELETE", "/api/v1/products/1", None).await;

    let (status, body) = send(&app, "GET", "/api/v1/products", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().expect("list");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "iPhone 15 Pro Max");
}

#[tokio::test]
async fn get_by_id_round_trips_the_created_product() {
    let app = test_app();

    send(&app, "POST", "/api/v1/products", Some(macbook())).await;

    let (status, body) = send(&app, "GET", "/api/v1/products/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Macbook Pro");
    assert_eq!(body["data"]["price"], 23000.00);
}

#[tokio::test]
async fn get_with_zero_id_is_bad_request() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/v1/products/0", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["error"], "ID must be a positive integer");
}

#[tokio::test]
async fn get_with_non_integer_id_is_bad_request() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/v1/products/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["error"], "ID must be an integer");
}

#[tokio::test]
async fn get_missing_product_is_not_found() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/v1/products/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["error"], "Product not found");
}

#[tokio::test]
async fn put_replaces_every_field() {
    let app = test_app();

    send(&app, "POST", "/api/v1/products", Some(macbook())).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/v1/products/1",
        Some(json!({
            "name": "Macbook Pro 2024",
            "description": "O poderoso computador da Apple",
            "price": 15000.00
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Macbook Pro 2024");
    assert_eq!(body["data"]["price"], 15000.00);
}

#[tokio::test]
async fn put_with_empty_field_is_unprocessable() {
    let app = test_app();

    send(&app, "POST", "/api/v1/products", Some(macbook())).await;

    // name present but empty: field rule, not a parse failure
    let (status, body) = send(
        &app,
        "PUT",
        "/api/v1/products/1",
        Some(json!({
            "name": "",
            "description": "O poderoso computador da Apple",
            "price": 15000.00
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["data"]["error"], "the field 'name' is required");
}

#[tokio::test]
async fn patch_updates_only_the_present_field() {
    let app = test_app();

    send(&app, "POST", "/api/v1/products", Some(macbook())).await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/v1/products/1",
        Some(json!({ "price": 15000.00 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Macbook Pro");
    assert_eq!(body["data"]["description"], "O poderoso computador da Apple");
    assert_eq!(body["data"]["price"], 15000.00);
}

#[tokio::test]
async fn patch_missing_product_is_not_found() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/v1/products/7",
        Some(json!({ "price": 15000.00 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["error"], "Product not found");
}

#[tokio::test]
async fn delete_returns_no_content_then_not_found() {
    let app = test_app();

    send(&app, "POST", "/api/v1/products", Some(macbook())).await;

    let (status, body) = send(&app, "DELETE", "/api/v1/products/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", "/api/v1/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/v1/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
