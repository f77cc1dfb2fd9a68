//! End-to-end tests for the todo HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! TodoStore -> HTTP response.
//!
//! Each test creates a fresh AppState backed by an in-memory store. Tests
//! use `tower::ServiceExt::oneshot` to send requests directly to the
//! router without starting a network server.

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use todos_server::router::build_router;
use todos_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Creates a fresh router backed by an empty in-memory store.
fn test_app() -> Router {
    build_router(AppState::in_memory())
}

/// Sends a request and returns (status, headers, json body).
async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, HeaderMap, serde_json::Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, headers, body)
}

/// Sends a GET request and returns (status, json body).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = send(app, "GET", path, None).await;
    (status, body)
}

/// Sends a POST request with a JSON body and returns (status, json body).
async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = send(app, "POST", path, Some(body)).await;
    (status, body)
}

/// Creates a todo and returns its assigned id.
async fn create_todo(app: &Router, name: &str, is_complete: bool) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/todoitem",
        json!({ "name": name, "isComplete": is_complete }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create todo failed: {body:?}");
    body["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_on_empty_store_returns_empty_array() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/todoitem").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_counts_creates_minus_deletes() {
    let app = test_app();
    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(create_todo(&app, &format!("item {i}"), false).await);
    }
    for id in &ids[..2] {
        let (status, _, _) = send(&app, "DELETE", &format!("/api/todoitem/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (status, body) = get_json(&app, "/api/todoitem").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_missing_id_returns_404_with_message() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/todoitem/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Todo item with ID 999 not found." }));
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = test_app();
    let id = create_todo(&app, "walk the dog", true).await;

    let (status, body) = get_json(&app, &format!("/api/todoitem/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": id, "name": "walk the dog", "isComplete": true })
    );
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_create_gets_id_one_and_location_header() {
    let app = test_app();
    let (status, headers, body) = send(
        &app,
        "POST",
        "/api/todoitem",
        Some(json!({ "name": "Buy milk", "isComplete": false })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Buy milk", "isComplete": false })
    );
    assert_eq!(headers["location"], "/api/todoitem/1");
}

#[tokio::test]
async fn create_assigns_unique_ids() {
    let app = test_app();
    let a = create_todo(&app, "first", false).await;
    let b = create_todo(&app, "second", false).await;
    let c = create_todo(&app, "third", false).await;
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[tokio::test]
async fn create_ignores_caller_supplied_id() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/todoitem",
        json!({ "id": 42, "name": "no picking ids", "isComplete": false }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(1));
}

#[tokio::test]
async fn create_with_null_body_returns_400() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/todoitem", json!(null)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Request body is null." }));
}

#[tokio::test]
async fn create_with_unparseable_body_returns_400() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/todoitem")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn create_with_empty_name_returns_validation_errors() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/todoitem",
        json!({ "name": "", "isComplete": false }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["name"], json!(["The name field is required."]));

    // Nothing reached the store.
    let (_, items) = get_json(&app, "/api/todoitem").await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn create_with_missing_name_returns_validation_errors() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/todoitem", json!({ "isComplete": true })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["name"].is_array());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn put_replaces_the_full_record() {
    let app = test_app();
    let id = create_todo(&app, "draft title", false).await;

    let (status, _, body) = send(
        &app,
        "PUT",
        &format!("/api/todoitem/{id}"),
        Some(json!({ "name": "final title", "isComplete": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": id, "name": "final title", "isComplete": true })
    );

    let (_, fetched) = get_json(&app, &format!("/api/todoitem/{id}")).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn put_unknown_id_returns_404() {
    let app = test_app();
    let (status, _, body) = send(
        &app,
        "PUT",
        "/api/todoitem/7",
        Some(json!({ "name": "never stored", "isComplete": false })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Todo item with ID 7 not found." }));
}

#[tokio::test]
async fn put_with_empty_name_returns_validation_errors() {
    let app = test_app();
    let id = create_todo(&app, "keep me", false).await;

    let (status, _, body) = send(
        &app,
        "PUT",
        &format!("/api/todoitem/{id}"),
        Some(json!({ "name": "  ", "isComplete": true })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["name"].is_array());

    // The stored record is untouched.
    let (_, fetched) = get_json(&app, &format!("/api/todoitem/{id}")).await;
    assert_eq!(fetched["name"], json!("keep me"));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = test_app();
    let id = create_todo(&app, "ephemeral", false).await;

    let (status, _, _) = send(&app, "DELETE", &format!("/api/todoitem/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get_json(&app, &format!("/api/todoitem/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_is_a_silent_no_op() {
    let app = test_app();
    let (status, _, _) = send(&app, "DELETE", "/api/todoitem/12345", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
