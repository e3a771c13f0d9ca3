//! End-to-end tests for the /add and /near endpoints.
//!
//! These drive the real router against the in-memory record store, which
//! implements the same port contract as the MongoDB backend.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use nearby_api::routes::create_router;
use nearby_api::state::AppState;
use nearby_store::memory::MemoryRecordStore;

/// Router plus a handle on the store behind it.
fn test_app() -> (Router, MemoryRecordStore) {
    let store = MemoryRecordStore::new();
    let app = create_router(Arc::new(AppState::new(Arc::new(store.clone()))));
    (app, store)
}

async fn post_json(app: &Router, path: &str, body: &Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn near(app: &Router, coordinates: [f64; 2]) -> Value {
    let (status, body) = post_json(app, "/near", &json!({ "coordinates": coordinates })).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_add_then_near_round_trips_fields() {
    let (app, _) = test_app();

    let (status, body) =
        post_json(&app, "/add", &json!({"name": "harbor", "coordinates": [4.9, 52.37]})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let results = near(&app, [4.9, 52.37]).await;
    assert_eq!(results, json!([{"name": "harbor", "coordinates": [4.9, 52.37]}]));
}

#[tokio::test]
async fn test_repeated_add_is_idempotent() {
    let (app, store) = test_app();
    let payload = json!({"coordinates": [1.0, 2.0], "name": "A"});

    let (first, _) = post_json(&app, "/add", &payload).await;
    let (second, _) = post_json(&app, "/add", &payload).await;

    // The duplicate is swallowed: still a success, still one record.
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(store.len(), 1);

    let results = near(&app, [1.0, 2.0]).await;
    assert_eq!(results, json!([{"name": "A", "coordinates": [1.0, 2.0]}]));
}

#[tokio::test]
async fn test_near_returns_records_in_ascending_distance_order() {
    let (app, _) = test_app();

    for (name, coordinates) in [("A", [0.0, 0.0]), ("B", [10.0, 10.0]), ("C", [1.0, 1.0])] {
        let (status, _) =
            post_json(&app, "/add", &json!({"name": name, "coordinates": coordinates})).await;
        assert_eq!(status, StatusCode::OK);
    }

    let results = near(&app, [0.0, 0.0]).await;
    let names: Vec<&str> =
        results.as_array().unwrap().iter().map(|r| r["name"].as_str().unwrap()).collect();

    assert_eq!(names, vec!["A", "C", "B"]);
}

#[tokio::test]
async fn test_near_on_empty_store_returns_empty_array() {
    let (app, _) = test_app();

    let results = near(&app, [5.0, 5.0]).await;

    assert_eq!(results, json!([]));
}

#[tokio::test]
async fn test_near_caps_results_at_one_hundred() {
    let (app, _) = test_app();

    for i in 0..120 {
        let payload = json!({"name": format!("r{}", i), "coordinates": [i as f64, 0.0]});
        let (status, _) = post_json(&app, "/add", &payload).await;
        assert_eq!(status, StatusCode::OK);
    }

    let results = near(&app, [0.0, 0.0]).await;

    assert_eq!(results.as_array().unwrap().len(), 100);
}

#[tokio::test]
async fn test_add_rejects_malformed_bodies_without_mutation() {
    let (app, store) = test_app();

    let malformed = [
        json!({"name": "no-coordinates"}),
        json!({"coordinates": [1.0, 2.0]}),
        json!({"name": "triple", "coordinates": [1.0, 2.0, 3.0]}),
        json!({"name": "single", "coordinates": [1.0]}),
        json!({"name": "strings", "coordinates": ["a", "b"]}),
    ];

    for payload in &malformed {
        let (status, body) = post_json(&app, "/add", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["error"], "Malformed request");
    }

    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn test_near_rejects_missing_or_misshapen_coordinates() {
    let (app, _) = test_app();

    for payload in [json!({}), json!({"coordinates": [1.0, 2.0, 3.0]})] {
        let (status, _) = post_json(&app, "/near", &payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
    }
}

#[tokio::test]
async fn test_non_json_body_is_a_client_error() {
    let (app, store) = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json at all"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.len(), 0);
}
