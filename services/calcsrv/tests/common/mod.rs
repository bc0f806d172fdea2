//! Common test utilities and helpers

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use calcsrv::{create_router, AppState, CalcSrvConfig};
use serde_json::{json, Value};
use tower::util::ServiceExt;

/// Configuration with small limits so the limit paths are cheap to hit
pub fn test_config() -> CalcSrvConfig {
    let mut config = CalcSrvConfig::default();
    config.limits.max_width = 256;
    config.limits.max_digits = 256;
    config.api.body_limit_bytes = 4096;
    config
}

pub fn create_test_router() -> Router {
    create_router_with(test_config())
}

pub fn create_router_with(config: CalcSrvConfig) -> Router {
    create_router(Arc::new(AppState::new(config)))
}

/// Send a request and decode the JSON body (`{}` when empty or not JSON)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = serde_json::from_slice(&body_bytes).unwrap_or_else(|_| json!({}));
    (status, body)
}

/// Helper to make JSON requests
pub async fn json_request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = match body {
        Some(json) => Body::from(serde_json::to_string(&json).unwrap()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    send(app, request).await
}

pub async fn binary(
    app: &Router,
    binary1: &str,
    binary2: &str,
    num_bits: i64,
    operation: &str,
    representation: &str,
) -> (StatusCode, Value) {
    json_request(
        app,
        "POST",
        "/binary/operation",
        Some(json!({
            "binary1": binary1,
            "binary2": binary2,
            "num_bits": num_bits,
            "operation": operation,
            "representation": representation,
        })),
    )
    .await
}

pub async fn convert(app: &Router, number: &str, from_base: i64, to_base: i64) -> (StatusCode, Value) {
    json_request(
        app,
        "POST",
        "/convert",
        Some(json!({
            "number": number,
            "from_base": from_base,
            "to_base": to_base,
        })),
    )
    .await
}

/// Every error body carries the full envelope and never a success field
pub fn assert_error_envelope(body: &Value, kind: &str) {
    assert_eq!(body["kind"], kind, "unexpected body: {body}");
    assert!(body["error"].is_string(), "missing error message: {body}");
    assert!(body["error_code"].is_string());
    assert!(body["category"].is_string());
    assert!(body.get("result").is_none());
    assert!(body.get("quotient").is_none());
}
