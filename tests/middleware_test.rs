// ABOUTME: Integration tests for request ID propagation and CORS handling
// ABOUTME: Drives the full application router so layer ordering is exercised
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::{http::StatusCode, middleware, routing::get, Extension, Router};
use common::create_test_app;
use exercise_tracker::middleware::{request_id_middleware, RequestId};
use helpers::axum_test::AxumTestRequest;

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let (app, _resources) = create_test_app().await.unwrap();

    let response = AxumTestRequest::get("/api/users").send(app).await;
    let request_id = response.header("x-request-id").expect("request id header");
    assert!(uuid::Uuid::parse_str(&request_id).is_ok());
}

#[tokio::test]
async fn test_request_id_propagated_when_supplied() {
    let (app, _resources) = create_test_app().await.unwrap();

    let response = AxumTestRequest::get("/api/users")
        .header("x-request-id", "trace-abc-123")
        .send(app)
        .await;
    assert_eq!(response.header("x-request-id").as_deref(), Some("trace-abc-123"));
}

#[tokio::test]
async fn test_oversized_request_id_replaced() {
    let (app, _resources) = create_test_app().await.unwrap();

    let oversized = "x".repeat(200);
    let response = AxumTestRequest::get("/health")
        .header("x-request-id", &oversized)
        .send(app)
        .await;
    let request_id = response.header("x-request-id").unwrap();
    assert_ne!(request_id, oversized);
    assert!(uuid::Uuid::parse_str(&request_id).is_ok());
}

#[tokio::test]
async fn test_request_id_available_to_handlers() {
    let app = Router::new()
        .route(
            "/echo",
            get(|Extension(id): Extension<RequestId>| async move { id.as_str().to_owned() }),
        )
        .layer(middleware::from_fn(request_id_middleware));

    let response = AxumTestRequest::get("/echo")
        .header("x-request-id", "handler-visible")
        .send(app)
        .await;
    assert_eq!(response.text(), "handler-visible");
}

#[tokio::test]
async fn test_error_responses_carry_request_id() {
    let (app, _resources) = create_test_app().await.unwrap();

    let response = AxumTestRequest::get("/api/users/missing/logs")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert!(response.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let (app, _resources) = create_test_app().await.unwrap();

    let response = AxumTestRequest::get("/api/users")
        .header("origin", "https://somewhere.example")
        .send(app.clone())
        .await;
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );

    let preflight = AxumTestRequest::options("/api/users")
        .header("origin", "https://somewhere.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send(app)
        .await;
    assert_eq!(preflight.status_code(), StatusCode::OK);
    let methods = preflight.header("access-control-allow-methods").unwrap();
    assert!(methods.contains("POST"));
}
