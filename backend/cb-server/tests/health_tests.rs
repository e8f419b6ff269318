//! Integration tests for health endpoints
mod common;

use crate::common::{body_json, create_test_app_state, send};

use axum::{body::Body, http::StatusCode};

use cb_server::routes::build_router;

#[tokio::test]
async fn test_health_reports_counts() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let _channel = state.registry.subscribe().await.unwrap();
    send(&app, "POST", "/api/callbacks", r#"{"message":"a"}"#).await;

    let response = send(&app, "GET", "/health", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["openStreams"], 1);
    assert_eq!(json["bufferedCallbacks"], 1);
    assert_eq!(json["components"]["database"], "operational");
}

#[tokio::test]
async fn test_live_and_ready() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    assert_eq!(send(&app, "GET", "/live", Body::empty()).await.status(), StatusCode::OK);
    assert_eq!(send(&app, "GET", "/ready", Body::empty()).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_ready_fails_when_database_closed() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    state.pool.close().await;

    let response = send(&app, "GET", "/ready", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_metrics_disabled_returns_404() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = send(&app, "GET", "/metrics", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
