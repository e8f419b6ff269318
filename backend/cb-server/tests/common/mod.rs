#![allow(dead_code)]

//! Test infrastructure for cb-server API tests

use cb_server::AppState;
use cb_stream::{ChannelLimits, ChannelRegistry, HistoryBuffer};

use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_HISTORY_CAPACITY: usize = 5;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    cb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_max_streams(100).await
}

/// Create AppState whose registry refuses streams beyond `max_streams`
pub async fn create_test_app_state_with_max_streams(max_streams: usize) -> AppState {
    let pool = create_test_pool().await;
    let registry = ChannelRegistry::new(ChannelLimits::new(max_streams));

    AppState::new(registry, HistoryBuffer::new(TEST_HISTORY_CAPACITY), pool)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Read the next SSE frame from a streaming body and decode its JSON
pub async fn next_frame(body: &mut Body) -> serde_json::Value {
    let frame = body.frame().await.unwrap().unwrap();
    let data: Bytes = frame.into_data().unwrap();
    let text = std::str::from_utf8(&data).unwrap();
    let json = text
        .strip_prefix("data: ")
        .and_then(|rest| rest.strip_suffix("\n\n"))
        .unwrap();
    serde_json::from_str(json).unwrap()
}
