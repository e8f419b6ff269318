use crate::api::{callback, callbacks, outputs};
use crate::{AppState, health, metrics};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Polling history
        .route(
            "/api/callbacks",
            post(callbacks::callbacks::append_callback)
                .get(callbacks::callbacks::list_callbacks)
                .delete(callbacks::callbacks::clear_callbacks),
        )
        // Persisted outputs
        .route("/api/outputs", post(outputs::outputs::create_output))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(metrics::render))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Live stream; registered after the CORS layer because it answers
        // preflight itself
        .route(
            "/api/callback",
            post(callback::callback::ingest)
                .get(callback::callback::stream)
                .options(callback::callback::preflight),
        )
        .with_state(state)
}
