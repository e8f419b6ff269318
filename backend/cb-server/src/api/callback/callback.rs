use crate::{ApiResult, AppState, IngestResponse};

use cb_core::Event;

use std::convert::Infallible;

use axum::{
    Json,
    body::{Body, Bytes},
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use futures::StreamExt;
use log::debug;

const STREAM_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
const STREAM_ALLOWED_METHODS: &str = "GET, POST";
const PREFLIGHT_ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// POST /api/callback - Broadcast one event to every open stream
pub async fn ingest(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<IngestResponse>> {
    let event = Event::from_slice(&body)?.normalize();

    let client_count = state.registry.publish(&event).await?;
    debug!(
        "Broadcast event {} to {} streams",
        event.id().unwrap_or("-"),
        client_count
    );

    Ok(Json(IngestResponse::broadcast(client_count)))
}

/// GET /api/callback - Open a live stream of `data: <json>` frames
///
/// The first frame is a connection greeting. The stream ends when the client
/// disconnects or the server shuts down.
pub async fn stream(State(state): State<AppState>) -> ApiResult<Response> {
    let channel = state.registry.subscribe_with(Event::connection).await?;
    debug!("Streaming to {}", channel.id());

    let body = Body::from_stream(channel.map(Ok::<_, Infallible>));

    Ok((
        [
            (header::CONTENT_TYPE, STREAM_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, STREAM_ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
        body,
    )
        .into_response())
}

/// OPTIONS /api/callback - CORS preflight
pub async fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, PREFLIGHT_ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response()
}
