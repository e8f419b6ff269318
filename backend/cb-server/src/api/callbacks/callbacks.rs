use crate::{ApiResult, AppState, AppendResponse, CallbackListResponse, ClearResponse};

use cb_core::Event;

use axum::{Json, body::Bytes, extract::State};
use log::{debug, info};

/// POST /api/callbacks - Record one event for polling viewers
pub async fn append_callback(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<AppendResponse>> {
    let event = Event::from_slice(&body)?.normalize();
    debug!("Buffered callback {}", event.id().unwrap_or("-"));

    state.history.write().await.push(event);

    Ok(Json(AppendResponse { success: true }))
}

/// GET /api/callbacks - Snapshot of the buffered events
pub async fn list_callbacks(State(state): State<AppState>) -> ApiResult<Json<CallbackListResponse>> {
    let callbacks = state.history.read().await.snapshot();
    let count = callbacks.len();

    Ok(Json(CallbackListResponse { callbacks, count }))
}

/// DELETE /api/callbacks - Drop every buffered event
pub async fn clear_callbacks(State(state): State<AppState>) -> ApiResult<Json<ClearResponse>> {
    let cleared_count = state.history.write().await.clear();
    info!("Cleared {} buffered callbacks", cleared_count);

    Ok(Json(ClearResponse {
        success: true,
        cleared_count,
    }))
}
