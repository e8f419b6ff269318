use crate::api::outputs::output_response::SAVED_MESSAGE;
use crate::{ApiError, ApiResult, AppState, OutputResponse};

use cb_core::output_text;
use cb_db::OutputRepository;

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use log::info;

/// POST /api/outputs - Persist one payload as text
pub async fn create_output(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<OutputResponse>)> {
    let text = output_text(&body).ok_or_else(|| ApiError::validation("Output is required"))?;

    let row = OutputRepository::insert(&state.pool, &text).await?;
    info!("Saved output {}", row.id);

    Ok((
        StatusCode::CREATED,
        Json(OutputResponse {
            message: SAVED_MESSAGE.to_string(),
            data: row,
        }),
    ))
}
