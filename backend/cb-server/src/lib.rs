pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    callback::{
        callback::{ingest, preflight, stream},
        ingest_response::IngestResponse,
    },
    callbacks::{
        append_response::AppendResponse,
        callback_list_response::CallbackListResponse,
        callbacks::{append_callback, clear_callbacks, list_callbacks},
        clear_response::ClearResponse,
    },
    error::{ApiError, ApiErrorResponse, Result as ApiResult},
    outputs::{output_response::OutputResponse, outputs::create_output},
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
