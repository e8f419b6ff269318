//! REST API error types
//!
//! Every failure is reported as `{success: false, message, error}` where
//! `error` is a stable machine-readable code.

use cb_core::CoreError;
use cb_db::DbError;
use cb_stream::StreamError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON data";
pub const STORAGE_FAILURE_MESSAGE: &str = "Failed to save output";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error code (e.g., "INVALID_JSON", "STORAGE_ERROR")
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not valid JSON (400)
    #[error("Invalid JSON: {detail} {location}")]
    InvalidJson {
        detail: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// No room for another stream (503)
    #[error("Service unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Database write failed (500)
    #[error("Storage failure: {detail} {location}")]
    Storage {
        detail: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn status_and_body(self) -> (StatusCode, ApiErrorResponse) {
        let (status, message, code) = match self {
            ApiError::InvalidJson { .. } => (
                StatusCode::BAD_REQUEST,
                INVALID_JSON_MESSAGE.to_string(),
                "INVALID_JSON",
            ),
            ApiError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, message, "VALIDATION_ERROR")
            }
            ApiError::Unavailable { message, .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, message, "SERVICE_UNAVAILABLE")
            }
            ApiError::Storage { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                STORAGE_FAILURE_MESSAGE.to_string(),
                "STORAGE_ERROR",
            ),
            ApiError::Internal { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, "INTERNAL_ERROR")
            }
        };

        (
            status,
            ApiErrorResponse {
                success: false,
                message,
                error: code.into(),
            },
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        match self {
            ApiError::InvalidJson { .. } | ApiError::Validation { .. } => log::warn!("{}", self),
            _ => log::error!("{}", self),
        }

        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Decode { source, .. } => ApiError::InvalidJson {
                detail: source.to_string(),
                location,
            },
            CoreError::Encode { .. } => ApiError::Internal {
                message: "Failed to encode event".to_string(),
                location,
            },
        }
    }
}

impl From<StreamError> for ApiError {
    #[track_caller]
    fn from(e: StreamError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            StreamError::ChannelLimitExceeded { max, .. } => ApiError::Unavailable {
                message: format!("Too many open streams (max {max})"),
                location,
            },
            StreamError::Encode { .. } => ApiError::Internal {
                message: "Failed to encode event".to_string(),
                location,
            },
        }
    }
}

/// Database details never reach the client
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::Storage {
            detail: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
