use crate::ApiError;

use cb_core::Event;
use cb_stream::StreamError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_decode_error_returns_400_with_generic_message() {
    let core_error = Event::from_slice(b"{oops").unwrap_err();

    let (status, json) = body_json(ApiError::from(core_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid JSON data");
    assert_eq!(json["error"], "INVALID_JSON");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_message() {
    let (status, json) = body_json(ApiError::validation("Output is required")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Output is required");
    assert_eq!(json["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_channel_limit_returns_503() {
    let stream_error = StreamError::ChannelLimitExceeded {
        current: 3,
        max: 3,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(stream_error)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_storage_error_hides_detail() {
    let error = ApiError::Storage {
        detail: "disk I/O error at /var/secret/outputs.db".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to save output");
    assert_eq!(json["error"], "STORAGE_ERROR");
    assert!(!json.to_string().contains("/var/secret"));
}

#[tokio::test]
async fn test_db_error_maps_to_storage() {
    let db_error = cb_db::DbError::from(sqlx::Error::PoolClosed);

    let error = ApiError::from(db_error);

    assert!(matches!(error, ApiError::Storage { .. }));
}
