//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] implements `axum::response::IntoResponse`. Lookup failures
//! produce the fixed `{"message": "user not found"}` body; body errors keep
//! axum's own rejection response.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use userapi_core::StoreError;

/// JSON body of an error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No user matches the requested id (404).
    #[error("user not found")]
    NotFound,

    /// The request body is not JSON (400) or lacks the JSON content type (415).
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => {
                let body = ErrorMessage {
                    message: ApiError::NotFound.to_string(),
                };
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            ApiError::InvalidBody(rejection) => rejection.into_response(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound,
        }
    }
}
