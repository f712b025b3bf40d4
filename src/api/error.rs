//! # API Errors
//!
//! The single error boundary for all handlers: every failure a handler can
//! produce becomes an [`ApiError`], and its `IntoResponse` impl shapes the
//! uniform `{success: false, error}` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

use super::response::ErrorResponse;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// A required field is missing or null on create
    #[error("{0}")]
    Validation(&'static str),

    /// The addressed record does not exist; carries the resource's
    /// display name ("Car" becomes "Car not found")
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Something below the controller failed; downgraded to a client
    /// error carrying the underlying message
    #[error("{0}")]
    Operation(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Operation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Operation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
