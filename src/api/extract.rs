//! JSON body extraction.
//!
//! [`ApiJson`] is `axum::Json` with the rejection remapped into an
//! [`ApiError`], so malformed or missing bodies come back in the same
//! failure envelope as every other client error instead of axum's
//! plain-text rejection.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use super::error::ApiError;

pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Operation(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}
