//! Car make HTTP routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::app::AppState;
use crate::model::{CarMake, CarMakeDraft, CarMakePatch};

use super::error::{ApiError, ApiResult};
use super::extract::ApiJson;
use super::response::SuccessResponse;

const RESOURCE: &str = "Car make";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMakeRequest {
    pub name: Option<String>,
}

impl CreateMakeRequest {
    fn validate(self) -> ApiResult<CarMakeDraft> {
        match self.name {
            Some(name) if !name.is_empty() => Ok(CarMakeDraft { name }),
            _ => Err(ApiError::Validation("Car make name is required")),
        }
    }
}

/// CRUD routes mounted at `/api/carmakes`. The by-id segment is named
/// `{carMakeId}` so it composes with the scoped car nests.
pub fn make_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_all_makes).post(create_make))
        .route(
            "/{carMakeId}",
            get(get_make_by_id).put(update_make).delete(delete_make),
        )
}

async fn create_make(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreateMakeRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<CarMake>>)> {
    let draft = body.validate()?;
    let make = state.makes.create(draft)?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(make))))
}

async fn get_all_makes(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SuccessResponse<Vec<CarMake>>>> {
    let makes = state.makes.find_all()?;
    Ok(Json(SuccessResponse::new(makes)))
}

async fn get_make_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<CarMake>>> {
    let make = state
        .makes
        .find_by_id(&id)?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    Ok(Json(SuccessResponse::new(make)))
}

async fn update_make(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<CarMakePatch>,
) -> ApiResult<Json<SuccessResponse<CarMake>>> {
    let make = state
        .makes
        .update(&id, patch)?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    Ok(Json(SuccessResponse::new(make)))
}

async fn delete_make(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<Value>>> {
    if !state.makes.delete(&id)? {
        return Err(ApiError::NotFound(RESOURCE));
    }
    Ok(Json(SuccessResponse::empty()))
}
