//! Car dealer HTTP routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::app::AppState;
use crate::model::{CarDealer, CarDealerDraft, CarDealerPatch};

use super::error::{ApiError, ApiResult};
use super::extract::ApiJson;
use super::response::SuccessResponse;

const RESOURCE: &str = "Dealer";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealerRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl CreateDealerRequest {
    fn validate(self) -> ApiResult<CarDealerDraft> {
        match (self.name, self.city, self.country) {
            (Some(name), Some(city), Some(country))
                if !name.is_empty() && !city.is_empty() && !country.is_empty() =>
            {
                Ok(CarDealerDraft {
                    name,
                    city,
                    country,
                })
            }
            _ => Err(ApiError::Validation("All dealer fields are required")),
        }
    }
}

/// CRUD routes mounted at `/api/dealers`. The by-id segment is named
/// `{dealerId}` so it composes with the scoped car nests at the same
/// position.
pub fn dealer_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_all_dealers).post(create_dealer))
        .route(
            "/{dealerId}",
            get(get_dealer_by_id).put(update_dealer).delete(delete_dealer),
        )
}

async fn create_dealer(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreateDealerRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<CarDealer>>)> {
    let draft = body.validate()?;
    let dealer = state.dealers.create(draft)?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(dealer))))
}

async fn get_all_dealers(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SuccessResponse<Vec<CarDealer>>>> {
    let dealers = state.dealers.find_all()?;
    Ok(Json(SuccessResponse::new(dealers)))
}

async fn get_dealer_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<CarDealer>>> {
    let dealer = state
        .dealers
        .find_by_id(&id)?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    Ok(Json(SuccessResponse::new(dealer)))
}

async fn update_dealer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<CarDealerPatch>,
) -> ApiResult<Json<SuccessResponse<CarDealer>>> {
    let dealer = state
        .dealers
        .update(&id, patch)?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    Ok(Json(SuccessResponse::new(dealer)))
}

async fn delete_dealer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<Value>>> {
    if !state.dealers.delete(&id)? {
        return Err(ApiError::NotFound(RESOURCE));
    }
    Ok(Json(SuccessResponse::empty()))
}
