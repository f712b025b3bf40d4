//! Car HTTP routes.
//!
//! Plain CRUD under `/api/cars`, plus the scoped variants mounted under a
//! dealer, a car make, or both. Scoped listing filters the collection by
//! the path ids (logical AND when both are present); scoped creation
//! injects the path ids into the new car, overriding any conflicting body
//! value.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::app::AppState;
use crate::model::{Car, CarDraft, CarPatch};

use super::error::{ApiError, ApiResult};
use super::extract::ApiJson;
use super::response::SuccessResponse;

const RESOURCE: &str = "Car";

// ==================
// Request Types
// ==================

/// Unvalidated creation body; `validate` turns it into a [`CarDraft`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    pub dealer_id: Option<String>,
    pub car_make_id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub wheels_count: Option<u32>,
}

impl CreateCarRequest {
    /// Require every field. String fields must be non-empty; numeric
    /// fields only need to be present (0 is a valid price).
    fn validate(self) -> ApiResult<CarDraft> {
        match (
            self.dealer_id,
            self.car_make_id,
            self.name,
            self.price,
            self.year,
            self.color,
            self.wheels_count,
        ) {
            (
                Some(dealer_id),
                Some(car_make_id),
                Some(name),
                Some(price),
                Some(year),
                Some(color),
                Some(wheels_count),
            ) if !dealer_id.is_empty()
                && !car_make_id.is_empty()
                && !name.is_empty()
                && !color.is_empty() =>
            {
                Ok(CarDraft {
                    dealer_id,
                    car_make_id,
                    name,
                    price,
                    year,
                    color,
                    wheels_count,
                })
            }
            _ => Err(ApiError::Validation("All car fields are required")),
        }
    }
}

// ==================
// Routers
// ==================

/// CRUD routes mounted at `/api/cars`
pub fn car_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_all_cars).post(create_car))
        .route(
            "/{id}",
            get(get_car_by_id).put(update_car).delete(delete_car),
        )
}

/// Scoped routes mounted at `/api/dealers/{dealerId}/cars`
pub fn dealer_car_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_cars_by_dealer).post(create_car_for_dealer))
}

/// Scoped routes mounted at `/api/carmakes/{carMakeId}/cars`
pub fn make_car_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_cars_by_make).post(create_car_for_make))
}

/// Doubly-scoped routes mounted at
/// `/api/dealers/{dealerId}/carmakes/{carMakeId}/cars`
pub fn dealer_make_car_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/",
        get(get_cars_by_dealer_and_make).post(create_car_for_dealer_and_make),
    )
}

// ==================
// Handlers
// ==================

async fn create_car(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreateCarRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<Car>>)> {
    let draft = body.validate()?;
    let car = state.cars.create(draft)?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(car))))
}

async fn get_all_cars(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SuccessResponse<Vec<Car>>>> {
    let cars = state.cars.find_all()?;
    Ok(Json(SuccessResponse::new(cars)))
}

async fn get_car_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<Car>>> {
    let car = state
        .cars
        .find_by_id(&id)?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    Ok(Json(SuccessResponse::new(car)))
}

async fn update_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<CarPatch>,
) -> ApiResult<Json<SuccessResponse<Car>>> {
    let car = state
        .cars
        .update(&id, patch)?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    Ok(Json(SuccessResponse::new(car)))
}

async fn delete_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<Value>>> {
    if !state.cars.delete(&id)? {
        return Err(ApiError::NotFound(RESOURCE));
    }
    Ok(Json(SuccessResponse::empty()))
}

async fn get_cars_by_dealer(
    State(state): State<Arc<AppState>>,
    Path(dealer_id): Path<String>,
) -> ApiResult<Json<SuccessResponse<Vec<Car>>>> {
    let cars = state.cars.find_where(|c| c.dealer_id == dealer_id)?;
    Ok(Json(SuccessResponse::new(cars)))
}

async fn create_car_for_dealer(
    State(state): State<Arc<AppState>>,
    Path(dealer_id): Path<String>,
    ApiJson(body): ApiJson<CreateCarRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<Car>>)> {
    // path id wins over whatever the body carries
    let draft = CreateCarRequest {
        dealer_id: Some(dealer_id),
        ..body
    }
    .validate()?;
    let car = state.cars.create(draft)?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(car))))
}

async fn get_cars_by_make(
    State(state): State<Arc<AppState>>,
    Path(car_make_id): Path<String>,
) -> ApiResult<Json<SuccessResponse<Vec<Car>>>> {
    let cars = state.cars.find_where(|c| c.car_make_id == car_make_id)?;
    Ok(Json(SuccessResponse::new(cars)))
}

async fn create_car_for_make(
    State(state): State<Arc<AppState>>,
    Path(car_make_id): Path<String>,
    ApiJson(body): ApiJson<CreateCarRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<Car>>)> {
    let draft = CreateCarRequest {
        car_make_id: Some(car_make_id),
        ..body
    }
    .validate()?;
    let car = state.cars.create(draft)?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(car))))
}

async fn get_cars_by_dealer_and_make(
    State(state): State<Arc<AppState>>,
    Path((dealer_id, car_make_id)): Path<(String, String)>,
) -> ApiResult<Json<SuccessResponse<Vec<Car>>>> {
    let cars = state
        .cars
        .find_where(|c| c.dealer_id == dealer_id && c.car_make_id == car_make_id)?;
    Ok(Json(SuccessResponse::new(cars)))
}

async fn create_car_for_dealer_and_make(
    State(state): State<Arc<AppState>>,
    Path((dealer_id, car_make_id)): Path<(String, String)>,
    ApiJson(body): ApiJson<CreateCarRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<Car>>)> {
    let draft = CreateCarRequest {
        dealer_id: Some(dealer_id),
        car_make_id: Some(car_make_id),
        ..body
    }
    .validate()?;
    let car = state.cars.create(draft)?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(car))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateCarRequest {
        CreateCarRequest {
            dealer_id: Some("d1".to_string()),
            car_make_id: Some("m1".to_string()),
            name: Some("roadster".to_string()),
            price: Some(10_000.0),
            year: Some(2020),
            color: Some("red".to_string()),
            wheels_count: Some(4),
        }
    }

    #[test]
    fn test_validate_accepts_full_payload() {
        let draft = full_request().validate().unwrap();
        assert_eq!(draft.dealer_id, "d1");
        assert_eq!(draft.wheels_count, 4);
    }

    #[test]
    fn test_validate_rejects_missing_field() {
        let request = CreateCarRequest {
            color: None,
            ..full_request()
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "All car fields are required");
    }

    #[test]
    fn test_validate_rejects_empty_string_field() {
        let request = CreateCarRequest {
            name: Some(String::new()),
            ..full_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_zero_numerics() {
        let request = CreateCarRequest {
            price: Some(0.0),
            wheels_count: Some(0),
            ..full_request()
        };
        assert!(request.validate().is_ok());
    }
}
