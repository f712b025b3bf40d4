//! List item HTTP routes.
//!
//! Items only exist under a list: the router is mounted at
//! `/api/lists/{listId}/items`. Listing filters by the path's list id and
//! creation injects it, overriding any `listId` in the body. By-id
//! operations address the item directly; the list segment is not
//! re-checked, matching the flat store model.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::app::AppState;
use crate::model::{Item, ItemDraft, ItemPatch};

use super::error::{ApiError, ApiResult};
use super::extract::ApiJson;
use super::response::SuccessResponse;

const RESOURCE: &str = "Item";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

impl CreateItemRequest {
    fn validate(self, list_id: String) -> ApiResult<ItemDraft> {
        match self.name {
            Some(name) if !name.is_empty() => Ok(ItemDraft {
                list_id,
                name,
                done: self.done.unwrap_or(false),
            }),
            _ => Err(ApiError::Validation("Item name is required")),
        }
    }
}

/// Routes mounted at `/api/lists/{listId}/items`
pub fn item_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_items_for_list).post(create_item))
        .route(
            "/{id}",
            get(get_item_by_id).put(update_item).delete(delete_item),
        )
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<String>,
    ApiJson(body): ApiJson<CreateItemRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<Item>>)> {
    let draft = body.validate(list_id)?;
    let item = state.items.create(draft)?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(item))))
}

async fn get_items_for_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<String>,
) -> ApiResult<Json<SuccessResponse<Vec<Item>>>> {
    let items = state.items.find_where(|i| i.list_id == list_id)?;
    Ok(Json(SuccessResponse::new(items)))
}

async fn get_item_by_id(
    State(state): State<Arc<AppState>>,
    Path((_list_id, id)): Path<(String, String)>,
) -> ApiResult<Json<SuccessResponse<Item>>> {
    let item = state
        .items
        .find_by_id(&id)?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    Ok(Json(SuccessResponse::new(item)))
}

async fn update_item(
    State(state): State<Arc<AppState>>,
    Path((_list_id, id)): Path<(String, String)>,
    ApiJson(patch): ApiJson<ItemPatch>,
) -> ApiResult<Json<SuccessResponse<Item>>> {
    let item = state
        .items
        .update(&id, patch)?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    Ok(Json(SuccessResponse::new(item)))
}

async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path((_list_id, id)): Path<(String, String)>,
) -> ApiResult<Json<SuccessResponse<Value>>> {
    if !state.items.delete(&id)? {
        return Err(ApiError::NotFound(RESOURCE));
    }
    Ok(Json(SuccessResponse::empty()))
}
