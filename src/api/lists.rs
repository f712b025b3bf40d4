//! List HTTP routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::app::AppState;
use crate::model::{List, ListDraft, ListPatch};

use super::error::{ApiError, ApiResult};
use super::extract::ApiJson;
use super::response::SuccessResponse;

const RESOURCE: &str = "List";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    pub name: Option<String>,
}

impl CreateListRequest {
    fn validate(self) -> ApiResult<ListDraft> {
        match self.name {
            Some(name) if !name.is_empty() => Ok(ListDraft { name }),
            _ => Err(ApiError::Validation("List name is required")),
        }
    }
}

/// CRUD routes mounted at `/api/lists`. The by-id segment is named
/// `{listId}` so it composes with the nested items routes.
pub fn list_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_all_lists).post(create_list))
        .route(
            "/{listId}",
            get(get_list_by_id).put(update_list).delete(delete_list),
        )
}

async fn create_list(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreateListRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<List>>)> {
    let draft = body.validate()?;
    let list = state.lists.create(draft)?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(list))))
}

async fn get_all_lists(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SuccessResponse<Vec<List>>>> {
    let lists = state.lists.find_all()?;
    Ok(Json(SuccessResponse::new(lists)))
}

async fn get_list_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<List>>> {
    let list = state
        .lists
        .find_by_id(&id)?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    Ok(Json(SuccessResponse::new(list)))
}

async fn update_list(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<ListPatch>,
) -> ApiResult<Json<SuccessResponse<List>>> {
    let list = state
        .lists
        .update(&id, patch)?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    Ok(Json(SuccessResponse::new(list)))
}

/// Deleting a list does not cascade to its items; dangling `listId`
/// references are allowed.
async fn delete_list(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<Value>>> {
    if !state.lists.delete(&id)? {
        return Err(ApiError::NotFound(RESOURCE));
    }
    Ok(Json(SuccessResponse::empty()))
}
