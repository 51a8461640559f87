//! Category handlers (`/api/categories`)

use super::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{ItemId, JsonBody};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use kasir_core::{Category, CategoryPayload};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.categories.list_categories().await?;
    Ok(Json(categories))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let category = state.categories.create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn get(
    State(state): State<AppState>,
    ItemId(id, _): ItemId<Category>,
) -> ApiResult<Json<Category>> {
    let category = state.categories.get_category(id).await?;
    Ok(Json(category))
}

pub async fn update(
    State(state): State<AppState>,
    ItemId(id, _): ItemId<Category>,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> ApiResult<Json<Category>> {
    let category = state.categories.update_category(id, payload).await?;
    Ok(Json(category))
}

pub async fn delete(
    State(state): State<AppState>,
    ItemId(id, _): ItemId<Category>,
) -> ApiResult<Json<MessageResponse>> {
    state.categories.delete_category(id).await?;
    Ok(Json(MessageResponse::new("Category berhasil di delete")))
}
