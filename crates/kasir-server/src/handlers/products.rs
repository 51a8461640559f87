//! Product handlers (`/api/produk`)

use super::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{ItemId, JsonBody};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use kasir_core::{Product, ProductPayload};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.products.list_products().await?;
    Ok(Json(products))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = state.products.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get(
    State(state): State<AppState>,
    ItemId(id, _): ItemId<Product>,
) -> ApiResult<Json<Product>> {
    let product = state.products.get_product(id).await?;
    Ok(Json(product))
}

pub async fn update(
    State(state): State<AppState>,
    ItemId(id, _): ItemId<Product>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> ApiResult<Json<Product>> {
    let product = state.products.update_product(id, payload).await?;
    Ok(Json(product))
}

pub async fn delete(
    State(state): State<AppState>,
    ItemId(id, _): ItemId<Product>,
) -> ApiResult<Json<MessageResponse>> {
    state.products.delete_product(id).await?;
    Ok(Json(MessageResponse::new("sukses delete")))
}
