//! Catalog endpoints (`/api/produk`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use kasir_core::{NewProduct, Product};

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(state.products.list().await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Product>> {
    Ok(Json(state.products.get(id).await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<NewProduct>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let created = state.products.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<NewProduct>,
) -> ApiResult<Json<Product>> {
    Ok(Json(state.products.update(id, body).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
