//! Transaction lookup endpoint (`/api/transaksi`).

use axum::extract::{Path, State};
use axum::Json;

use kasir_core::Transaction;

use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /api/transaksi/{id}`
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Transaction>> {
    Ok(Json(state.checkout.transaction(id).await?))
}
