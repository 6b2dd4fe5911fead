//! `POST /api/checkout`

use axum::extract::State;
use axum::Json;

use kasir_core::{CheckoutRequest, Transaction};

use crate::error::ApiResult;
use crate::state::AppState;

/// Records a checkout and returns the stored transaction with its details.
///
/// ```text
/// {"items": [{"product_id": 1, "quantity": 2}]}
///   → 200 {"id": 1, "total_amount": 10, "created_at": "…", "details": [...]}
/// ```
pub async fn checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state.checkout.checkout(request.items).await?;
    Ok(Json(transaction))
}
