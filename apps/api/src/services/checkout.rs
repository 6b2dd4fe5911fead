//! Checkout orchestration.
//!
//! Validates the requested line items and hands them to the transaction
//! recorder. The recorder's result is returned unchanged.

use tracing::{debug, instrument};

use kasir_core::{CheckoutItem, CheckoutItems, Transaction};
use kasir_db::Database;

use crate::error::{ApiError, ApiResult};

/// Checkout service.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    db: Database,
}

impl CheckoutService {
    pub fn new(db: Database) -> Self {
        CheckoutService { db }
    }

    /// Converts line items into a persisted transaction.
    ///
    /// ## Errors
    /// * `INVALID_INPUT` - no items, a quantity ≤ 0, or an amount overflow
    /// * `NOT_FOUND` - an unknown product id
    /// * `INSUFFICIENT_STOCK` - a quantity above the remaining stock
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub async fn checkout(&self, items: Vec<CheckoutItem>) -> ApiResult<Transaction> {
        let items = CheckoutItems::new(items)?;
        debug!("Checkout items validated");

        self.db
            .transactions()
            .record_checkout(&items)
            .await
            .map_err(ApiError::from)
    }

    /// Looks up a recorded transaction.
    pub async fn transaction(&self, id: i64) -> ApiResult<Transaction> {
        self.db
            .transactions()
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("Transaction not found: {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use kasir_core::NewProduct;
    use kasir_db::DbConfig;

    async fn service_with_tea(stock: i64) -> (CheckoutService, Database, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let tea = db
            .products()
            .create(&NewProduct {
                name: "Tea".to_string(),
                price: 3,
                stock,
            })
            .await
            .unwrap();
        (CheckoutService::new(db.clone()), db, tea.id)
    }

    #[tokio::test]
    async fn test_empty_checkout_is_invalid_input() {
        let (service, db, tea) = service_with_tea(5).await;

        let err = service.checkout(vec![]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.message, "no items in checkout");

        let stock = db.products().get_by_id(tea).await.unwrap().unwrap().stock;
        assert_eq!(stock, 5);
    }

    #[tokio::test]
    async fn test_zero_quantity_is_invalid_input() {
        let (service, _db, tea) = service_with_tea(5).await;

        let err = service
            .checkout(vec![CheckoutItem {
                product_id: tea,
                quantity: 0,
            }])
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[tokio::test]
    async fn test_checkout_and_lookup() {
        let (service, _db, tea) = service_with_tea(5).await;

        let tx = service
            .checkout(vec![CheckoutItem {
                product_id: tea,
                quantity: 2,
            }])
            .await
            .unwrap();
        assert_eq!(tx.total_amount, 6);

        assert_eq!(service.transaction(tx.id).await.unwrap(), tx);
        let missing = service.transaction(tx.id + 1).await.unwrap_err();
        assert_eq!(missing.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_insufficient_stock_passes_through() {
        let (service, _db, tea) = service_with_tea(1).await;

        let err = service
            .checkout(vec![CheckoutItem {
                product_id: tea,
                quantity: 2,
            }])
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
    }
}
