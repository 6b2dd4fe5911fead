//! # Transaction Repository
//!
//! The checkout recorder: turns validated line items into one persisted
//! transaction, atomically.
//!
//! ## Checkout Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       record_checkout(items)                            │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │   │                                                                     │
//! │   ├── for each item:                                                    │
//! │   │     UPDATE products SET stock = stock - qty                         │
//! │   │       WHERE id = ? AND stock >= qty        ← check + decrement      │
//! │   │       RETURNING name, price                  in one statement       │
//! │   │     │                                                               │
//! │   │     ├── no row? SELECT name, stock → NotFound | InsufficientStock   │
//! │   │     │           ROLLBACK, return                                    │
//! │   │     └── subtotal = qty × price (price read inside the same write)   │
//! │   │                                                                     │
//! │   ├── INSERT transactions (total_amount, created_at UTC)                │
//! │   ├── INSERT transaction_details × N (product_name snapshot)            │
//! │   │                                                                     │
//! │  COMMIT                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! The first statement of every checkout is a write, so SQLite hands out the
//! write lock (waiting up to the busy timeout) before anything is read.
//! Two checkouts on the same product therefore run one after the other, and
//! the conditional `UPDATE` makes overdrawing stock impossible even without
//! that serialization.
//!
//! Repeated product ids within one checkout are cumulative: the second line
//! sees the stock left by the first.

use chrono::{DateTime, SubsecRound, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info, warn};

use crate::error::{CheckoutResult, DbResult};
use kasir_core::{CheckoutItem, CheckoutItems, CoreError, Money, Transaction, TransactionDetail};

/// Repository for checkout transactions.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

/// A line whose stock has been claimed but not yet written.
struct ClaimedLine {
    product_id: i64,
    product_name: String,
    quantity: i64,
    subtotal: Money,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Records a checkout stamped with the current time.
    ///
    /// ## Errors
    /// * `Rejected(ProductNotFound)` - an item references an unknown product
    /// * `Rejected(InsufficientStock)` - an item asks for more than is left
    /// * `Rejected(AmountOverflow)` - a subtotal or the total overflows
    /// * `Storage(_)` - any database fault
    ///
    /// In every error case the store is left exactly as it was.
    pub async fn record_checkout(&self, items: &CheckoutItems) -> CheckoutResult<Transaction> {
        self.record_checkout_at(items, Utc::now()).await
    }

    /// Records a checkout with an explicit `created_at`.
    pub async fn record_checkout_at(
        &self,
        items: &CheckoutItems,
        created_at: DateTime<Utc>,
    ) -> CheckoutResult<Transaction> {
        // Stored as text; microseconds survive the round trip unchanged
        let created_at = created_at.trunc_subsecs(6);

        let mut tx = self.pool.begin().await?;

        match write_checkout(&mut tx, items, created_at).await {
            Ok(transaction) => {
                tx.commit().await?;
                info!(
                    transaction_id = transaction.id,
                    total_amount = transaction.total_amount,
                    items = transaction.details.len(),
                    "Checkout recorded"
                );
                Ok(transaction)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "Checkout rollback failed");
                }
                warn!(error = %err, "Checkout rejected, rolled back");
                Err(err)
            }
        }
    }

    /// Gets a transaction with its details (ordered by detail id).
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Transaction>> {
        let header: Option<(i64, i64, DateTime<Utc>)> = sqlx::query_as(
            r#"
            SELECT id, total_amount, created_at
            FROM transactions
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some((id, total_amount, created_at)) = header else {
            return Ok(None);
        };

        let details = sqlx::query_as::<_, TransactionDetail>(
            r#"
            SELECT id, transaction_id, product_id, product_name, quantity, subtotal
            FROM transaction_details
            WHERE transaction_id = ?1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Transaction {
            id,
            total_amount,
            created_at,
            details,
        }))
    }
}

/// Runs every statement of a checkout on an open transaction.
///
/// Never commits or rolls back; the caller owns the transaction boundary.
async fn write_checkout(
    conn: &mut SqliteConnection,
    items: &CheckoutItems,
    created_at: DateTime<Utc>,
) -> CheckoutResult<Transaction> {
    let mut lines = Vec::with_capacity(items.len());
    let mut total = Money::zero();

    for item in items {
        let line = claim_stock(conn, item).await?;

        total = total
            .checked_add(line.subtotal)
            .ok_or(CoreError::AmountOverflow {
                product_id: item.product_id,
            })?;
        lines.push(line);
    }

    let transaction_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO transactions (total_amount, created_at)
        VALUES (?1, ?2)
        RETURNING id
        "#,
    )
    .bind(total.minor())
    .bind(created_at)
    .fetch_one(&mut *conn)
    .await?;

    let mut details = Vec::with_capacity(lines.len());
    for line in lines {
        let detail = sqlx::query_as::<_, TransactionDetail>(
            r#"
            INSERT INTO transaction_details (
                transaction_id, product_id, product_name, quantity, subtotal
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, transaction_id, product_id, product_name, quantity, subtotal
            "#,
        )
        .bind(transaction_id)
        .bind(line.product_id)
        .bind(&line.product_name)
        .bind(line.quantity)
        .bind(line.subtotal.minor())
        .fetch_one(&mut *conn)
        .await?;

        details.push(detail);
    }

    Ok(Transaction {
        id: transaction_id,
        total_amount: total.minor(),
        created_at,
        details,
    })
}

/// Decrements stock for one line and prices it at the current unit price.
async fn claim_stock(
    conn: &mut SqliteConnection,
    item: &CheckoutItem,
) -> CheckoutResult<ClaimedLine> {
    debug!(product_id = item.product_id, quantity = item.quantity, "Claiming stock");

    let claimed: Option<(String, i64)> = sqlx::query_as(
        r#"
        UPDATE products
        SET stock = stock - ?2
        WHERE id = ?1 AND stock >= ?2
        RETURNING name, price
        "#,
    )
    .bind(item.product_id)
    .bind(item.quantity)
    .fetch_optional(&mut *conn)
    .await?;

    let Some((product_name, price)) = claimed else {
        return Err(explain_rejection(conn, item).await?.into());
    };

    let subtotal = Money::from_minor(price)
        .checked_times(item.quantity)
        .ok_or(CoreError::AmountOverflow {
            product_id: item.product_id,
        })?;

    Ok(ClaimedLine {
        product_id: item.product_id,
        product_name,
        quantity: item.quantity,
        subtotal,
    })
}

/// Tells a missing product apart from one without enough stock.
async fn explain_rejection(
    conn: &mut SqliteConnection,
    item: &CheckoutItem,
) -> DbResult<CoreError> {
    let current: Option<(String, i64)> = sqlx::query_as(
        r#"
        SELECT name, stock
        FROM products
        WHERE id = ?1
        "#,
    )
    .bind(item.product_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(match current {
        None => CoreError::ProductNotFound(item.product_id),
        Some((name, stock)) => CoreError::InsufficientStock {
            product_id: item.product_id,
            name,
            available: stock,
            requested: item.quantity,
        },
    })
}
