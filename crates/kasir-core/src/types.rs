//! # Domain Types
//!
//! Core domain types shared by the database and HTTP layers.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │  Transaction    │   │ TransactionDetail   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │   │  id             │1─*│  transaction_id (FK)│   │
//! │  │  name           │   │  total_amount   │   │  product_id (ref)   │   │
//! │  │  price          │   │                 │   │  product_name (snap)│   │
//! │  │  stock ≥ 0      │   │  created_at UTC │   │  quantity, subtotal │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │  CheckoutItem   │   │  DailyReport    │   (derived, never stored)    │
//! │  │  product_id     │   │  total_revenue  │                              │
//! │  │  quantity > 0   │   │  total_transaksi│                              │
//! │  └─────────────────┘   │  produk_terlaris│                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A detail row copies the product name and the price-derived subtotal at the
//! moment of sale. Renaming or repricing a product later never changes
//! recorded history, and reports group by the copied name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price in minor currency units.
    pub price: i64,
    /// Units on hand. Never negative.
    pub stock: i64,
}

/// Fields accepted when creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub stock: i64,
}

// =============================================================================
// Checkout Input
// =============================================================================

/// One line of a checkout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Body of `POST /api/checkout`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Vec<CheckoutItem>,
}

// =============================================================================
// Transaction
// =============================================================================

/// A recorded checkout. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
    pub details: Vec<TransactionDetail>,
}

impl Transaction {
    /// Sum of the detail subtotals. Equals `total_amount` for every
    /// transaction written by the recorder.
    pub fn details_total(&self) -> i64 {
        self.details.iter().map(|d| d.subtotal).sum()
    }
}

/// A line of a recorded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TransactionDetail {
    pub id: i64,
    pub transaction_id: i64,
    pub product_id: i64,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    pub quantity: i64,
    /// quantity × unit price at time of sale.
    pub subtotal: i64,
}

// =============================================================================
// Reports
// =============================================================================

/// Aggregated sales over a reporting window.
///
/// Serialized with the field names the POS frontend already consumes:
/// ```json
/// { "total_revenue": 28, "total_transaksi": 2,
///   "produk_terlaris": { "nama": "Coffee", "qty_terjual": 5 } }
/// ```
/// `produk_terlaris` is omitted entirely when nothing was sold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    pub total_revenue: i64,
    #[serde(rename = "total_transaksi")]
    pub total_transaction_count: i64,
    #[serde(
        rename = "produk_terlaris",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub best_selling_product: Option<BestSeller>,
}

impl DailyReport {
    /// Report for a window with no transactions.
    pub fn empty() -> Self {
        DailyReport::default()
    }
}

/// The product with the highest summed quantity in a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestSeller {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "qty_terjual")]
    pub quantity_sold: i64,
}
