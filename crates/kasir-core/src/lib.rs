//! # kasir-core: Pure Business Logic for the Kasir POS backend
//!
//! Everything in this crate is deterministic and free of I/O. The database
//! layer (`kasir-db`) and the HTTP layer (`kasir-api`) build on these types.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    kasir-api (axum)                             │   │
//! │  │    /api/produk, /api/checkout, /api/report, /api/transaksi      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kasir-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  report   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  window   │  │  checkout │  │   │
//! │  │   │Transaction│  │ line math │  │  UTC+7    │  │  product  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 kasir-db (Database Layer)                       │   │
//! │  │        SQLite queries, migrations, repositories                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, DailyReport, ...)
//! - [`money`] - Integer money in the minor currency unit
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation (checkout items, products, dates)
//! - [`report`] - Reporting calendar in the fixed reference timezone
//!
//! ## Example
//!
//! ```rust
//! use kasir_core::money::Money;
//!
//! let price = Money::from_minor(5);
//! let subtotal = price.checked_times(2).unwrap();
//! assert_eq!(subtotal.minor(), 10);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::ReportWindow;
pub use types::*;
pub use validation::CheckoutItems;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the timezone reports are bucketed in.
///
/// Asia/Jakarta observes no daylight saving, so a fixed offset is exact.
pub const REPORT_TIMEZONE: &str = "Asia/Jakarta";

/// UTC offset of [`REPORT_TIMEZONE`], in hours.
pub const REPORT_UTC_OFFSET_HOURS: i32 = 7;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
