//! # Repository Module
//!
//! SQL lives here and nowhere else. Each repository owns a clone of the pool
//! and is obtained from [`crate::Database`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  kasir-api service                                                      │
//! │       │                                                                 │
//! │       │  db.transactions().record_checkout(&items)                      │
//! │       ▼                                                                 │
//! │  TransactionRepository ──► BEGIN … UPDATE products … INSERT … COMMIT    │
//! │  ReportRepository      ──► read snapshot, two aggregate queries         │
//! │  ProductRepository     ──► catalog CRUD                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Catalog CRUD
//! - [`transaction::TransactionRepository`] - Atomic checkout, transaction lookup
//! - [`report::ReportRepository`] - Revenue / count / best-seller aggregation

pub mod product;
pub mod report;
pub mod transaction;
