//! Service layer.
//!
//! Services validate input with `kasir-core` and delegate storage to the
//! `kasir-db` repositories. Handlers never touch SQL directly.

pub mod checkout;
pub mod product;
pub mod report;

pub use checkout::CheckoutService;
pub use product::ProductService;
pub use report::ReportService;
