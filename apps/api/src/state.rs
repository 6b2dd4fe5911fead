//! Shared application state.

use kasir_db::Database;

use crate::services::{CheckoutService, ProductService, ReportService};

/// State handed to every handler.
///
/// Cloning is cheap: each service only holds a clone of the pool handle.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub checkout: CheckoutService,
    pub reports: ReportService,
    pub products: ProductService,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState {
            checkout: CheckoutService::new(db.clone()),
            reports: ReportService::new(db.clone()),
            products: ProductService::new(db.clone()),
            db,
        }
    }
}
