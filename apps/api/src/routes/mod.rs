//! # HTTP Routes
//!
//! ```text
//! GET    /health                     health
//! GET    /api/produk                 list products
//! POST   /api/produk                 create product
//! GET    /api/produk/{id}            get product
//! PUT    /api/produk/{id}            update product
//! DELETE /api/produk/{id}            delete product
//! POST   /api/checkout               checkout
//! GET    /api/transaksi/{id}         transaction lookup
//! GET    /api/report/hari-ini        today's report
//! GET    /api/report?start_date&end_date
//! ```

use axum::http::{HeaderName, HeaderValue, Request};
use axum::routing::{get, post};
use axum::Router;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

pub mod checkout;
pub mod health;
pub mod product;
pub mod report;
pub mod transaction;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request id generator.
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// All routes, without middleware.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/produk",
            get(product::list_products).post(product::create_product),
        )
        .route(
            "/api/produk/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route("/api/checkout", post(checkout::checkout))
        .route("/api/transaksi/{id}", get(transaction::get_transaction))
        .route("/api/report/hari-ini", get(report::daily_report))
        .route("/api/report", get(report::report_by_range))
}

/// The fully configured application: routes, middleware and state.
pub fn build_app(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    build_router()
        // Echo the request ID on the response (innermost, sees the generated id)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        // Trace - request spans at INFO
        .layer(TraceLayer::new_for_http())
        // Request ID - outermost, generated before anything else runs
        .layer(SetRequestIdLayer::new(request_id, XRequestId))
        .with_state(state)
}
