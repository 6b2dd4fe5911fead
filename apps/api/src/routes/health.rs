//! Health check endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// `GET /health`
///
/// `200 {"status": "ok"}` when the database answers and every embedded
/// migration is applied, `503 {"status": "degraded"}` otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let database = state.db.health_check().await;
    let migrations = state.db.migration_status().await.ok();

    let migrated = matches!(migrations, Some((total, applied)) if total == applied);
    let (status, label) = if database && migrated {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let (total, applied) = migrations.unwrap_or((0, 0));

    (
        status,
        Json(json!({
            "status": label,
            "service": "kasir-api",
            "version": env!("CARGO_PKG_VERSION"),
            "database": database,
            "migrations": { "total": total, "applied": applied },
        })),
    )
}
