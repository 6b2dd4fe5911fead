//! Report endpoints (`/api/report`).

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use kasir_core::DailyReport;

use crate::error::ApiResult;
use crate::state::AppState;

/// Query string of `GET /api/report`.
///
/// Both fields are optional at the extractor level so a missing date is
/// reported as `INVALID_INPUT` by the service instead of a bare rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// `GET /api/report/hari-ini`
pub async fn daily_report(State(state): State<AppState>) -> ApiResult<Json<DailyReport>> {
    Ok(Json(state.reports.daily_report().await?))
}

/// `GET /api/report?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD`
pub async fn report_by_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> ApiResult<Json<DailyReport>> {
    let report = state
        .reports
        .report_by_range(query.start_date.as_deref(), query.end_date.as_deref())
        .await?;
    Ok(Json(report))
}
