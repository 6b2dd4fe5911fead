//! Sales report service.

use kasir_core::validation::parse_report_date;
use kasir_core::{DailyReport, ReportWindow};
use kasir_db::Database;

use crate::error::ApiResult;

/// Report service.
#[derive(Debug, Clone)]
pub struct ReportService {
    db: Database,
}

impl ReportService {
    pub fn new(db: Database) -> Self {
        ReportService { db }
    }

    /// Sales for today in Asia/Jakarta.
    pub async fn daily_report(&self) -> ApiResult<DailyReport> {
        Ok(self.db.reports().daily().await?)
    }

    /// Sales between two `YYYY-MM-DD` dates, inclusive.
    ///
    /// Both dates are required. A start after the end is not an error; it
    /// simply matches nothing.
    pub async fn report_by_range(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ApiResult<DailyReport> {
        let start = parse_report_date("start_date", start_date)?;
        let end = parse_report_date("end_date", end_date)?;

        Ok(self
            .db
            .reports()
            .summarize(&ReportWindow::range(start, end))
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use kasir_db::DbConfig;

    async fn service() -> ReportService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        ReportService::new(db)
    }

    #[tokio::test]
    async fn test_missing_dates_rejected() {
        let service = service().await;

        let err = service
            .report_by_range(None, Some("2024-01-05"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("start_date"));

        let err = service
            .report_by_range(Some("2024-01-05"), Some(""))
            .await
            .unwrap_err();
        assert!(err.message.contains("end_date"));
    }

    #[tokio::test]
    async fn test_unparseable_date_rejected() {
        let err = service()
            .await
            .report_by_range(Some("2024-13-01"), Some("2024-12-31"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[tokio::test]
    async fn test_inverted_range_is_empty_report() {
        let report = service()
            .await
            .report_by_range(Some("2024-01-10"), Some("2024-01-05"))
            .await
            .unwrap();
        assert_eq!(report, DailyReport::empty());
    }

    #[tokio::test]
    async fn test_daily_report_on_empty_store() {
        let report = service().await.daily_report().await.unwrap();
        assert_eq!(report.total_revenue, 0);
        assert_eq!(report.total_transaction_count, 0);
        assert!(report.best_selling_product.is_none());
    }
}
