//! # Report Repository
//!
//! Aggregates revenue, transaction count and the best-selling product over
//! a window of local (Asia/Jakarta) calendar dates.
//!
//! Both aggregates run inside one read transaction, so a checkout committing
//! mid-report can never make the revenue and the count disagree.
//!
//! ## Date Bucketing
//! ```text
//! date(created_at, '+7 hours') BETWEEN :start AND :end
//!        │               │
//!        │               └── shift UTC → UTC+7 (no DST)
//!        └── RFC 3339 text as written by the checkout recorder
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use kasir_core::report::sqlite_offset_modifier;
use kasir_core::{BestSeller, DailyReport, ReportWindow, REPORT_TIMEZONE};

/// Repository for sales reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Report for today in the reporting timezone.
    pub async fn daily(&self) -> DbResult<DailyReport> {
        self.summarize(&ReportWindow::today()).await
    }

    /// Summarizes every transaction whose local date falls in `window`.
    ///
    /// ## Best Seller
    /// Quantities are summed per recorded product name (the snapshot, not the
    /// current catalog name). Ties go to the lexicographically smallest name.
    /// An empty window yields zeros and no best seller.
    pub async fn summarize(&self, window: &ReportWindow) -> DbResult<DailyReport> {
        debug!(
            start = %window.start,
            end = %window.end,
            timezone = REPORT_TIMEZONE,
            "Summarizing sales"
        );

        if window.is_inverted() {
            return Ok(DailyReport::empty());
        }

        let modifier = sqlite_offset_modifier();
        let mut tx = self.pool.begin().await?;

        let (total_revenue, total_transaction_count): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(total_amount), 0), COUNT(*)
            FROM transactions
            WHERE date(created_at, ?3) BETWEEN ?1 AND ?2
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .bind(&modifier)
        .fetch_one(&mut *tx)
        .await?;

        let best: Option<(String, i64)> = sqlx::query_as(
            r#"
            SELECT td.product_name, SUM(td.quantity) AS quantity_sold
            FROM transaction_details td
            JOIN transactions t ON td.transaction_id = t.id
            WHERE date(t.created_at, ?3) BETWEEN ?1 AND ?2
            GROUP BY td.product_name
            ORDER BY quantity_sold DESC, td.product_name ASC
            LIMIT 1
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .bind(&modifier)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(DailyReport {
            total_revenue,
            total_transaction_count,
            best_selling_product: best.map(|(name, quantity_sold)| BestSeller {
                name,
                quantity_sold,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use kasir_core::{CheckoutItem, CheckoutItems, NewProduct};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    async fn seed(db: &Database, name: &str, price: i64) -> i64 {
        db.products()
            .create(&NewProduct {
                name: name.to_string(),
                price,
                stock: 1000,
            })
            .await
            .unwrap()
            .id
    }

    async fn sell_at(db: &Database, lines: &[(i64, i64)], at: DateTime<Utc>) {
        let items = CheckoutItems::new(
            lines
                .iter()
                .map(|&(product_id, quantity)| CheckoutItem {
                    product_id,
                    quantity,
                })
                .collect(),
        )
        .unwrap();
        db.transactions()
            .record_checkout_at(&items, at)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_window() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let report = db
            .reports()
            .summarize(&ReportWindow::day(date(2024, 1, 10)))
            .await
            .unwrap();
        assert_eq!(report, DailyReport::empty());
    }

    #[tokio::test]
    async fn test_coffee_and_tea_day() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let coffee = seed(&db, "Coffee", 5).await;
        let tea = seed(&db, "Tea", 3).await;

        // 08:00 and 15:00 Jakarta time on 2024-01-10
        sell_at(&db, &[(coffee, 2), (tea, 1)], utc(2024, 1, 10, 1, 0, 0)).await;
        sell_at(&db, &[(coffee, 3)], utc(2024, 1, 10, 8, 0, 0)).await;

        let report = db
            .reports()
            .summarize(&ReportWindow::day(date(2024, 1, 10)))
            .await
            .unwrap();

        assert_eq!(report.total_revenue, 28);
        assert_eq!(report.total_transaction_count, 2);
        assert_eq!(
            report.best_selling_product,
            Some(BestSeller {
                name: "Coffee".to_string(),
                quantity_sold: 5,
            })
        );
    }

    #[tokio::test]
    async fn test_local_day_boundaries() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let tea = seed(&db, "Tea", 3).await;

        // 23:59:59 on the 9th and 00:00:00 on the 10th, local time
        sell_at(&db, &[(tea, 1)], utc(2024, 1, 9, 16, 59, 59)).await;
        sell_at(&db, &[(tea, 2)], utc(2024, 1, 9, 17, 0, 0)).await;
        // 23:59:59 on the 10th, local time
        sell_at(&db, &[(tea, 4)], utc(2024, 1, 10, 16, 59, 59)).await;

        let reports = db.reports();
        let ninth = reports
            .summarize(&ReportWindow::day(date(2024, 1, 9)))
            .await
            .unwrap();
        let tenth = reports
            .summarize(&ReportWindow::day(date(2024, 1, 10)))
            .await
            .unwrap();

        assert_eq!(ninth.total_transaction_count, 1);
        assert_eq!(ninth.total_revenue, 3);
        assert_eq!(tenth.total_transaction_count, 2);
        assert_eq!(tenth.total_revenue, 18);
    }

    #[tokio::test]
    async fn test_sql_bucketing_matches_window_contains() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let tea = seed(&db, "Tea", 3).await;
        let window = ReportWindow::day(date(2024, 1, 10));

        let instants = [
            utc(2024, 1, 9, 16, 59, 59),
            utc(2024, 1, 9, 17, 0, 0),
            utc(2024, 1, 10, 16, 59, 59),
            utc(2024, 1, 10, 17, 0, 0),
        ];
        for at in instants {
            sell_at(&db, &[(tea, 1)], at).await;
        }

        let expected = instants.iter().filter(|at| window.contains(**at)).count() as i64;
        let report = db.reports().summarize(&window).await.unwrap();

        assert_eq!(expected, 2);
        assert_eq!(report.total_transaction_count, expected);
    }

    #[tokio::test]
    async fn test_range_is_inclusive() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let tea = seed(&db, "Tea", 3).await;

        sell_at(&db, &[(tea, 1)], utc(2024, 1, 4, 17, 0, 0)).await; // 5th local
        sell_at(&db, &[(tea, 1)], utc(2024, 1, 10, 16, 0, 0)).await; // 10th local
        sell_at(&db, &[(tea, 1)], utc(2024, 1, 10, 17, 0, 0)).await; // 11th local

        let report = db
            .reports()
            .summarize(&ReportWindow::range(date(2024, 1, 5), date(2024, 1, 10)))
            .await
            .unwrap();
        assert_eq!(report.total_transaction_count, 2);
        assert_eq!(report.total_revenue, 6);
    }

    #[tokio::test]
    async fn test_inverted_range_is_empty() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let tea = seed(&db, "Tea", 3).await;
        sell_at(&db, &[(tea, 1)], utc(2024, 1, 7, 3, 0, 0)).await;

        let report = db
            .reports()
            .summarize(&ReportWindow::range(date(2024, 1, 10), date(2024, 1, 5)))
            .await
            .unwrap();
        assert_eq!(report, DailyReport::empty());
    }

    #[tokio::test]
    async fn test_best_seller_tie_goes_to_smallest_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let tea = seed(&db, "Tea", 3).await;
        let coffee = seed(&db, "Coffee", 5).await;

        sell_at(&db, &[(tea, 2), (coffee, 2)], utc(2024, 1, 10, 3, 0, 0)).await;

        let report = db
            .reports()
            .summarize(&ReportWindow::day(date(2024, 1, 10)))
            .await
            .unwrap();
        let best = report.best_selling_product.unwrap();
        assert_eq!(best.name, "Coffee");
        assert_eq!(best.quantity_sold, 2);
    }

    #[tokio::test]
    async fn test_best_seller_uses_recorded_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let coffee = seed(&db, "Coffee", 5).await;
        sell_at(&db, &[(coffee, 1)], utc(2024, 1, 10, 3, 0, 0)).await;

        db.products()
            .update(
                coffee,
                &NewProduct {
                    name: "Kopi".to_string(),
                    price: 5,
                    stock: 10,
                },
            )
            .await
            .unwrap();
        sell_at(&db, &[(coffee, 1)], utc(2024, 1, 10, 4, 0, 0)).await;

        let report = db
            .reports()
            .summarize(&ReportWindow::day(date(2024, 1, 10)))
            .await
            .unwrap();
        // One unit under each name; the older name wins the tie
        assert_eq!(report.best_selling_product.unwrap().name, "Coffee");
        assert_eq!(report.total_revenue, 10);
    }

    #[tokio::test]
    async fn test_daily_includes_checkout_made_now() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let tea = seed(&db, "Tea", 3).await;
        sell_at(&db, &[(tea, 2)], Utc::now()).await;

        let report = db.reports().daily().await.unwrap();
        assert_eq!(report.total_transaction_count, 1);
        assert_eq!(report.total_revenue, 6);
    }
}
