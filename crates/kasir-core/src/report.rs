//! # Reporting Calendar
//!
//! Transactions are stored with UTC timestamps but reported by calendar date
//! in Asia/Jakarta (UTC+7, no daylight saving).
//!
//! ```text
//! created_at (UTC)            local date (UTC+7)
//! ─────────────────────────   ──────────────────
//! 2024-01-09T16:59:59Z   ──►  2024-01-09
//! 2024-01-09T17:00:00Z   ──►  2024-01-10   ← new business day
//! 2024-01-10T16:59:59Z   ──►  2024-01-10
//! ```
//!
//! The database applies the same shift with SQLite's date modifier
//! ([`sqlite_offset_modifier`]), so Rust-side and SQL-side bucketing agree.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::REPORT_UTC_OFFSET_HOURS;

/// Shift from UTC to the reporting timezone.
fn utc_offset() -> Duration {
    Duration::hours(i64::from(REPORT_UTC_OFFSET_HOURS))
}

/// Calendar date of `instant` in the reporting timezone.
pub fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    (instant + utc_offset()).date_naive()
}

/// Today's date in the reporting timezone.
pub fn today() -> NaiveDate {
    local_date(Utc::now())
}

/// SQLite `date()` modifier that converts a UTC timestamp to the reporting
/// timezone, e.g. `"+7 hours"`.
pub fn sqlite_offset_modifier() -> String {
    format!("{:+} hours", REPORT_UTC_OFFSET_HOURS)
}

/// An inclusive range of reporting dates.
///
/// `start > end` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportWindow {
    /// Window covering a single date.
    pub fn day(date: NaiveDate) -> Self {
        ReportWindow {
            start: date,
            end: date,
        }
    }

    /// Window covering today in the reporting timezone.
    pub fn today() -> Self {
        ReportWindow::day(today())
    }

    /// Inclusive window between two dates.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        ReportWindow { start, end }
    }

    /// True when no date can fall inside the window.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Whether a timestamp falls in the window once converted to local time.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        let date = local_date(instant);
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_local_date_rolls_over_at_17_utc() {
        let before = Utc.with_ymd_and_hms(2024, 1, 9, 16, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 1, 9, 17, 0, 0).unwrap();
        assert_eq!(local_date(before), date(2024, 1, 9));
        assert_eq!(local_date(after), date(2024, 1, 10));
    }

    #[test]
    fn test_window_contains_is_inclusive() {
        let window = ReportWindow::range(date(2024, 1, 5), date(2024, 1, 10));
        let first = Utc.with_ymd_and_hms(2024, 1, 4, 17, 0, 0).unwrap();
        let last = Utc.with_ymd_and_hms(2024, 1, 10, 16, 59, 59).unwrap();
        let outside = Utc.with_ymd_and_hms(2024, 1, 10, 17, 0, 0).unwrap();

        assert!(window.contains(first));
        assert!(window.contains(last));
        assert!(!window.contains(outside));
    }

    #[test]
    fn test_inverted_window_matches_nothing() {
        let window = ReportWindow::range(date(2024, 1, 10), date(2024, 1, 5));
        assert!(window.is_inverted());
        let instant = Utc.with_ymd_and_hms(2024, 1, 7, 3, 0, 0).unwrap();
        assert!(!window.contains(instant));
    }

    #[test]
    fn test_sqlite_modifier() {
        assert_eq!(sqlite_offset_modifier(), "+7 hours");
    }
}
