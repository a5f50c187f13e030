//! Calendar-period computation
//!
//! Goals accumulate progress within the calendar month they were created in.
//! The period ends at the last second of that month.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

/// Compute the final instant of the calendar month containing `now`
///
/// Normalizes `now` to day 1, adds 32 days (always landing in the next
/// month), normalizes that to day 1 at midnight, and subtracts one second.
pub fn current_period_end(now: DateTime<Utc>) -> DateTime<Utc> {
    let first_of_month = now.with_day(1).unwrap_or(now);
    let into_next_month = first_of_month + Duration::days(32);
    let next_month_start = Utc
        .with_ymd_and_hms(into_next_month.year(), into_next_month.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(into_next_month);
    next_month_start - Duration::seconds(1)
}
