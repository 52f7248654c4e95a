use chrono::NaiveDate;

/// Whole days between the last password change and today.
///
/// Negative if the last change lies in the future.
pub fn days_since(today: NaiveDate, last_change: NaiveDate) -> i64 {
    today.signed_duration_since(last_change).num_days()
}
