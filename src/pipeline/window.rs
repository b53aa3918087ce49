use chrono::{Days, NaiveDate};

use crate::types::activity::ActivityRecord;

/// First day of the trailing window ending at `today`, saturating at the
/// earliest representable date.
pub fn window_start(today: NaiveDate, weeks: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(weeks) * 7))
        .unwrap_or(NaiveDate::MIN)
}

/// Records dated on or after `today - weeks * 7 days`.
///
/// Records without a start date are never in range.
pub fn trailing_window(records: &[ActivityRecord], today: NaiveDate, weeks: u32) -> Vec<&ActivityRecord> {
    let start = window_start(today, weeks);
    records
        .iter()
        .filter(|record| record.start_date.is_some_and(|date| date >= start))
        .collect()
}
