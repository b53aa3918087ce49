use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::types::activity::ActivityRecord;
use crate::types::filter::ActivityFilter;
use crate::types::weekly::{PeakSummary, WeeklyAggregate};

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

pub fn week_label(week_start: NaiveDate) -> String {
    week_start.format("%d/%m").to_string()
}

/// Groups records into Monday-starting weeks, oldest week first.
///
/// Records outside the type filter, or missing distance or moving time, are
/// skipped. Weeks with no remaining records do not appear in the output.
pub fn aggregate_weekly(records: &[&ActivityRecord], filter: ActivityFilter) -> Vec<WeeklyAggregate> {
    let mut weeks: BTreeMap<NaiveDate, WeeklyAggregate> = BTreeMap::new();

    for record in records {
        if !filter.matches(&record.activity_type) {
            continue;
        }
        let (Some(date), Some(distance), Some(moving_time)) =
            (record.start_date, record.distance_km, record.moving_time_min)
        else {
            continue;
        };

        let start = week_start(date);
        let entry = weeks.entry(start).or_insert_with(|| WeeklyAggregate {
            week_start: start,
            label: week_label(start),
            moving_time_min: 0.0,
            distance_km: 0.0,
            elevation_gain_m: 0.0,
            activity_count: 0,
        });

        entry.moving_time_min += moving_time;
        entry.distance_km += distance;
        entry.elevation_gain_m += record.elevation_gain_m.unwrap_or(0.0);
        entry.activity_count += 1;
    }

    tracing::debug!(
        "Aggregated {} records into {} weeks (filter: {})",
        records.len(),
        weeks.len(),
        filter.as_str()
    );

    weeks.into_values().collect()
}

pub fn peak_summary(weeks: &[WeeklyAggregate]) -> Option<PeakSummary> {
    if weeks.is_empty() {
        return None;
    }
    let max_of = |f: fn(&WeeklyAggregate) -> f64| weeks.iter().map(f).fold(f64::NEG_INFINITY, f64::max);

    Some(PeakSummary {
        moving_time_hours: max_of(WeeklyAggregate::moving_time_hours),
        distance_km: max_of(|w| w.distance_km),
        elevation_gain_m: max_of(|w| w.elevation_gain_m),
    })
}
