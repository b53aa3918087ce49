use serde::{Deserialize, Serialize};

use crate::types::activity::ActivityRecord;

const MISSING: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCard {
    pub name: String,
    pub activity_type: String,
    pub distance: String,
    pub moving_time: String,
    pub elevation: String,
    pub date: String,
}

impl ActivityCard {
    pub fn from_record(record: &ActivityRecord) -> Self {
        Self {
            name: record.name.clone(),
            activity_type: record.activity_type.as_str().to_string(),
            distance: format_or_missing(record.distance_km, |v| format!("{:.2} km", v)),
            moving_time: format_or_missing(record.moving_time_min, |v| format!("{:.0} min", v)),
            elevation: format_or_missing(record.elevation_gain_m, |v| format!("{:.0} m", v)),
            date: record
                .start_date
                .map(|d| d.format("%d/%m/%y").to_string())
                .unwrap_or_else(|| MISSING.to_string()),
        }
    }
}

/// The `limit` most recent activities, newest first.
///
/// Uses the whole table, not the weekly window. Records sharing a date keep
/// their source order; undated records sort last.
pub fn recent_activities(records: &[ActivityRecord], limit: usize) -> Vec<ActivityCard> {
    let mut sorted: Vec<&ActivityRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    sorted
        .into_iter()
        .take(limit)
        .map(ActivityCard::from_record)
        .collect()
}

fn format_or_missing(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| MISSING.to_string())
}
