#![allow(dead_code)]

use std::path::PathBuf;

use activity_dash::types::activity::{ActivityRecord, ActivityType};
use chrono::NaiveDate;

pub const HEADER: &str =
    "Name,Type,Start Date,Distance (km),Moving Time (min),Total Elevation Gain (m)";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn record(
    row: usize,
    activity_type: &str,
    start_date: Option<NaiveDate>,
    distance_km: Option<f64>,
    moving_time_min: Option<f64>,
    elevation_gain_m: Option<f64>,
) -> ActivityRecord {
    ActivityRecord {
        row,
        name: format!("Activity {row}"),
        activity_type: ActivityType::parse(activity_type),
        start_date,
        distance_km,
        moving_time_min,
        elevation_gain_m,
    }
}

/// Writes `contents` to a uniquely named file in the temp dir.
pub fn write_temp(extension: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "activity-dash-{}.{}",
        uuid::Uuid::new_v4(),
        extension
    ));
    std::fs::write(&path, contents).expect("write fixture");
    path
}

pub fn csv(rows: &[String]) -> String {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}

pub fn csv_row(
    name: &str,
    activity_type: &str,
    start: NaiveDate,
    distance_km: f64,
    moving_time_min: f64,
    elevation_gain_m: f64,
) -> String {
    format!(
        "{},{},{} 07:30:00,{},{},{}",
        name,
        activity_type,
        start.format("%Y-%m-%d"),
        distance_km,
        moving_time_min,
        elevation_gain_m
    )
}
