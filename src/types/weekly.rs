use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::filter::Metric;

/// Summed metrics for one Monday-starting calendar week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAggregate {
    pub week_start: NaiveDate,
    /// `dd/mm` of `week_start`, used on the x axis.
    pub label: String,
    pub moving_time_min: f64,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub activity_count: usize,
}

impl WeeklyAggregate {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::MovingTime => self.moving_time_min,
            Metric::Distance => self.distance_km,
        }
    }

    pub fn moving_time_hours(&self) -> f64 {
        self.moving_time_min / 60.0
    }
}

/// Largest weekly value of each metric across an aggregate set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakSummary {
    pub moving_time_hours: f64,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}
