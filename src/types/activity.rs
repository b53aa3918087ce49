use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ActivityType {
    Ride,
    VirtualRide,
    Run,
    Other(String),
}

impl ActivityType {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Ride" => ActivityType::Ride,
            "Virtual Ride" | "VirtualRide" => ActivityType::VirtualRide,
            "Run" => ActivityType::Run,
            other => ActivityType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActivityType::Ride => "Ride",
            ActivityType::VirtualRide => "Virtual Ride",
            ActivityType::Run => "Run",
            ActivityType::Other(name) => name,
        }
    }

    pub fn is_cycling(&self) -> bool {
        matches!(self, ActivityType::Ride | ActivityType::VirtualRide)
    }
}

impl From<String> for ActivityType {
    fn from(value: String) -> Self {
        ActivityType::parse(&value)
    }
}

impl From<ActivityType> for String {
    fn from(value: ActivityType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Csv,
    Workbook,
}

impl FileFormat {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit('.').next()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(FileFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(FileFormat::Workbook),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(Self::from_filename)
    }
}

/// One row of the activity export.
///
/// Every field that comes from a numeric or date cell is optional: cells that
/// fail to parse are coerced to `None` rather than rejecting the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Zero-based data row index in the source file (header excluded).
    pub row: usize,
    pub name: String,
    pub activity_type: ActivityType,
    pub start_date: Option<NaiveDate>,
    pub distance_km: Option<f64>,
    pub moving_time_min: Option<f64>,
    pub elevation_gain_m: Option<f64>,
}

impl ActivityRecord {
    /// Records without both distance and moving time never reach a weekly sum.
    pub fn is_aggregatable(&self) -> bool {
        self.distance_km.is_some() && self.moving_time_min.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityTable {
    pub records: Vec<ActivityRecord>,
    pub file_format: FileFormat,
}

impl ActivityTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
