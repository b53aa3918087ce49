mod coerce;
mod delimited;
mod workbook;

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::LoadError;
use crate::types::activity::{ActivityRecord, ActivityTable, ActivityType, FileFormat};

pub use coerce::{parse_date, parse_number};

pub const COL_NAME: &str = "Name";
pub const COL_TYPE: &str = "Type";
pub const COL_START_DATE: &str = "Start Date";
pub const COL_DISTANCE: &str = "Distance (km)";
pub const COL_MOVING_TIME: &str = "Moving Time (min)";
pub const COL_ELEVATION: &str = "Total Elevation Gain (m)";

pub trait Loader {
    fn load(&self, bytes: &[u8]) -> Result<ActivityTable, LoadError>;
}

pub fn load(bytes: &[u8], format: FileFormat) -> Result<ActivityTable, LoadError> {
    match format {
        FileFormat::Csv => delimited::CsvLoader.load(bytes),
        FileFormat::Workbook => workbook::WorkbookLoader.load(bytes),
    }
}

pub fn load_path(path: &Path) -> Result<ActivityTable, LoadError> {
    let format = FileFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.display().to_string()))?;

    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let table = load(&bytes, format)?;

    tracing::info!(
        "Loaded {} activities from {} ({:?})",
        table.len(),
        path.display(),
        format
    );

    Ok(table)
}

/// A single spreadsheet cell, independent of the file format it came from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Cell<'a> {
    Empty,
    Text(&'a str),
    Number(f64),
    DateTime(NaiveDateTime),
}

impl Cell<'_> {
    fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnMap {
    name: usize,
    activity_type: usize,
    start_date: usize,
    distance: usize,
    moving_time: usize,
    elevation: usize,
}

impl ColumnMap {
    pub(crate) fn from_headers<'a, I>(headers: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| *header == column)
                .ok_or(LoadError::MissingColumn(column))
        };

        Ok(Self {
            name: find(COL_NAME)?,
            activity_type: find(COL_TYPE)?,
            start_date: find(COL_START_DATE)?,
            distance: find(COL_DISTANCE)?,
            moving_time: find(COL_MOVING_TIME)?,
            elevation: find(COL_ELEVATION)?,
        })
    }

    /// Builds a record from one data row. Blank rows yield `None`.
    pub(crate) fn record(&self, row: usize, cells: &[Cell<'_>]) -> Option<ActivityRecord> {
        if cells.iter().all(Cell::is_blank) {
            return None;
        }
        let cell = |idx: usize| cells.get(idx).copied().unwrap_or(Cell::Empty);

        Some(ActivityRecord {
            row,
            name: coerce::text(cell(self.name)),
            activity_type: ActivityType::parse(&coerce::text(cell(self.activity_type))),
            start_date: coerce::date(cell(self.start_date)),
            distance_km: coerce::number(cell(self.distance)),
            moving_time_min: coerce::number(cell(self.moving_time)),
            elevation_gain_m: coerce::number(cell(self.elevation)),
        })
    }
}
