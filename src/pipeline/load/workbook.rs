use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};

use crate::error::LoadError;
use crate::pipeline::load::{Cell, ColumnMap, Loader};
use crate::types::activity::{ActivityTable, FileFormat};

/// Reads the first worksheet of an Excel or OpenDocument workbook.
pub struct WorkbookLoader;

impl Loader for WorkbookLoader {
    fn load(&self, bytes: &[u8]) -> Result<ActivityTable, LoadError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| LoadError::InvalidWorkbook(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(LoadError::NoWorksheet)?
            .map_err(|e| LoadError::InvalidWorkbook(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = rows.next().ok_or(LoadError::EmptyFile)?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|value| match value {
                Data::String(s) => s.clone(),
                Data::Empty => String::new(),
                other => other.to_string(),
            })
            .collect();
        let columns = ColumnMap::from_headers(headers.iter().map(String::as_str))?;

        let mut records = Vec::new();
        for (row, values) in rows.enumerate() {
            let cells: Vec<Cell<'_>> = values.iter().map(to_cell).collect();
            if let Some(activity) = columns.record(row, &cells) {
                records.push(activity);
            }
        }

        Ok(ActivityTable {
            records,
            file_format: FileFormat::Workbook,
        })
    }
}

fn to_cell(value: &Data) -> Cell<'_> {
    match value {
        Data::Empty => Cell::Empty,
        Data::String(s) | Data::DateTimeIso(s) => Cell::Text(s),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::DateTime(_) => value
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or(Cell::Empty),
        _ => Cell::Empty,
    }
}
