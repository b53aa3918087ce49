use crate::error::LoadError;
use crate::pipeline::load::{Cell, ColumnMap, Loader};
use crate::types::activity::{ActivityTable, FileFormat};

pub struct CsvLoader;

impl Loader for CsvLoader {
    fn load(&self, bytes: &[u8]) -> Result<ActivityTable, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| LoadError::InvalidCsv(e.to_string()))?
            .clone();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(LoadError::EmptyFile);
        }
        let columns = ColumnMap::from_headers(headers.iter())?;

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result.map_err(|e| LoadError::InvalidCsv(e.to_string()))?;
            let cells: Vec<Cell<'_>> = record
                .iter()
                .map(|value| {
                    if value.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(value)
                    }
                })
                .collect();
            if let Some(activity) = columns.record(row, &cells) {
                records.push(activity);
            }
        }

        Ok(ActivityTable {
            records,
            file_format: FileFormat::Csv,
        })
    }
}
