use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx, open_workbook_from_rs};
use log::{info, warn};

use super::{DefaultSource, LoadError, SpreadsheetSource};
use crate::models::{Cell, DataTable};

/// Loads the first worksheet of an xlsx workbook into a [`DataTable`].
pub struct GameDataLoader<S = DefaultSource> {
    location: String,
    source: S,
}

impl GameDataLoader<DefaultSource> {
    pub fn new(location: impl Into<String>) -> Self {
        Self::with_source(location, DefaultSource)
    }
}

impl<S: SpreadsheetSource> GameDataLoader<S> {
    pub fn with_source(location: impl Into<String>, source: S) -> Self {
        Self {
            location: location.into(),
            source,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn load(&self) -> Result<DataTable, LoadError> {
        info!("Loading spreadsheet from {}", self.location);
        let bytes = self.source.fetch(&self.location)?;

        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(LoadError::NoWorksheet)??;

        let table = table_from_range(&range)?;
        info!(
            "Loaded {} rows x {} columns",
            table.n_rows(),
            table.columns().len()
        );
        Ok(table)
    }
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Float(v) => Cell::Number(*v),
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Empty | Data::Error(_) => Cell::Empty,
        other => Cell::Text(other.to_string()),
    }
}

/// Header names from the first row. Blank names become `column_N`,
/// repeated names get a `.1`, `.2` suffix.
fn header_names(header: &[Data]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(header.len());
    for (idx, data) in header.iter().enumerate() {
        let raw = data.to_string();
        let base = match raw.trim() {
            "" => format!("column_{}", idx + 1),
            name => name.to_string(),
        };
        let mut name = base.clone();
        let mut suffix = 1;
        while names.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        names.push(name);
    }
    names
}

/// First row is the header, the rest are records. Fully blank rows are skipped.
pub fn table_from_range(range: &Range<Data>) -> Result<DataTable, LoadError> {
    let mut rows = range.rows();
    let header = rows.next().ok_or(LoadError::MissingHeader)?;
    let columns = header_names(header);

    let mut skipped = 0;
    let records: Vec<Vec<Cell>> = rows
        .filter_map(|row| {
            let cells: Vec<Cell> = row.iter().map(to_cell).collect();
            if cells.iter().all(Cell::is_empty) {
                skipped += 1;
                None
            } else {
                Some(cells)
            }
        })
        .collect();
    if skipped > 0 {
        warn!("Skipped {skipped} blank rows");
    }

    Ok(DataTable::new(columns, records)?)
}
