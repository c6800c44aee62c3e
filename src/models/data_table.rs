//! In-memory table of named columns, as loaded from a spreadsheet.
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("column '{0}' not found")]
    UnknownColumn(String),
    #[error("column '{0}' is not numeric")]
    NonNumericColumn(String),
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            // Whole numbers print without a trailing ".0"
            Self::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Empty => f.write_str("NaN"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, TableError> {
        for (i, name) in columns.iter().enumerate() {
            if columns[..i].contains(name) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != columns.len())
        {
            return Err(TableError::RaggedRow {
                row,
                expected: columns.len(),
                found: cells.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    pub fn column(&self, name: &str) -> Result<Vec<&Cell>, TableError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Numeric means at least one number and nothing but numbers or blanks.
    fn is_numeric_at(&self, idx: usize) -> bool {
        let mut seen_number = false;
        for row in &self.rows {
            match &row[idx] {
                Cell::Number(_) => seen_number = true,
                Cell::Empty => {}
                Cell::Text(_) => return false,
            }
        }
        seen_number
    }

    pub fn is_numeric(&self, name: &str) -> Result<bool, TableError> {
        Ok(self.is_numeric_at(self.column_index(name)?))
    }

    /// Names of the numeric columns, in table order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        (0..self.columns.len())
            .filter(|&idx| self.is_numeric_at(idx))
            .map(|idx| self.columns[idx].as_str())
            .collect()
    }

    /// Numeric view of a column. Blanks come back as `None`.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>, TableError> {
        let idx = self.column_index(name)?;
        if !self.is_numeric_at(idx) {
            return Err(TableError::NonNumericColumn(name.to_string()));
        }
        Ok(self.rows.iter().map(|row| row[idx].as_number()).collect())
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> DataTable {
        DataTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}
