use crate::models::DataTable;

/// Shared access to the loaded table for every game analyzer.
pub trait Analyzer<'a> {
    fn new(table: &'a DataTable) -> Self
    where
        Self: Sized;

    fn table(&self) -> &'a DataTable;
}
