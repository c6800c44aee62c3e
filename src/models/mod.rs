mod data_table;
mod inventory;
mod trip_rows;

pub use data_table::{Cell, DataTable, TableError};
pub use inventory::Inventory;
pub use trip_rows::{BookingRow, TripRow};
