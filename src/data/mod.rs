mod error;
mod loader;
mod source;

pub use error::LoadError;
pub use loader::{GameDataLoader, table_from_range};
pub use source::{DefaultSource, SpreadsheetSource};
