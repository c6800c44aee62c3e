//! Configuration module for the lab analytics binaries.

// Can all be private now because we have a public re-export.
mod game;
mod inventory;
mod report;
mod transport;

// Re-export commonly used items
pub use game::{GAME, GameAnalysisConfig};
pub use inventory::{INVENTORY, InventoryConfig, InventoryEntry, PlaceRef};
pub use report::{REPORT, ReportConfig};
pub use transport::{TRANSPORT, TransportPreset, TransportPresets};
