//! End-to-end flows behind the two binaries, generic over their I/O so tests can drive them.
mod game;
mod travel;

pub use game::{GameAnalysisReport, GameOutcome, analyze_table, run_game_analysis};
pub use travel::{SessionOutcome, TravelSession};
