// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod plot;
pub mod report;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and tests)
pub use app::{GameOutcome, SessionOutcome, TravelSession, run_game_analysis};
pub use data::{DefaultSource, GameDataLoader};
pub use domain::{EcoTrip, Place, TransportKind, TransportMode, Trip};
pub use models::DataTable;

// CLI argument parsing
use clap::Parser;

use crate::config::GAME;

/// Trip metrics and an interactive budget search over the trip inventory.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct TravelCli {}

/// Regression, correlation and grouped statistics over the game-turn spreadsheet.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct GameCli {
    /// URL or local path of the xlsx workbook (first worksheet is read)
    #[arg(long, default_value_t = GAME.data_url.to_string())]
    pub source: String,

    /// Column explained by the regression
    #[arg(long, default_value_t = GAME.dependent_var.to_string())]
    pub dependent: String,

    /// Comma-separated regressor columns
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = GAME.independent_vars.iter().map(|v| v.to_string()).collect::<Vec<_>>()
    )]
    pub independent: Vec<String>,

    /// Column whose values define the groups
    #[arg(long, default_value_t = GAME.group_col.to_string())]
    pub group_by: String,

    /// Variable drawn in the mean ± std chart
    #[arg(long, default_value_t = GAME.plot_variable.to_string())]
    pub plot_variable: String,

    /// Skip the heatmap and the mean ± std chart
    #[arg(long, default_value_t = false)]
    pub no_plots: bool,

    /// Also print all results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl GameCli {
    pub fn plots(&self) -> bool {
        !self.no_plots
    }
}
