// Trip aggregation and the game-table analyzers
mod analyzer;
mod budget;
mod correlation;
mod error;
mod group_stats;
mod regression;
mod trip_summary;

pub use analyzer::Analyzer;
pub use budget::{BudgetSelection, filter_by_budget, parse_budget};
pub use correlation::{CorrelationAnalyzer, CorrelationMatrix};
pub use error::AnalysisError;
pub use group_stats::{
    BandPoint, GroupKey, GroupRow, GroupStatistics, GroupStatisticsAnalyzer, VariableStats,
};
pub use regression::{Coefficient, LinearRegressionAnalyzer, OlsSummary};
pub use trip_summary::{TripSummary, summarize_trips};
