use std::io::Write;

use anyhow::{Context, Result};
use log::{error, info};
use serde::Serialize;

use crate::GameCli;
use crate::analysis::{
    Analyzer, CorrelationAnalyzer, CorrelationMatrix, GroupStatistics, GroupStatisticsAnalyzer,
    LinearRegressionAnalyzer, OlsSummary,
};
use crate::config::GAME;
use crate::data::{GameDataLoader, SpreadsheetSource};
use crate::models::DataTable;
use crate::plot::{CorrelationHeatmap, MeanStdChart, TextPlot};
use crate::report::{Reporter, group_stats_table, join_names, ols_summary_table, preview_table};

#[derive(Debug, Clone, PartialEq)]
pub enum GameOutcome {
    Completed,
    LoadFailed,
}

/// Everything the three analyzers produced, for `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameAnalysisReport {
    pub ols: OlsSummary,
    pub correlation: CorrelationMatrix,
    pub group_stats: GroupStatistics,
}

/// Loads the table, then hands it to [`analyze_table`]. A failed load is reported and ends the run.
pub fn run_game_analysis<S: SpreadsheetSource>(
    cli: &GameCli,
    source: S,
    out: &mut impl Write,
) -> Result<GameOutcome> {
    let loader = GameDataLoader::with_source(cli.source.clone(), source);
    writeln!(out, "Loading data from: {}", loader.location())?;

    let table = match loader.load() {
        Ok(table) => table,
        Err(e) => {
            error!("Data load failed: {e}");
            writeln!(out, "Error loading data: {e}")?;
            writeln!(out, "Program terminated due to data loading failure.")?;
            return Ok(GameOutcome::LoadFailed);
        }
    };
    writeln!(out, "Data loaded successfully.\n")?;

    analyze_table(cli, &table, out)?;
    Ok(GameOutcome::Completed)
}

/// Preview, regression, correlation and grouped statistics over an already loaded table.
pub fn analyze_table(
    cli: &GameCli,
    table: &DataTable,
    out: &mut impl Write,
) -> Result<GameAnalysisReport> {
    let mut reporter = Reporter::new();
    reporter.add_timestamp();
    reporter.add_block(preview_table(&table.head(GAME.preview_rows)));
    reporter.add_blank();

    let independent: Vec<&str> = cli.independent.iter().map(String::as_str).collect();
    info!(
        "Regressing {} on {}",
        cli.dependent,
        join_names(&independent)
    );
    let ols = LinearRegressionAnalyzer::new(table)
        .run_ols(&cli.dependent, &independent)
        .with_context(|| format!("OLS regression of '{}' failed", cli.dependent))?;
    reporter.add_line("OLS REGRESSION RESULTS:");
    reporter.add_blank();
    reporter.add_block(ols_summary_table(&ols));

    let correlation = CorrelationAnalyzer::new(table)
        .compute_matrix()
        .context("Correlation analysis failed")?;
    if cli.plots() {
        reporter.add_blank();
        reporter.add_block(CorrelationHeatmap::new(&correlation).render());
    }

    let group_stats = GroupStatisticsAnalyzer::new(table)
        .compute_stats(&cli.group_by)
        .with_context(|| format!("Grouping by '{}' failed", cli.group_by))?;
    reporter.add_blank();
    reporter.add_line("Grouped Descriptive Statistics:");
    reporter.add_blank();
    reporter.add_block(group_stats_table(&group_stats));

    if cli.plots() {
        let band = group_stats
            .band(&cli.plot_variable)
            .with_context(|| format!("Cannot plot '{}'", cli.plot_variable))?;
        reporter.add_blank();
        reporter.add_block(MeanStdChart::new(&cli.group_by, &cli.plot_variable, &band).render());
    }

    let report = GameAnalysisReport {
        ols,
        correlation,
        group_stats,
    };
    if cli.json {
        reporter.add_blank();
        reporter.add_block(serde_json::to_string_pretty(&report).context("Failed to encode JSON")?);
    }

    reporter.flush_to(out).context("Failed to write report")?;
    Ok(report)
}
