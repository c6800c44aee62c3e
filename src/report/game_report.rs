use itertools::Itertools;
use tabled::{Table, builder::Builder, settings::Style};

use crate::analysis::{GroupStatistics, OlsSummary};
use crate::models::DataTable;
use crate::utils::format_optional;

/// Header plus the first rows of the loaded table.
pub fn preview_table(table: &DataTable) -> Table {
    let mut builder = Builder::default();
    builder.push_record(table.columns().iter().cloned());
    for row in table.rows() {
        builder.push_record(row.iter().map(|cell| cell.to_string()));
    }
    let mut preview = builder.build();
    preview.with(Style::psql());
    preview
}

fn stat(value: f64, decimals: usize) -> String {
    format_optional(Some(value), decimals)
}

/// Fit statistics followed by the coefficient table.
pub fn ols_summary_table(summary: &OlsSummary) -> String {
    let mut header = Builder::default();
    header.push_record(["Dep. Variable:".to_string(), summary.dependent.clone()]);
    header.push_record(["Model:".to_string(), "OLS".to_string()]);
    header.push_record(["No. Observations:".to_string(), summary.observations.to_string()]);
    header.push_record(["Df Model:".to_string(), summary.df_model.to_string()]);
    header.push_record(["Df Residuals:".to_string(), summary.df_resid.to_string()]);
    header.push_record(["R-squared:".to_string(), stat(summary.r_squared, 3)]);
    header.push_record(["Adj. R-squared:".to_string(), stat(summary.adj_r_squared, 3)]);
    header.push_record(["F-statistic:".to_string(), stat(summary.f_statistic, 2)]);
    header.push_record(["Prob (F-statistic):".to_string(), format!("{:.3e}", summary.f_p_value)]);
    let mut header = header.build();
    header.with(Style::blank());

    let mut coefs = Builder::default();
    coefs.push_record(["", "coef", "std err", "t", "P>|t|", "[0.025", "0.975]"].map(String::from));
    for c in &summary.coefficients {
        coefs.push_record([
            c.name.clone(),
            stat(c.estimate, 4),
            stat(c.std_error, 3),
            stat(c.t_value, 3),
            stat(c.p_value, 3),
            stat(c.conf_low, 3),
            stat(c.conf_high, 3),
        ]);
    }
    let mut coefs = coefs.build();
    coefs.with(Style::ascii());

    let mut text = format!("{header}\n{coefs}");
    if summary.dropped_rows > 0 {
        text.push_str(&format!(
            "\nNote: {} incomplete rows were dropped.",
            summary.dropped_rows
        ));
    }
    text
}

/// One row per group, a mean and std column per variable.
pub fn group_stats_table(stats: &GroupStatistics) -> Table {
    let mut builder = Builder::default();
    let header = std::iter::once(stats.group_col.clone()).chain(
        stats
            .variables
            .iter()
            .flat_map(|v| [format!("{v} mean"), format!("{v} std")]),
    );
    builder.push_record(header);
    for group in &stats.groups {
        let cells = std::iter::once(group.key.to_string()).chain(
            group
                .stats
                .iter()
                .flat_map(|s| [format_optional(s.mean, 4), format_optional(s.std, 4)]),
        );
        builder.push_record(cells);
    }
    let mut table = builder.build();
    table.with(Style::psql());
    table
}

/// Comma-separated list for log lines.
pub(crate) fn join_names(names: &[&str]) -> String {
    names.iter().join(", ")
}
