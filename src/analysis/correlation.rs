use log::info;
use serde::Serialize;
use statrs::statistics::Statistics;

use super::{AnalysisError, Analyzer};
use crate::models::DataTable;

/// Pearson correlations between numeric columns. `None` where undefined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Result<Option<f64>, AnalysisError> {
        let idx = |name: &str| {
            self.columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| AnalysisError::UnknownVariable(name.to_string()))
        };
        Ok(self.values[idx(a)?][idx(b)?])
    }
}

/// Pearson r over the rows where both values are present.
fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .unzip();
    if xs.len() < 2 {
        return None;
    }

    let sd_x = xs.iter().std_dev();
    let sd_y = ys.iter().std_dev();
    if sd_x == 0.0 || sd_y == 0.0 {
        return None;
    }
    let cov = xs.iter().covariance(ys.iter());
    Some((cov / (sd_x * sd_y)).clamp(-1.0, 1.0))
}

pub struct CorrelationAnalyzer<'a> {
    table: &'a DataTable,
}

impl<'a> Analyzer<'a> for CorrelationAnalyzer<'a> {
    fn new(table: &'a DataTable) -> Self {
        Self { table }
    }

    fn table(&self) -> &'a DataTable {
        self.table
    }
}

impl CorrelationAnalyzer<'_> {
    /// Pairwise matrix over every numeric column, in table order.
    pub fn compute_matrix(&self) -> Result<CorrelationMatrix, AnalysisError> {
        let columns: Vec<String> = self
            .table()
            .numeric_columns()
            .into_iter()
            .map(str::to_string)
            .collect();
        let data = columns
            .iter()
            .map(|name| self.table().numeric_column(name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut values = vec![vec![None; columns.len()]; columns.len()];
        for i in 0..columns.len() {
            for j in i..columns.len() {
                let r = if i == j {
                    pearson(&data[i], &data[j]).map(|_| 1.0)
                } else {
                    pearson(&data[i], &data[j])
                };
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        info!("Correlation matrix over {} numeric columns", columns.len());
        Ok(CorrelationMatrix { columns, values })
    }
}
