//! Ordinary least squares with an intercept, summarised like a statistics package would.
use log::{debug, info};
use nalgebra::{DMatrix, DVector};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};
use statrs::statistics::Statistics;

use super::{AnalysisError, Analyzer};
use crate::models::DataTable;

pub const INTERCEPT_NAME: &str = "const";
const CONFIDENCE_LEVEL: f64 = 0.95;
/// An R diagonal at or below this share of its column norm marks a rank-deficient design.
const RANK_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coefficient {
    pub name: String,
    pub estimate: f64,
    pub std_error: f64,
    pub t_value: f64,
    pub p_value: f64,
    pub conf_low: f64,
    pub conf_high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OlsSummary {
    pub dependent: String,
    pub observations: usize,
    /// Rows skipped because one of the model columns was blank
    pub dropped_rows: usize,
    pub df_model: usize,
    pub df_resid: usize,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub f_statistic: f64,
    pub f_p_value: f64,
    pub coefficients: Vec<Coefficient>,
}

impl OlsSummary {
    pub fn coefficient(&self, name: &str) -> Option<&Coefficient> {
        self.coefficients.iter().find(|c| c.name == name)
    }
}

pub struct LinearRegressionAnalyzer<'a> {
    table: &'a DataTable,
}

impl<'a> Analyzer<'a> for LinearRegressionAnalyzer<'a> {
    fn new(table: &'a DataTable) -> Self {
        Self { table }
    }

    fn table(&self) -> &'a DataTable {
        self.table
    }
}

impl LinearRegressionAnalyzer<'_> {
    /// Fits `dependent ~ const + independent...` on the rows where every model column is present.
    pub fn run_ols(
        &self,
        dependent: &str,
        independent: &[&str],
    ) -> Result<OlsSummary, AnalysisError> {
        if independent.is_empty() {
            return Err(AnalysisError::NoRegressors);
        }

        let y_col = self.table().numeric_column(dependent)?;
        let x_cols = independent
            .iter()
            .map(|name| self.table().numeric_column(name))
            .collect::<Result<Vec<_>, _>>()?;

        // Listwise deletion
        let mut y = Vec::with_capacity(y_col.len());
        let mut x: Vec<Vec<f64>> = Vec::with_capacity(y_col.len());
        for (row, target) in y_col.iter().enumerate() {
            let regressors: Option<Vec<f64>> = x_cols.iter().map(|col| col[row]).collect();
            if let (Some(target), Some(regressors)) = (target, regressors) {
                y.push(*target);
                let mut design_row = Vec::with_capacity(regressors.len() + 1);
                design_row.push(1.0);
                design_row.extend(regressors);
                x.push(design_row);
            }
        }

        let n = y.len();
        let k = independent.len() + 1;
        let dropped_rows = y_col.len() - n;
        if dropped_rows > 0 {
            debug!("OLS dropped {dropped_rows} incomplete rows");
        }
        if n <= k {
            return Err(AnalysisError::InsufficientObservations {
                observations: n,
                parameters: k,
            });
        }

        // X = QR, then R beta = Q'y
        let design = DMatrix::from_row_iterator(n, k, x.iter().flatten().copied());
        let target = DVector::from_column_slice(&y);
        let qr = design.clone().qr();
        let r = qr.r();
        if (0..k).any(|j| r[(j, j)].abs() <= RANK_TOLERANCE * design.column(j).norm()) {
            return Err(AnalysisError::SingularMatrix);
        }
        let beta = r
            .solve_upper_triangular(&(qr.q().transpose() * &target))
            .ok_or(AnalysisError::SingularMatrix)?;
        // (X'X)^-1 = R^-1 R^-T
        let r_inv = r.try_inverse().ok_or(AnalysisError::SingularMatrix)?;
        let xtx_inv = &r_inv * r_inv.transpose();

        let ssr = (&target - &design * &beta).norm_squared();
        let sst = y.iter().variance() * (n - 1) as f64;

        let df_model = k - 1;
        let df_resid = n - k;
        let r_squared = 1.0 - ssr / sst;
        let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1) as f64 / df_resid as f64;
        let sigma2 = ssr / df_resid as f64;

        let t_dist = StudentsT::new(0.0, 1.0, df_resid as f64)
            .map_err(|e| AnalysisError::Distribution(e.to_string()))?;
        let t_crit = t_dist.inverse_cdf(0.5 + CONFIDENCE_LEVEL / 2.0);

        let names = std::iter::once(INTERCEPT_NAME).chain(independent.iter().copied());
        let coefficients = names
            .zip(beta.iter())
            .enumerate()
            .map(|(i, (name, &estimate))| {
                let std_error = (sigma2 * xtx_inv[(i, i)]).max(0.0).sqrt();
                let t_value = estimate / std_error;
                let p_value = if t_value.is_finite() {
                    2.0 * (1.0 - t_dist.cdf(t_value.abs()))
                } else if t_value.is_nan() {
                    f64::NAN
                } else {
                    0.0
                };
                Coefficient {
                    name: name.to_string(),
                    estimate,
                    std_error,
                    t_value,
                    p_value,
                    conf_low: estimate - t_crit * std_error,
                    conf_high: estimate + t_crit * std_error,
                }
            })
            .collect();

        let f_statistic = ((sst - ssr) / df_model as f64) / sigma2;
        let f_p_value = if f_statistic.is_finite() {
            let f_dist = FisherSnedecor::new(df_model as f64, df_resid as f64)
                .map_err(|e| AnalysisError::Distribution(e.to_string()))?;
            1.0 - f_dist.cdf(f_statistic.max(0.0))
        } else if f_statistic.is_nan() {
            f64::NAN
        } else {
            0.0
        };

        info!(
            "OLS {dependent} on {} regressors: n={n}, R²={r_squared:.4}",
            independent.len()
        );

        Ok(OlsSummary {
            dependent: dependent.to_string(),
            observations: n,
            dropped_rows,
            df_model,
            df_resid,
            r_squared,
            adj_r_squared,
            f_statistic,
            f_p_value,
            coefficients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, TableError};

    fn table(columns: &[&str], rows: Vec<Vec<f64>>) -> DataTable {
        DataTable::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(Cell::Number).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn recovers_exact_linear_relationship() {
        // y = 2 + 3a - b
        let rows = vec![
            vec![1.0, 0.0, 5.0],
            vec![2.0, 1.0, 7.0],
            vec![3.0, 0.0, 11.0],
            vec![4.0, 2.0, 12.0],
            vec![5.0, 1.0, 16.0],
        ];
        let data = table(&["a", "b", "y"], rows);
        let summary = LinearRegressionAnalyzer::new(&data)
            .run_ols("y", &["a", "b"])
            .unwrap();

        assert!((summary.coefficient("const").unwrap().estimate - 2.0).abs() < 1e-9);
        assert!((summary.coefficient("a").unwrap().estimate - 3.0).abs() < 1e-9);
        assert!((summary.coefficient("b").unwrap().estimate + 1.0).abs() < 1e-9);
        assert!((summary.r_squared - 1.0).abs() < 1e-9);
        assert_eq!(summary.df_model, 2);
        assert_eq!(summary.df_resid, 2);
    }

    #[test]
    fn simple_regression_matches_hand_computation() {
        // x = 1..5, y = 2, 4, 5, 4, 5 -> slope 0.6, intercept 2.2, R² = 0.6
        let rows = vec![
            vec![1.0, 2.0],
            vec![2.0, 4.0],
            vec![3.0, 5.0],
            vec![4.0, 4.0],
            vec![5.0, 5.0],
        ];
        let data = table(&["x", "y"], rows);
        let summary = LinearRegressionAnalyzer::new(&data)
            .run_ols("y", &["x"])
            .unwrap();

        let slope = summary.coefficient("x").unwrap();
        assert!((slope.estimate - 0.6).abs() < 1e-10);
        assert!((summary.coefficient("const").unwrap().estimate - 2.2).abs() < 1e-10);
        assert!((summary.r_squared - 0.6).abs() < 1e-10);
        // SSR = 2.4, sigma² = 0.8, Sxx = 10 -> se = sqrt(0.08)
        assert!((slope.std_error - 0.08_f64.sqrt()).abs() < 1e-10);
        // F = 3.6 / 0.8 with t² = F for a single regressor
        assert!((summary.f_statistic - 4.5).abs() < 1e-9);
        assert!((slope.t_value.powi(2) - summary.f_statistic).abs() < 1e-9);
        assert!((slope.p_value - summary.f_p_value).abs() < 1e-6);
        assert!(slope.conf_low < slope.estimate && slope.estimate < slope.conf_high);
        assert!(slope.p_value > 0.05 && slope.p_value < 0.2);
    }

    #[test]
    fn drops_incomplete_rows() {
        let data = DataTable::new(
            vec!["x".into(), "y".into()],
            vec![
                vec![Cell::Number(1.0), Cell::Number(1.0)],
                vec![Cell::Number(2.0), Cell::Empty],
                vec![Cell::Number(3.0), Cell::Number(3.0)],
                vec![Cell::Empty, Cell::Number(9.0)],
                vec![Cell::Number(4.0), Cell::Number(4.0)],
            ],
        )
        .unwrap();
        let summary = LinearRegressionAnalyzer::new(&data)
            .run_ols("y", &["x"])
            .unwrap();
        assert_eq!(summary.observations, 3);
        assert_eq!(summary.dropped_rows, 2);
    }

    #[test]
    fn rejects_bad_inputs() {
        let data = table(&["x", "z", "y"], vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 5.0]]);
        let analyzer = LinearRegressionAnalyzer::new(&data);

        assert_eq!(analyzer.run_ols("y", &[]), Err(AnalysisError::NoRegressors));
        assert_eq!(
            analyzer.run_ols("y", &["nope"]),
            Err(AnalysisError::Table(TableError::UnknownColumn("nope".into())))
        );
        assert_eq!(
            analyzer.run_ols("y", &["x"]),
            Err(AnalysisError::InsufficientObservations {
                observations: 2,
                parameters: 2
            })
        );
    }

    #[test]
    fn fits_large_magnitude_regressor() {
        // y = 3 + 2x with a ±0.2 wobble, x around 1e5
        let wobble = [0.2, -0.2, 0.1, -0.1, 0.0, 0.2, -0.2, 0.1, -0.1, 0.0];
        let rows = (0..10)
            .map(|i| {
                let x = 100_000.0 + i as f64;
                vec![x, 3.0 + 2.0 * x + wobble[i]]
            })
            .collect();
        let data = table(&["x", "y"], rows);
        let summary = LinearRegressionAnalyzer::new(&data)
            .run_ols("y", &["x"])
            .unwrap();

        let slope = summary.coefficient("x").unwrap();
        assert!((slope.estimate - 2.0).abs() < 0.05);
        assert!(slope.std_error > 0.0 && slope.std_error < 0.1);
        assert!(summary.r_squared > 0.999);
        assert!(summary.f_p_value < 1e-6);
        assert_eq!(summary.observations, 10);
    }

    #[test]
    fn constant_regressor_is_singular() {
        let rows = (1..=5).map(|i| vec![7.0, i as f64]).collect();
        let data = table(&["flat", "y"], rows);
        assert_eq!(
            LinearRegressionAnalyzer::new(&data).run_ols("y", &["flat"]),
            Err(AnalysisError::SingularMatrix)
        );
    }

    #[test]
    fn collinear_regressors_are_singular() {
        let rows = (1..=6)
            .map(|i| {
                let x = i as f64;
                vec![x, 2.0 * x, x * x]
            })
            .collect();
        let data = table(&["x", "x2", "y"], rows);
        assert_eq!(
            LinearRegressionAnalyzer::new(&data).run_ols("y", &["x", "x2"]),
            Err(AnalysisError::SingularMatrix)
        );
    }
}
