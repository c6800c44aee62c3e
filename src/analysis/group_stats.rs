//! Per-group mean and standard deviation, grouped by the values of one column.
use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::info;
use serde::Serialize;
use statrs::statistics::Statistics;

use super::{AnalysisError, Analyzer};
use crate::models::{Cell, DataTable};

/// Group label. Numbers sort numerically and come before text.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Number(f64),
    Text(String),
}

impl GroupKey {
    fn from_cell(cell: &Cell) -> Option<Self> {
        match cell {
            // -0.0 and 0.0 share a group
            Cell::Number(v) if *v == 0.0 => Some(Self::Number(0.0)),
            Cell::Number(v) if !v.is_nan() => Some(Self::Number(*v)),
            Cell::Text(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", Cell::Number(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableStats {
    /// Non-blank values in the group
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample std (n - 1). Absent below two values.
    pub std: Option<f64>,
}

impl VariableStats {
    fn from_values(values: &[f64]) -> Self {
        Self {
            count: values.len(),
            mean: (!values.is_empty()).then(|| values.iter().mean()),
            std: (values.len() > 1).then(|| values.iter().std_dev()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    pub key: GroupKey,
    pub rows: usize,
    /// One entry per variable, same order as `GroupStatistics::variables`
    pub stats: Vec<VariableStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStatistics {
    pub group_col: String,
    pub variables: Vec<String>,
    pub groups: Vec<GroupRow>,
}

/// One point of the mean ± 1 std band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandPoint {
    pub key: GroupKey,
    pub mean: Option<f64>,
    pub std: Option<f64>,
}

impl BandPoint {
    pub fn lower(&self) -> Option<f64> {
        Some(self.mean? - self.std?)
    }

    pub fn upper(&self) -> Option<f64> {
        Some(self.mean? + self.std?)
    }
}

impl GroupStatistics {
    pub fn stats_for(&self, key: &GroupKey, variable: &str) -> Option<&VariableStats> {
        let var_idx = self.variables.iter().position(|v| v == variable)?;
        self.groups
            .iter()
            .find(|g| &g.key == key)
            .map(|g| &g.stats[var_idx])
    }

    /// Series of (group, mean, std) for one variable, ready to plot.
    pub fn band(&self, variable: &str) -> Result<Vec<BandPoint>, AnalysisError> {
        let var_idx = self
            .variables
            .iter()
            .position(|v| v == variable)
            .ok_or_else(|| AnalysisError::UnknownVariable(variable.to_string()))?;
        Ok(self
            .groups
            .iter()
            .map(|g| BandPoint {
                key: g.key.clone(),
                mean: g.stats[var_idx].mean,
                std: g.stats[var_idx].std,
            })
            .collect())
    }
}

pub struct GroupStatisticsAnalyzer<'a> {
    table: &'a DataTable,
}

impl<'a> Analyzer<'a> for GroupStatisticsAnalyzer<'a> {
    fn new(table: &'a DataTable) -> Self {
        Self { table }
    }

    fn table(&self) -> &'a DataTable {
        self.table
    }
}

impl GroupStatisticsAnalyzer<'_> {
    /// Mean and std of every numeric column except `group_col`, per distinct `group_col` value.
    /// Rows with a blank group value are left out.
    pub fn compute_stats(&self, group_col: &str) -> Result<GroupStatistics, AnalysisError> {
        let keys = self.table().column(group_col)?;

        let variables: Vec<String> = self
            .table()
            .numeric_columns()
            .into_iter()
            .filter(|name| *name != group_col)
            .map(str::to_string)
            .collect();
        let data = variables
            .iter()
            .map(|name| self.table().numeric_column(name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut buckets: BTreeMap<GroupKey, Vec<usize>> = BTreeMap::new();
        for (row, cell) in keys.iter().enumerate() {
            if let Some(key) = GroupKey::from_cell(cell) {
                buckets.entry(key).or_default().push(row);
            }
        }

        let groups: Vec<GroupRow> = buckets
            .into_iter()
            .map(|(key, rows)| {
                let stats = data
                    .iter()
                    .map(|column| {
                        let values: Vec<f64> = rows.iter().filter_map(|&r| column[r]).collect();
                        VariableStats::from_values(&values)
                    })
                    .collect();
                GroupRow {
                    key,
                    rows: rows.len(),
                    stats,
                }
            })
            .collect();

        info!(
            "Grouped {} rows by '{group_col}' into {} groups over {} variables",
            self.table().n_rows(),
            groups.len(),
            variables.len()
        );

        Ok(GroupStatistics {
            group_col: group_col.to_string(),
            variables,
            groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: f64) -> Cell {
        Cell::Number(v)
    }

    fn turns() -> DataTable {
        DataTable::new(
            vec!["round".into(), "team".into(), "followers".into()],
            vec![
                vec![num(2.0), Cell::Text("red".into()), num(10.0)],
                vec![num(1.0), Cell::Text("red".into()), num(4.0)],
                vec![num(2.0), Cell::Text("blue".into()), num(14.0)],
                vec![num(1.0), Cell::Text("blue".into()), num(6.0)],
                vec![num(10.0), Cell::Text("red".into()), num(7.0)],
                vec![Cell::Empty, Cell::Text("blue".into()), num(99.0)],
                vec![num(2.0), Cell::Text("red".into()), Cell::Empty],
            ],
        )
        .unwrap()
    }

    #[test]
    fn groups_sort_numerically() {
        let stats = GroupStatisticsAnalyzer::new(&turns())
            .compute_stats("round")
            .unwrap();
        let keys: Vec<String> = stats.groups.iter().map(|g| g.key.to_string()).collect();
        assert_eq!(keys, vec!["1", "2", "10"]);
        assert_eq!(stats.variables, vec!["followers"]);
    }

    #[test]
    fn computes_mean_and_sample_std() {
        let stats = GroupStatisticsAnalyzer::new(&turns())
            .compute_stats("round")
            .unwrap();
        let round_two = stats.stats_for(&GroupKey::Number(2.0), "followers").unwrap();
        assert_eq!(round_two.count, 2);
        assert_eq!(round_two.mean, Some(12.0));
        assert!((round_two.std.unwrap() - 8.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.groups[1].rows, 3);
    }

    #[test]
    fn single_value_group_has_no_std() {
        let stats = GroupStatisticsAnalyzer::new(&turns())
            .compute_stats("round")
            .unwrap();
        let round_ten = stats.stats_for(&GroupKey::Number(10.0), "followers").unwrap();
        assert_eq!(round_ten.mean, Some(7.0));
        assert_eq!(round_ten.std, None);
    }

    #[test]
    fn groups_by_text_column() {
        let stats = GroupStatisticsAnalyzer::new(&turns())
            .compute_stats("team")
            .unwrap();
        assert_eq!(stats.variables, vec!["round", "followers"]);
        let blue = stats.stats_for(&GroupKey::Text("blue".into()), "followers").unwrap();
        assert_eq!(blue.count, 3);
        assert!((blue.mean.unwrap() - 119.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn band_exposes_mean_plus_minus_std() {
        let stats = GroupStatisticsAnalyzer::new(&turns())
            .compute_stats("round")
            .unwrap();
        let band = stats.band("followers").unwrap();
        assert_eq!(band.len(), 3);
        assert_eq!(band[0].mean, Some(5.0));
        assert!((band[0].lower().unwrap() - (5.0 - 2.0_f64.sqrt())).abs() < 1e-12);
        assert_eq!(band[2].upper(), None);
        assert_eq!(
            stats.band("nope"),
            Err(AnalysisError::UnknownVariable("nope".into()))
        );
    }

    #[test]
    fn signed_zero_keys_form_one_group() {
        let data = DataTable::new(
            vec!["delta".into(), "score".into()],
            vec![
                vec![num(-0.0), num(3.0)],
                vec![num(0.0), num(5.0)],
                vec![num(1.0), num(8.0)],
            ],
        )
        .unwrap();
        let stats = GroupStatisticsAnalyzer::new(&data)
            .compute_stats("delta")
            .unwrap();

        assert_eq!(stats.groups.len(), 2);
        assert_eq!(stats.groups[0].key.to_string(), "0");
        assert_eq!(stats.groups[0].rows, 2);
        let zero = stats.stats_for(&GroupKey::Number(0.0), "score").unwrap();
        assert_eq!(zero.mean, Some(4.0));
    }

    #[test]
    fn unknown_group_column_fails() {
        assert!(GroupStatisticsAnalyzer::new(&turns()).compute_stats("nope").is_err());
    }
}
