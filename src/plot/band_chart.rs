use tabled::{builder::Builder, settings::Style};

use super::TextPlot;
use crate::analysis::BandPoint;
use crate::config::REPORT;
use crate::utils::{format_optional, remap};

/// "Mean ± 1 std" per group, drawn as a horizontal band with the mean marked.
pub struct MeanStdChart<'a> {
    group_col: &'a str,
    variable: &'a str,
    points: &'a [BandPoint],
    width: usize,
}

impl<'a> MeanStdChart<'a> {
    pub fn new(group_col: &'a str, variable: &'a str, points: &'a [BandPoint]) -> Self {
        Self {
            group_col,
            variable,
            points,
            width: REPORT.chart_width,
        }
    }

    /// Horizontal extent shared by every row.
    fn bounds(&self) -> Option<(f64, f64)> {
        let values = self.points.iter().flat_map(|p| [p.mean, p.lower(), p.upper()]).flatten();
        values.fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    fn column(&self, value: f64, (lo, hi): (f64, f64)) -> usize {
        let last = self.width.saturating_sub(1) as f64;
        remap(value, lo, hi, 0.0, last).round().clamp(0.0, last) as usize
    }

    fn bar(&self, point: &BandPoint, bounds: Option<(f64, f64)>) -> String {
        let (Some(bounds), Some(mean)) = (bounds, point.mean) else {
            return String::new();
        };
        let mut cells = vec!['·'; self.width];
        if let (Some(lower), Some(upper)) = (point.lower(), point.upper()) {
            let (from, to) = (self.column(lower, bounds), self.column(upper, bounds));
            cells[from..=to].iter_mut().for_each(|c| *c = '░');
        }
        cells[self.column(mean, bounds)] = '●';
        cells.into_iter().collect()
    }
}

impl TextPlot for MeanStdChart<'_> {
    fn title(&self) -> String {
        format!("{} by {}", self.variable, self.group_col)
    }

    fn render(&self) -> String {
        let bounds = self.bounds();

        let mut builder = Builder::default();
        builder.push_record([
            self.group_col.to_string(),
            "mean".to_string(),
            "std".to_string(),
            "● mean, ░ ±1 std".to_string(),
        ]);
        for point in self.points {
            builder.push_record([
                point.key.to_string(),
                format_optional(point.mean, 2),
                format_optional(point.std, 2),
                self.bar(point, bounds),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());

        let scale = match bounds {
            Some((lo, hi)) => format!("scale: {lo:.2} .. {hi:.2}"),
            None => "scale: n/a".to_string(),
        };
        format!("{}\n{table}\n{scale}\n", self.title())
    }
}
