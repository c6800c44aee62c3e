use colorgrad::Gradient;
use itertools::Itertools;

use super::TextPlot;
use crate::analysis::CorrelationMatrix;
use crate::utils::{format_optional, remap};

const CELL_WIDTH: usize = 7;

/// Annotated correlation heatmap on a diverging blue (-1) to red (+1) scale.
pub struct CorrelationHeatmap<'a> {
    matrix: &'a CorrelationMatrix,
    colored: bool,
}

impl<'a> CorrelationHeatmap<'a> {
    pub fn new(matrix: &'a CorrelationMatrix) -> Self {
        Self {
            matrix,
            colored: true,
        }
    }

    /// Plain text without ANSI colour codes.
    pub fn plain(mut self) -> Self {
        self.colored = false;
        self
    }

    fn paint(&self, text: &str, value: Option<f64>) -> String {
        let Some(r) = value.filter(|_| self.colored) else {
            return text.to_string();
        };
        // rd_bu runs red -> blue, so +1 maps to 0
        let t = remap(r.clamp(-1.0, 1.0), -1.0, 1.0, 1.0, 0.0) as f32;
        let [red, green, blue, _] = colorgrad::preset::rd_bu().at(t).to_rgba8();
        format!("\x1b[48;2;{red};{green};{blue}m\x1b[30m{text}\x1b[0m")
    }
}

impl TextPlot for CorrelationHeatmap<'_> {
    fn title(&self) -> String {
        "Correlation Matrix Heatmap".to_string()
    }

    fn render(&self) -> String {
        let label_width = self
            .matrix
            .columns
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0);

        // Column headers are numbered to keep cells narrow, with a legend underneath
        let numbers = (1..=self.matrix.columns.len())
            .map(|i| format!("{:>CELL_WIDTH$}", format!("[{i}]")));
        let header = std::iter::once(format!("{:label_width$}", ""))
            .chain(numbers)
            .join("");

        let body = self
            .matrix
            .columns
            .iter()
            .zip(&self.matrix.values)
            .enumerate()
            .map(|(i, (name, row))| {
                let cells = row
                    .iter()
                    .map(|value| {
                        let text = format!("{:>CELL_WIDTH$}", format_optional(*value, 2));
                        self.paint(&text, *value)
                    })
                    .join("");
                format!("{name:<label_width$}{cells}  [{}]", i + 1)
            })
            .join("\n");

        format!("{}\n{header}\n{body}\n", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CorrelationMatrix {
        CorrelationMatrix {
            columns: vec!["round".into(), "followers".into()],
            values: vec![vec![Some(1.0), Some(-0.5)], vec![Some(-0.5), None]],
        }
    }

    #[test]
    fn plain_render_annotates_two_decimals() {
        let m = matrix();
        let text = CorrelationHeatmap::new(&m).plain().render();
        assert!(text.starts_with("Correlation Matrix Heatmap"));
        assert!(text.contains("   1.00"));
        assert!(text.contains("  -0.50"));
        assert!(text.contains("    NaN"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn colored_render_uses_ansi_backgrounds() {
        let m = matrix();
        let text = CorrelationHeatmap::new(&m).render();
        assert!(text.contains("\x1b[48;2;"));
    }
}
