//! Terminal renderings of the analyzer results.
mod band_chart;
mod heatmap;

pub use band_chart::MeanStdChart;
pub use heatmap::CorrelationHeatmap;

/// Something that draws itself as lines of terminal text.
pub trait TextPlot {
    fn title(&self) -> String;
    fn render(&self) -> String;
}
