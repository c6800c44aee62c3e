//! Console report layout.

pub struct ReportConfig {
    /// Width of the `#`, `=` and `-` rules between report sections
    pub rule_width: usize,
    pub currency_symbol: &'static str,
    /// Width of the bar in the mean ± std chart
    pub chart_width: usize,
    pub timestamp_format: &'static str,
}

pub const REPORT: ReportConfig = ReportConfig {
    rule_width: 60,
    currency_symbol: "€",
    chart_width: 40,
    timestamp_format: "%Y-%m-%d %H:%M:%S",
};
