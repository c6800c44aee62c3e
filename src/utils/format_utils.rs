use itertools::Itertools;

use crate::config::REPORT;

/// Formats with `,` thousands separators and a fixed number of decimals, e.g. `12,345.60`.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .join(",");

    let sign = if value < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Money as shown in every report, e.g. `€1,600.00`.
pub fn format_currency(value: f64) -> String {
    format!("{}{}", REPORT.currency_symbol, format_thousands(value, 2))
}

/// Renders a missing statistic the way pandas prints it.
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*}", decimals, v),
        _ => "NaN".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(3900.0, 2), "3,900.00");
        assert_eq!(format_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_thousands(999.0, 0), "999");
        assert_eq!(format_thousands(-12500.5, 1), "-12,500.5");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(format_thousands(-0.001, 2), "0.00");
    }

    #[test]
    fn currency_uses_euro_symbol() {
        assert_eq!(format_currency(1600.0), "€1,600.00");
    }

    #[test]
    fn missing_values_print_as_nan() {
        assert_eq!(format_optional(None, 2), "NaN");
        assert_eq!(format_optional(Some(f64::NAN), 2), "NaN");
        assert_eq!(format_optional(Some(1.234), 2), "1.23");
    }
}
