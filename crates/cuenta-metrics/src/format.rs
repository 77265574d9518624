//! Display formatting for metric values and deltas.

use crate::metric::{DeltaKind, ValueFormat};

/// Text shown for a null value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format `value` with two decimals.
pub fn format_decimal(value: f64) -> String {
    format!("{value:.2}")
}

/// Format a fraction as a percentage with two decimals (`0.1234` -> `12.34%`).
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Scale a large number with a `T`/`B`/`M`/`K` suffix and two decimals.
///
/// Values below one thousand in magnitude keep two decimals and no suffix.
///
/// # Examples
///
/// ```
/// use cuenta_metrics::format::format_large_number;
///
/// assert_eq!(format_large_number(3.4e12), "3.40T");
/// assert_eq!(format_large_number(-2_500_000.0), "-2.50M");
/// assert_eq!(format_large_number(512.0), "512.00");
/// ```
pub fn format_large_number(value: f64) -> String {
    const SCALES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    let magnitude = value.abs();
    for (scale, suffix) in SCALES {
        if magnitude >= scale {
            return format!("{:.2}{suffix}", value / scale);
        }
    }
    format!("{value:.2}")
}

/// Format an optional value in the given display mode, `N/A` when null.
pub fn format_value(value: Option<f64>, format: ValueFormat, suffix: &str) -> String {
    match value {
        Some(v) => {
            let body = match format {
                ValueFormat::Decimal => format_decimal(v),
                ValueFormat::Percent => format_percent(v),
                ValueFormat::LargeNumber => format_large_number(v),
            };
            format!("{body}{suffix}")
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a delta with an explicit sign.
///
/// Percent deltas are fractions and print as percentages; absolute deltas
/// print with two decimals.
pub fn format_delta(delta: f64, kind: DeltaKind) -> String {
    match kind {
        DeltaKind::Percent => format!("{:+.2}%", delta * 100.0),
        DeltaKind::Absolute => format!("{delta:+.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal_and_percent() {
        assert_eq!(format_decimal(1.2345), "1.23");
        assert_eq!(format_percent(0.2), "20.00%");
        assert_eq!(format_percent(-0.18181818), "-18.18%");
    }

    #[test]
    fn test_format_large_number_scales() {
        assert_eq!(format_large_number(2.0e12), "2.00T");
        assert_eq!(format_large_number(1.5e9), "1.50B");
        assert_eq!(format_large_number(300.0e6), "300.00M");
        assert_eq!(format_large_number(1_000.0), "1.00K");
        assert_eq!(format_large_number(999.0), "999.00");
        assert_eq!(format_large_number(-9.447e9), "-9.45B");
    }

    #[test]
    fn test_format_value_null_is_not_available() {
        assert_eq!(format_value(None, ValueFormat::Percent, ""), "N/A");
        assert_eq!(format_value(None, ValueFormat::LargeNumber, " USD"), "N/A");
    }

    #[test]
    fn test_format_value_with_suffix() {
        assert_eq!(
            format_value(Some(3.1e12), ValueFormat::LargeNumber, " USD"),
            "3.10T USD"
        );
        assert_eq!(format_value(Some(24.456), ValueFormat::Decimal, ""), "24.46");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(0.05, DeltaKind::Percent), "+5.00%");
        assert_eq!(format_delta(-0.1234, DeltaKind::Absolute), "-0.12");
    }
}
