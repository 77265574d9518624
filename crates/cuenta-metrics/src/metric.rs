//! Metric values and ordered metric sets.

use crate::format;
use serde::{Deserialize, Serialize};

/// How a metric value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// Two decimals.
    #[default]
    Decimal,
    /// Fraction shown as a percentage.
    Percent,
    /// Scaled with a T/B/M/K suffix.
    LargeNumber,
}

/// How the delta against the prior period is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaKind {
    /// `(current - previous) / |previous|`, as a fraction.
    Percent,
    /// `current - previous`.
    Absolute,
}

impl DeltaKind {
    /// Compute the delta between two periods.
    ///
    /// Null when either side is null, when the result is not finite, or when
    /// a percent delta has a zero base.
    pub fn between(self, current: Option<f64>, previous: Option<f64>) -> Option<f64> {
        let (current, previous) = (current?, previous?);
        let delta = match self {
            Self::Percent if previous == 0.0 => return None,
            Self::Percent => (current - previous) / previous.abs(),
            Self::Absolute => current - previous,
        };
        delta.is_finite().then_some(delta)
    }
}

/// A named, possibly-missing metric result with display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    /// Metric name, one of [`crate::names`].
    pub name: String,
    /// The value; `None` when inputs were missing or the formula failed.
    pub value: Option<f64>,
    /// Change against the prior period.
    pub delta: Option<f64>,
    /// How `delta` was computed, when the metric carries one.
    pub delta_kind: Option<DeltaKind>,
    /// Display mode.
    pub format: ValueFormat,
    /// Unit suffix appended after the formatted value.
    pub suffix: String,
}

impl MetricValue {
    /// A decimal metric without delta. Non-finite values are stored as null.
    pub fn new(name: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            name: name.into(),
            value: value.filter(|v| v.is_finite()),
            delta: None,
            delta_kind: None,
            format: ValueFormat::Decimal,
            suffix: String::new(),
        }
    }

    /// A null metric.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Attach a delta computed from the prior-period value.
    #[must_use]
    pub fn with_delta(mut self, kind: DeltaKind, previous: Option<f64>) -> Self {
        self.delta = kind.between(self.value, previous);
        self.delta_kind = Some(kind);
        self
    }

    /// Set the display mode.
    #[must_use]
    pub const fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the unit suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Whether the value is present.
    pub const fn is_available(&self) -> bool {
        self.value.is_some()
    }

    /// The value formatted for display, `N/A` when null.
    pub fn formatted_value(&self) -> String {
        format::format_value(self.value, self.format, &self.suffix)
    }

    /// The delta formatted for display, if any.
    pub fn formatted_delta(&self) -> Option<String> {
        Some(format::format_delta(self.delta?, self.delta_kind?))
    }
}

/// Metric values keyed by name, ordered by a fixed label list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    metrics: Vec<MetricValue>,
}

impl MetricSet {
    /// Order `values` by `labels`.
    ///
    /// Every label gets exactly one entry: a label with no matching value
    /// becomes a null metric, and values whose name is not a label are
    /// dropped.
    pub fn ordered(labels: &[&str], mut values: Vec<MetricValue>) -> Self {
        let metrics = labels
            .iter()
            .map(|label| match values.iter().position(|m| m.name == *label) {
                Some(idx) => values.swap_remove(idx),
                None => MetricValue::missing(*label),
            })
            .collect();
        Self { metrics }
    }

    /// Look up a metric by name.
    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.metrics.iter().find(|m| m.name == name)
    }

    /// The value of a metric, if present and non-null.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|m| m.value)
    }

    /// Iterate in label order.
    pub fn iter(&self) -> impl Iterator<Item = &MetricValue> {
        self.metrics.iter()
    }

    /// Metric names in label order.
    pub fn names(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.name.as_str()).collect()
    }

    /// Number of metrics.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl<'a> IntoIterator for &'a MetricSet {
    type Item = &'a MetricValue;
    type IntoIter = std::slice::Iter<'a, MetricValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.metrics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_delta() {
        let delta = DeltaKind::Percent.between(Some(0.22), Some(0.20)).unwrap();
        assert_relative_eq!(delta, 0.10, epsilon = 1e-12);

        let delta = DeltaKind::Percent.between(Some(-0.1), Some(-0.2)).unwrap();
        assert_relative_eq!(delta, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_percent_delta_zero_base_is_null() {
        assert_eq!(DeltaKind::Percent.between(Some(1.0), Some(0.0)), None);
        assert_eq!(DeltaKind::Absolute.between(Some(1.0), Some(0.0)), Some(1.0));
    }

    #[test]
    fn test_delta_null_when_either_side_null() {
        assert_eq!(DeltaKind::Absolute.between(None, Some(1.0)), None);
        assert_eq!(DeltaKind::Absolute.between(Some(1.0), None), None);
    }

    #[test]
    fn test_metric_value_non_finite_is_null() {
        let m = MetricValue::new("ROE", Some(f64::INFINITY));
        assert!(!m.is_available());
        assert_eq!(m.formatted_value(), "N/A");
    }

    #[test]
    fn test_metric_value_formatting() {
        let m = MetricValue::new("Market Cap", Some(2.5e9))
            .with_format(ValueFormat::LargeNumber)
            .with_suffix(" USD");
        assert_eq!(m.formatted_value(), "2.50B USD");
        assert_eq!(m.formatted_delta(), None);

        let m = MetricValue::new("Current Ratio", Some(1.5))
            .with_delta(DeltaKind::Absolute, Some(1.25));
        assert_eq!(m.formatted_delta().as_deref(), Some("+0.25"));
    }

    #[test]
    fn test_metric_set_follows_label_order() {
        let set = MetricSet::ordered(
            &["A", "B", "C"],
            vec![
                MetricValue::new("C", Some(3.0)),
                MetricValue::new("Z", Some(9.0)),
                MetricValue::new("A", Some(1.0)),
            ],
        );
        assert_eq!(set.names(), vec!["A", "B", "C"]);
        assert_eq!(set.value("A"), Some(1.0));
        assert_eq!(set.value("B"), None);
        assert!(set.get("B").is_some());
        assert!(set.get("Z").is_none());
    }
}
