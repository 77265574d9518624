//! Normal-range classification for comparison-table cells.

use cuenta_metrics::names;
use serde::{Deserialize, Serialize};

/// Position of a value relative to its metric's normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outlier {
    /// Below the normal range.
    Low,
    /// Inside the normal range, edges included.
    Normal,
    /// Above the normal range.
    High,
}

/// Inclusive normal range for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierBand {
    /// Lowest normal value.
    pub low: f64,
    /// Highest normal value.
    pub high: f64,
}

impl OutlierBand {
    /// Classify a value against this band. Non-finite values are not classified.
    #[must_use]
    pub fn classify(&self, value: f64) -> Option<Outlier> {
        if !value.is_finite() {
            return None;
        }
        Some(if value < self.low {
            Outlier::Low
        } else if value > self.high {
            Outlier::High
        } else {
            Outlier::Normal
        })
    }
}

/// The normal range for an efficiency metric, if it has one.
///
/// Free Cash Flows is an absolute amount and has no band.
#[must_use]
pub fn band_for(label: &str) -> Option<OutlierBand> {
    let (low, high) = match label {
        names::FCF_MARGIN => (0.05, 0.30),
        names::OPERATING_MARGIN => (0.10, 0.35),
        names::ASSET_TURNOVER => (0.5, 2.0),
        names::INTEREST_COVERAGE => (3.0, 50.0),
        _ => return None,
    };
    Some(OutlierBand { low, high })
}

/// Classify `value` for `label`; `None` when the label has no band.
#[must_use]
pub fn classify(label: &str, value: f64) -> Option<Outlier> {
    band_for(label)?.classify(value)
}
