//! Commentary for computed metrics.
//!
//! This crate maps metric values onto fixed threshold tiers and attaches a
//! static sentence to each. It also classifies comparison-table cells
//! against per-metric normal ranges.
//!
//! Null metric values never produce an entry: callers treat a missing key
//! as "no commentary available".
//!
//! # Examples
//!
//! ```rust,no_run
//! use cuenta_insights::ratio_insights;
//! use cuenta_metrics::{MetricSet, MetricValue};
//!
//! let ratios = MetricSet::ordered(
//!     &["Profit Margin"],
//!     vec![MetricValue::new("Profit Margin", Some(0.25))],
//! );
//! let insights = ratio_insights(&ratios);
//! assert!(insights.get("Profit Margin").unwrap().starts_with("High Profit Margin"));
//! ```

mod commentary;
mod outliers;
mod tiers;

// Re-export main types
pub use commentary::{
    Insights, efficiency_insights, growth_insights, ratio_insights, valuation_insights,
};
pub use outliers::{Outlier, OutlierBand, band_for, classify};
pub use tiers::{Bound, Tiers};
