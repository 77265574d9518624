//! Metric derivation for the cuenta fundamentals dashboard.
//!
//! This crate turns provider tables into named, possibly-missing metric values:
//! - Ratios: profit margin, ROE, debt-to-equity, current and quick ratio
//! - Growth: period-over-period change of revenue, net income, EPS and FCF
//! - Valuation: provider multiples with a PEG fallback
//! - Efficiency: free cash flow, FCF margin, operating margin, asset turnover,
//!   interest coverage, all per fiscal year
//! - Performance: volatility, Sharpe ratio, max drawdown, cumulative return
//!
//! Every formula resolves its line items through ordered alias lists. A line
//! item missing under every alias, a zero denominator or a non-finite result
//! yields a null value for that metric alone; nothing here returns an error.
//!
//! # Example
//!
//! ```ignore
//! use cuenta_metrics::{DisplayMode, ratios::calculate_ratios};
//!
//! let ratios = calculate_ratios(&statements);
//! for metric in ratios.iter() {
//!     println!("{}: {}", metric.name, metric.formatted_value());
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod efficiency;
pub mod format;
pub mod growth;
pub mod labels;
pub mod metric;
pub mod names;
pub mod performance;
pub mod ratios;
pub mod registry;
pub mod valuation;

// Re-export key types
pub use efficiency::EfficiencyMetrics;
pub use growth::GrowthMetric;
pub use metric::{DeltaKind, MetricSet, MetricValue, ValueFormat};
pub use performance::PerformanceConfig;
pub use registry::DisplayMode;
