#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cuenta/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # cuenta
//!
//! Fundamentals dashboard for publicly traded companies.
//!
//! cuenta is an umbrella crate that re-exports the cuenta sub-crates and adds
//! the orchestration layer: configuration, a bounded provider cache and the
//! per-mode [`Dashboard`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use cuenta::{DashboardConfig, DashboardRequest, DisplayMode};
//!
//! # async fn example() -> cuenta::Result<()> {
//! let config = DashboardConfig::from_env()?;
//! let dashboard = cuenta::fmp_dashboard(config)?;
//!
//! let request = DashboardRequest::new("AAPL", DisplayMode::Ratios).with_compare("MSFT");
//! let view = dashboard.render(&request).await?;
//! for warning in &view.warnings {
//!     eprintln!("{warning}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types, the error channel and [`FundamentalsProvider`]
//! - [`fmp`] - Financial Modeling Prep data provider
//! - [`metrics`] - Ratios, growth, valuation, efficiency and performance
//! - [`insights`] - Threshold commentary and outlier bands
//!
//! ## Architecture
//!
//! 1. **Providers** fetch statements, prices and company info
//! 2. **Metrics** derive named, possibly-null values from those tables
//! 3. **Insights** attach fixed commentary to metric values
//! 4. **Dashboard** assembles one display mode into a plain [`DashboardView`]

pub mod cache;
pub mod config;
pub mod dashboard;

/// Version information for the cuenta crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Sub-crates
// ============================================================================

/// Core type definitions: statement tables, price history, company info,
/// [`FundamentalsProvider`] and [`CuentaError`].
pub mod traits {
    pub use cuenta_traits::*;
}

/// Financial Modeling Prep provider.
///
/// [`fmp::FmpClient`] implements [`FundamentalsProvider`]; it reads its API
/// key from `FMP_API_KEY`.
pub mod fmp {
    pub use cuenta_fmp::*;
}

/// Metric derivation.
///
/// Every formula resolves line items through ordered alias lists and yields
/// a null value, never an error, when inputs are missing.
pub mod metrics {
    pub use cuenta_metrics::*;
}

/// Commentary and outlier classification for computed metrics.
pub mod insights {
    pub use cuenta_insights::*;
}

// Re-export error types
pub use cuenta_traits::{CuentaError, Result};

// Re-export common types
pub use cuenta_traits::{CompanyInfo, FinancialStatements, FundamentalsProvider, PriceHistory};
pub use cuenta_metrics::{DisplayMode, MetricSet, MetricValue};

// Re-export orchestration
pub use cache::CachedProvider;
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardRequest, DashboardView, Panel};

/// A dashboard over the FMP provider, wrapped in the bounded cache.
///
/// # Errors
///
/// Returns [`CuentaError::Config`] if `FMP_API_KEY` is not set or the
/// configuration is invalid.
pub fn fmp_dashboard(config: DashboardConfig) -> Result<Dashboard<CachedProvider<fmp::FmpClient>>> {
    config.validate()?;
    let client = fmp::FmpClient::from_env()?.with_periods(config.statement_periods);
    let provider = CachedProvider::new(client, config.cache_ttl(), config.cache_capacity);
    Ok(Dashboard::new(provider, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
