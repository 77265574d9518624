#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cuenta/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type definitions for the cuenta fundamentals dashboard.
//!
//! This crate provides the foundational abstractions shared by the data
//! providers, the metric derivation layer and the dashboard: statement
//! tables, price history, company info, the provider seam and the error
//! channel.

/// The version of the cuenta-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod prices;
pub mod provider;
pub mod statement;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{CuentaError, Result};
pub use prices::PriceHistory;
pub use provider::FundamentalsProvider;
pub use statement::{FinancialStatements, StatementTable};
pub use types::{CompanyInfo, Date, FiscalYear, Symbol, TimeSeries, info_keys};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
