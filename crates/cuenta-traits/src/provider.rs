//! Data provider seam.
//!
//! This module defines the `FundamentalsProvider` trait, the boundary between
//! cuenta and a third-party market-data service. Everything behind it is a
//! fallible network call; everything in front of it works on plain tables.

use crate::{CompanyInfo, FinancialStatements, PriceHistory, Result};
use async_trait::async_trait;

/// A source of fundamentals, prices and company metadata for a ticker.
///
/// Implementations must be thread-safe (`Send + Sync`) so a provider can be
/// shared behind a cache.
///
/// # Errors
///
/// Every method returns [`crate::CuentaError::DataFetch`] when the provider
/// cannot be reached or answers with an error.
///
/// Only two methods tell an unknown ticker apart: [`Self::ticker_exists`]
/// answers `false`, and [`Self::company_info`] may fail with
/// [`crate::CuentaError::SymbolNotFound`]. Statements and price history for
/// an unknown ticker may simply come back as empty tables, so callers check
/// `ticker_exists` before fetching.
///
/// # Example
///
/// ```no_run
/// use async_trait::async_trait;
/// use cuenta_traits::{
///     CompanyInfo, FinancialStatements, FundamentalsProvider, PriceHistory, Result,
/// };
///
/// struct Offline;
///
/// #[async_trait]
/// impl FundamentalsProvider for Offline {
///     fn name(&self) -> &str {
///         "offline"
///     }
///
///     async fn statements(&self, _symbol: &str) -> Result<FinancialStatements> {
///         Ok(FinancialStatements::default())
///     }
///
///     async fn price_history(&self, _symbol: &str, _days: u32) -> Result<PriceHistory> {
///         PriceHistory::empty()
///     }
///
///     async fn company_info(&self, _symbol: &str) -> Result<CompanyInfo> {
///         Ok(CompanyInfo::new())
///     }
///
///     async fn ticker_exists(&self, _symbol: &str) -> Result<bool> {
///         Ok(true)
///     }
/// }
/// ```
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &str;

    /// Income statement, balance sheet and cash-flow statement for `symbol`.
    async fn statements(&self, symbol: &str) -> Result<FinancialStatements>;

    /// Daily price history covering the last `days` calendar days.
    async fn price_history(&self, symbol: &str, days: u32) -> Result<PriceHistory>;

    /// Flat company info (market cap, P/E, PEG, ...).
    async fn company_info(&self, symbol: &str) -> Result<CompanyInfo>;

    /// Whether the provider knows `symbol` and quotes a price for it.
    ///
    /// An unknown ticker is `Ok(false)`; only provider failures are errors.
    async fn ticker_exists(&self, symbol: &str) -> Result<bool>;
}
