//! Financial Modeling Prep (FMP) data provider for cuenta.
//!
//! This crate provides a client for fetching statements, prices and valuation
//! data from the [Financial Modeling Prep](https://financialmodelingprep.com/)
//! API, and maps the responses onto the provider-neutral tables defined in
//! `cuenta-traits`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cuenta_fmp::FmpClient;
//! use cuenta_traits::FundamentalsProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     // Income statement, balance sheet and cash flow as labelled tables
//!     let statements = client.statements("AAPL").await?;
//!
//!     // One year of daily closes
//!     let prices = client.price_history("AAPL", 365).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod convert;
mod error;
mod provider;
mod types;

pub use client::FmpClient;
pub use convert::{company_info, price_history, statements};
pub use error::FmpError;
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
