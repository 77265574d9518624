//! Error types for cuenta.
//!
//! Data access failures travel through a single channel, [`CuentaError`].
//! Missing line items and arithmetic failures inside metric formulas are
//! not errors; they surface as null metric values instead.

use thiserror::Error;

/// The main error type for cuenta operations.
#[derive(Debug, Error)]
pub enum CuentaError {
    /// The ticker is unknown to the data provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The upstream provider or the network failed.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a required column is missing from a table.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl CuentaError {
    /// Whether this error means the ticker does not exist, as opposed to
    /// a failure talking to the provider.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_))
    }
}

impl From<String> for CuentaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for CuentaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for cuenta operations.
pub type Result<T> = std::result::Result<T, CuentaError>;
