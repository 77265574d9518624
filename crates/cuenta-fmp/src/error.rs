//! Error types for FMP API client.

use cuenta_traits::CuentaError;
use thiserror::Error;

/// Errors that can occur when using the FMP API.
#[derive(Debug, Error)]
pub enum FmpError {
    /// Missing API key.
    #[error("FMP_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("FMP API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. Free tier allows 250 requests/day.")]
    RateLimitExceeded,

    /// Symbol not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Response could not be mapped onto cuenta tables.
    #[error("Conversion failed: {0}")]
    Convert(#[from] CuentaError),
}

impl From<FmpError> for CuentaError {
    fn from(err: FmpError) -> Self {
        match err {
            FmpError::SymbolNotFound(symbol) => Self::SymbolNotFound(symbol),
            FmpError::MissingApiKey => Self::Config("FMP_API_KEY environment variable not set".to_string()),
            FmpError::Convert(inner) => inner,
            other => Self::DataFetch(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_not_found_maps_across() {
        let err: CuentaError = FmpError::SymbolNotFound("ZZZZ".to_string()).into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err: CuentaError = FmpError::MissingApiKey.into();
        assert!(matches!(err, CuentaError::Config(_)));
    }

    #[test]
    fn test_api_error_is_data_fetch() {
        let err: CuentaError = FmpError::Api("HTTP 500".to_string()).into();
        assert!(matches!(err, CuentaError::DataFetch(ref m) if m.contains("HTTP 500")));

        let err: CuentaError = FmpError::RateLimitExceeded.into();
        assert!(matches!(err, CuentaError::DataFetch(_)));
    }
}
