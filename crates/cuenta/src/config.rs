//! Dashboard configuration.

use cuenta_metrics::PerformanceConfig;
use cuenta_traits::{CuentaError, Result};
use serde::{Deserialize, Serialize};
use std::{env, str::FromStr, time::Duration};

/// Environment variable overriding [`DashboardConfig::risk_free_rate`].
pub const ENV_RISK_FREE_RATE: &str = "CUENTA_RISK_FREE_RATE";
/// Environment variable overriding [`DashboardConfig::history_days`].
pub const ENV_HISTORY_DAYS: &str = "CUENTA_HISTORY_DAYS";
/// Environment variable overriding [`DashboardConfig::cache_ttl_secs`].
pub const ENV_CACHE_TTL_SECS: &str = "CUENTA_CACHE_TTL_SECS";
/// Environment variable overriding [`DashboardConfig::cache_capacity`].
pub const ENV_CACHE_CAPACITY: &str = "CUENTA_CACHE_CAPACITY";

/// Settings shared by every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Annual risk-free rate used by the Sharpe ratio (default: 0.015)
    pub risk_free_rate: f64,
    /// Trading days per year (default: 252)
    pub trading_days_per_year: u32,
    /// Calendar days of price history fetched for performance (default: 365)
    pub history_days: u32,
    /// Annual statement periods fetched per statement (default: 5)
    pub statement_periods: u32,
    /// Seconds a cached provider response stays fresh (default: 900)
    pub cache_ttl_secs: u64,
    /// Maximum number of cached provider responses (default: 64)
    pub cache_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.015,
            trading_days_per_year: 252,
            history_days: 365,
            statement_periods: 5,
            cache_ttl_secs: 900,
            cache_capacity: 64,
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by `CUENTA_*` environment variables.
    ///
    /// A `.env` file is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns [`CuentaError::Config`] if a variable is set but does not
    /// parse, or the resulting configuration is invalid.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// # Errors
    ///
    /// Same as [`DashboardConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, ENV_RISK_FREE_RATE)? {
            config.risk_free_rate = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_HISTORY_DAYS)? {
            config.history_days = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_CACHE_TTL_SECS)? {
            config.cache_ttl_secs = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_CACHE_CAPACITY)? {
            config.cache_capacity = v;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CuentaError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.risk_free_rate.is_finite() {
            return Err(CuentaError::Config(format!(
                "risk_free_rate must be finite, got {}",
                self.risk_free_rate
            )));
        }
        if self.trading_days_per_year == 0 {
            return Err(CuentaError::Config(
                "trading_days_per_year must be positive".into(),
            ));
        }
        if self.history_days < 2 {
            return Err(CuentaError::Config(format!(
                "history_days must be at least 2, got {}",
                self.history_days
            )));
        }
        if self.statement_periods < 2 {
            return Err(CuentaError::Config(format!(
                "statement_periods must be at least 2, got {}",
                self.statement_periods
            )));
        }
        if self.cache_capacity == 0 {
            return Err(CuentaError::Config("cache_capacity must be positive".into()));
        }
        Ok(())
    }

    /// Settings for the performance statistics.
    #[must_use]
    pub const fn performance(&self) -> PerformanceConfig {
        PerformanceConfig {
            risk_free_rate: self.risk_free_rate,
            trading_days_per_year: self.trading_days_per_year,
        }
    }

    /// Cache time-to-live.
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CuentaError::Config(format!("{key}: cannot parse '{raw}'"))),
    }
}
