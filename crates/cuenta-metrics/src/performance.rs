//! Stock performance statistics from daily closes.

use crate::{
    metric::{MetricSet, MetricValue, ValueFormat},
    names,
    registry::STOCK_LABELS,
};
use cuenta_traits::{
    Date, PriceHistory, Result,
    stats::{mean, pct_change, population_std, running_max, safe_div},
};
use serde::{Deserialize, Serialize};

/// Configuration for performance statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Annual risk-free rate as a fraction (default: 0.015)
    pub risk_free_rate: f64,
    /// Number of trading days per year (default: 252)
    pub trading_days_per_year: u32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.015,
            trading_days_per_year: 252,
        }
    }
}

impl PerformanceConfig {
    /// The risk-free rate per trading day.
    #[must_use]
    pub fn daily_risk_free_rate(&self) -> f64 {
        self.risk_free_rate / f64::from(self.trading_days_per_year.max(1))
    }
}

/// Daily close-to-close returns, skipping non-finite results.
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    pct_change(closes).into_iter().filter(|r| r.is_finite()).collect()
}

/// Population standard deviation of daily returns.
pub fn volatility(closes: &[f64]) -> Option<f64> {
    population_std(&daily_returns(closes))
}

/// Mean excess daily return per unit of volatility.
///
/// Null when volatility is zero or there are no returns.
pub fn sharpe_ratio(closes: &[f64], config: &PerformanceConfig) -> Option<f64> {
    let returns = daily_returns(closes);
    let vol = population_std(&returns)?;
    safe_div(mean(&returns)? - config.daily_risk_free_rate(), vol)
}

/// Largest peak-to-trough decline, as a non-positive fraction.
pub fn max_drawdown(closes: &[f64]) -> Option<f64> {
    closes
        .iter()
        .zip(running_max(closes))
        .filter_map(|(&price, peak)| safe_div(price - peak, peak))
        .reduce(f64::min)
}

/// Last close over first close, less one.
pub fn cumulative_return(closes: &[f64]) -> Option<f64> {
    let (first, last) = (closes.first()?, closes.last()?);
    safe_div(*last, *first).map(|r| r - 1.0)
}

/// Cumulative return at every date, relative to the first close.
///
/// # Errors
///
/// Returns an error if the price history has an unexpected schema.
pub fn cumulative_return_series(history: &PriceHistory) -> Result<Vec<(Date, f64)>> {
    let points = history.points()?;
    let Some(&(_, base)) = points.first() else {
        return Ok(Vec::new());
    };
    Ok(points
        .into_iter()
        .filter_map(|(date, close)| safe_div(close, base).map(|r| (date, r - 1.0)))
        .collect())
}

/// Compute the stock performance set.
///
/// # Errors
///
/// Returns an error if the price history has an unexpected schema. An empty
/// or short history is not an error; its metrics are null.
pub fn calculate_performance(history: &PriceHistory, config: &PerformanceConfig) -> Result<MetricSet> {
    let closes = history.closes()?;

    Ok(MetricSet::ordered(
        STOCK_LABELS,
        vec![
            MetricValue::new(names::VOLATILITY, volatility(&closes))
                .with_format(ValueFormat::Percent),
            MetricValue::new(names::SHARPE_RATIO, sharpe_ratio(&closes, config)),
            MetricValue::new(names::MAX_DRAWDOWN, max_drawdown(&closes))
                .with_format(ValueFormat::Percent),
            MetricValue::new(names::CUMULATIVE_RETURN, cumulative_return(&closes))
                .with_format(ValueFormat::Percent),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CLOSES: [f64; 4] = [10.0, 11.0, 9.0, 12.0];

    #[test]
    fn test_cumulative_return_and_drawdown() {
        assert_relative_eq!(cumulative_return(&CLOSES).unwrap(), 0.20, epsilon = 1e-12);
        assert_relative_eq!(max_drawdown(&CLOSES).unwrap(), -2.0 / 11.0, epsilon = 1e-12);
        assert_relative_eq!(max_drawdown(&CLOSES).unwrap(), -0.1818, epsilon = 1e-4);
    }

    #[test]
    fn test_monotonic_series_has_zero_drawdown() {
        assert_eq!(max_drawdown(&[1.0, 2.0, 3.0]), Some(0.0));
    }

    #[test]
    fn test_volatility_is_population_std() {
        let vol = volatility(&CLOSES).unwrap();
        let returns = [0.1, 9.0 / 11.0 - 1.0, 12.0 / 9.0 - 1.0];
        let m = returns.iter().sum::<f64>() / 3.0;
        let expected = (returns.iter().map(|r| (r - m).powi(2)).sum::<f64>() / 3.0).sqrt();
        assert_relative_eq!(vol, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_sharpe_uses_daily_risk_free_rate() {
        let config = PerformanceConfig::default();
        let returns = daily_returns(&CLOSES);
        let expected = (mean(&returns).unwrap() - 0.015 / 252.0) / volatility(&CLOSES).unwrap();
        assert_relative_eq!(sharpe_ratio(&CLOSES, &config).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_sharpe_null_on_zero_volatility() {
        let flat = [5.0, 5.0, 5.0, 5.0];
        assert_eq!(volatility(&flat), Some(0.0));
        assert_eq!(sharpe_ratio(&flat, &PerformanceConfig::default()), None);
    }

    #[test]
    fn test_short_history() {
        assert_eq!(cumulative_return(&[]), None);
        assert_eq!(max_drawdown(&[]), None);
        assert_eq!(volatility(&[10.0]), None);
        assert_eq!(cumulative_return(&[10.0]), Some(0.0));
    }

    #[test]
    fn test_calculate_performance_set() {
        let d = |day| Date::from_ymd_opt(2024, 1, day).unwrap();
        let history = PriceHistory::from_points(&[
            (d(2), 10.0),
            (d(3), 11.0),
            (d(4), 9.0),
            (d(5), 12.0),
        ])
        .unwrap();

        let set = calculate_performance(&history, &PerformanceConfig::default()).unwrap();
        assert_eq!(set.names(), STOCK_LABELS.to_vec());
        assert_eq!(set.get(names::CUMULATIVE_RETURN).unwrap().formatted_value(), "20.00%");
        assert_eq!(set.get(names::MAX_DRAWDOWN).unwrap().formatted_value(), "-18.18%");

        let series = cumulative_return_series(&history).unwrap();
        assert_eq!(series.len(), 4);
        assert_eq!(series[0], (d(2), 0.0));
        assert_relative_eq!(series[3].1, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_history_gives_null_set() {
        let set = calculate_performance(&PriceHistory::empty().unwrap(), &PerformanceConfig::default())
            .unwrap();
        assert!(set.iter().all(|m| m.value.is_none()));
    }

    #[test]
    fn test_daily_risk_free_rate() {
        let config = PerformanceConfig {
            risk_free_rate: 0.0252,
            trading_days_per_year: 252,
        };
        assert_relative_eq!(config.daily_risk_free_rate(), 0.0001, epsilon = 1e-15);
    }
}
