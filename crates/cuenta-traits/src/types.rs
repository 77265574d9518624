//! Common types used throughout cuenta.
//!
//! This module defines ticker symbols, fiscal-year time series and the flat
//! company-info mapping returned by data providers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier, typically a ticker like "AAPL" or "MSFT".
pub type Symbol = String;

/// A fiscal year, e.g. `2024`.
pub type FiscalYear = i32;

/// Keys understood in a [`CompanyInfo`] mapping.
pub mod info_keys {
    /// Market capitalization.
    pub const MARKET_CAP: &str = "marketCap";
    /// Trailing twelve-month price to earnings.
    pub const TRAILING_PE: &str = "trailingPE";
    /// Forward price to earnings.
    pub const FORWARD_PE: &str = "forwardPE";
    /// Price/earnings to growth.
    pub const PEG_RATIO: &str = "pegRatio";
    /// Price to book value.
    pub const PRICE_TO_BOOK: &str = "priceToBook";
    /// Enterprise value.
    pub const ENTERPRISE_VALUE: &str = "enterpriseValue";
    /// Enterprise value over EBITDA.
    pub const EV_TO_EBITDA: &str = "enterpriseToEbitda";
    /// Enterprise value over revenue.
    pub const EV_TO_REVENUE: &str = "enterpriseToRevenue";
    /// Year-over-year earnings growth as a fraction (0.10 = 10%).
    pub const EARNINGS_GROWTH: &str = "earningsGrowth";
    /// Last traded price.
    pub const REGULAR_MARKET_PRICE: &str = "regularMarketPrice";
}

/// A time series indexed by fiscal year, always sorted oldest to newest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<(FiscalYear, f64)>,
}

impl TimeSeries {
    /// Build a series from `(year, value)` pairs.
    ///
    /// Points are sorted by year. When a year appears more than once the
    /// first occurrence wins, so feeding periods in descending recency keeps
    /// the most recent filing for that year.
    pub fn from_points(input: impl IntoIterator<Item = (FiscalYear, f64)>) -> Self {
        let mut points: Vec<(FiscalYear, f64)> = Vec::new();
        for (year, value) in input {
            if !points.iter().any(|(y, _)| *y == year) {
                points.push((year, value));
            }
        }
        points.sort_by_key(|(year, _)| *year);
        Self { points }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(year, value)` pairs, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (FiscalYear, f64)> + '_ {
        self.points.iter().copied()
    }

    /// The fiscal years, oldest first.
    pub fn years(&self) -> Vec<FiscalYear> {
        self.points.iter().map(|(y, _)| *y).collect()
    }

    /// The values, oldest first.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    /// Value recorded for `year`.
    pub fn get(&self, year: FiscalYear) -> Option<f64> {
        self.points
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, v)| *v)
    }

    /// The most recent point.
    pub fn latest(&self) -> Option<(FiscalYear, f64)> {
        self.points.last().copied()
    }

    /// Combine two series year by year.
    ///
    /// Only years present in both series are visited; years for which `f`
    /// returns `None` are dropped.
    pub fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> Option<f64>) -> Self {
        let points = self
            .points
            .iter()
            .filter_map(|&(year, a)| other.get(year).and_then(|b| f(a, b)).map(|v| (year, v)))
            .collect();
        Self { points }
    }
}

/// Flat key-value company information (market cap, P/E and so on).
///
/// Keys follow the names in [`info_keys`]. Non-finite values are never
/// stored, so a key is either absent or holds a usable number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    short_name: Option<String>,
    fields: BTreeMap<String, f64>,
}

impl CompanyInfo {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name of the company.
    #[must_use]
    pub fn with_short_name(mut self, name: impl Into<String>) -> Self {
        self.short_name = Some(name.into());
        self
    }

    /// Builder form of [`CompanyInfo::insert`].
    #[must_use]
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    /// Store `value` under `key`. Non-finite values are ignored.
    pub fn insert(&mut self, key: &str, value: f64) {
        if value.is_finite() {
            self.fields.insert(key.to_string(), value);
        }
    }

    /// Store `value` under `key` when present.
    pub fn insert_opt(&mut self, key: &str, value: Option<f64>) {
        if let Some(v) = value {
            self.insert(key, v);
        }
    }

    /// Look up a numeric field.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.fields.get(key).copied()
    }

    /// The company display name, if the provider supplied one.
    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    /// Whether no numeric field is present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_time_series_sorted_ascending() {
        let series = TimeSeries::from_points([(2024, 3.0), (2022, 1.0), (2023, 2.0)]);
        assert_eq!(series.years(), vec![2022, 2023, 2024]);
        assert_eq!(series.values(), vec![1.0, 2.0, 3.0]);
        assert_eq!(series.latest(), Some((2024, 3.0)));
    }

    #[test]
    fn test_time_series_duplicate_year_keeps_first() {
        let series = TimeSeries::from_points([(2024, 5.0), (2024, 9.0)]);
        assert_eq!(series.len(), 1);
        assert_eq!(series.get(2024), Some(5.0));
    }

    #[test]
    fn test_zip_with_intersects_years() {
        let a = TimeSeries::from_points([(2022, 10.0), (2023, 20.0), (2024, 30.0)]);
        let b = TimeSeries::from_points([(2023, 4.0), (2024, 0.0)]);
        let ratio = a.zip_with(&b, |x, y| if y == 0.0 { None } else { Some(x / y) });

        assert_eq!(ratio.years(), vec![2023]);
        assert_relative_eq!(ratio.get(2023).unwrap(), 5.0);
    }

    #[test]
    fn test_company_info_ignores_non_finite() {
        let mut info = CompanyInfo::new().with(info_keys::MARKET_CAP, 1.5e12);
        info.insert(info_keys::TRAILING_PE, f64::NAN);
        info.insert_opt(info_keys::FORWARD_PE, None);

        assert_eq!(info.get(info_keys::MARKET_CAP), Some(1.5e12));
        assert_eq!(info.get(info_keys::TRAILING_PE), None);
        assert_eq!(info.get(info_keys::FORWARD_PE), None);
    }

    #[test]
    fn test_company_info_short_name() {
        let info = CompanyInfo::new().with_short_name("Apple Inc.");
        assert_eq!(info.short_name(), Some("Apple Inc."));
        assert!(info.is_empty());
    }

    #[test]
    fn test_date_type() {
        use chrono::Datelike;
        let date: Date = Date::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(date.year(), 2024);
    }
}
