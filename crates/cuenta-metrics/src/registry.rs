//! Display mode registry.
//!
//! Each dashboard view has a title, a subtitle and a fixed label list. The
//! label list decides which metrics a view shows and in what order.

use crate::names;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Labels of the core financial ratios view.
pub const RATIO_LABELS: &[&str] = &[
    names::PROFIT_MARGIN,
    names::ROE,
    names::DEBT_TO_EQUITY,
    names::CURRENT_RATIO,
    names::QUICK_RATIO,
];

/// Labels of the growth view.
pub const GROWTH_LABELS: &[&str] = &[
    names::TOTAL_REVENUE,
    names::NET_INCOME,
    names::DILUTED_EPS,
    names::FREE_CASH_FLOW,
];

/// Labels of the valuation view.
pub const VALUATION_LABELS: &[&str] = &[
    names::TRAILING_PE,
    names::FORWARD_PE,
    names::PEG_RATIO,
    names::PRICE_TO_BOOK,
    names::ENTERPRISE_VALUE,
    names::MARKET_CAP,
    names::EV_EBITDA,
    names::EV_REVENUE,
];

/// Labels of the stock performance view.
pub const STOCK_LABELS: &[&str] = &[
    names::VOLATILITY,
    names::SHARPE_RATIO,
    names::MAX_DRAWDOWN,
    names::CUMULATIVE_RETURN,
];

/// Labels of the cash flow and efficiency view.
pub const EFFICIENCY_LABELS: &[&str] = &[
    names::FREE_CASH_FLOWS,
    names::FCF_MARGIN,
    names::OPERATING_MARGIN,
    names::ASSET_TURNOVER,
    names::INTEREST_COVERAGE,
];

/// One of the five dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Core financial ratios with prior-period deltas.
    Ratios,
    /// Year-over-year growth of key line items.
    Growth,
    /// Provider valuation multiples.
    Valuation,
    /// Price-based statistics.
    Performance,
    /// Cash flow and efficiency per fiscal year, for up to four companies.
    Efficiency,
}

impl DisplayMode {
    /// All modes in menu order.
    pub const ALL: [Self; 5] = [
        Self::Ratios,
        Self::Growth,
        Self::Valuation,
        Self::Performance,
        Self::Efficiency,
    ];

    /// Page title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Ratios => "Core Financial Ratios",
            Self::Growth => "Growth Metrics",
            Self::Valuation => "Valuation Metrics",
            Self::Performance => "Stock Performance Metrics",
            Self::Efficiency => "Cash Flow & Efficiency",
        }
    }

    /// Page subtitle.
    #[must_use]
    pub const fn subtitle(&self) -> &'static str {
        match self {
            Self::Ratios => "Key financial ratios to assess company performance.",
            Self::Growth => "Year-over-year growth rates for key financial metrics.",
            Self::Valuation => {
                "Key valuation metrics to assess stock price relative to earnings and growth."
            }
            Self::Performance => "Historical stock price performance and key stock metrics.",
            Self::Efficiency => {
                "Key cash flow and efficiency metrics to assess company performance."
            }
        }
    }

    /// The fixed label list of the view.
    #[must_use]
    pub const fn labels(&self) -> &'static [&'static str] {
        match self {
            Self::Ratios => RATIO_LABELS,
            Self::Growth => GROWTH_LABELS,
            Self::Valuation => VALUATION_LABELS,
            Self::Performance => STOCK_LABELS,
            Self::Efficiency => EFFICIENCY_LABELS,
        }
    }

    /// Maximum number of companies shown side by side.
    #[must_use]
    pub const fn max_companies(&self) -> usize {
        match self {
            Self::Efficiency => 4,
            _ => 2,
        }
    }

    /// Short command-line name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ratios => "ratios",
            Self::Growth => "growth",
            Self::Valuation => "valuation",
            Self::Performance => "performance",
            Self::Efficiency => "efficiency",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s) || mode.title().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown display mode: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lists() {
        assert_eq!(DisplayMode::Ratios.labels().len(), 5);
        assert_eq!(DisplayMode::Growth.labels().len(), 4);
        assert_eq!(DisplayMode::Valuation.labels().len(), 8);
        assert_eq!(DisplayMode::Performance.labels().len(), 4);
        assert_eq!(DisplayMode::Efficiency.labels().len(), 5);
        assert_eq!(DisplayMode::Ratios.labels()[0], "Profit Margin");
        assert_eq!(DisplayMode::Efficiency.labels()[4], "Interest Coverage");
    }

    #[test]
    fn test_labels_are_unique_across_modes() {
        let mut all: Vec<&str> = DisplayMode::ALL
            .iter()
            .flat_map(|m| m.labels().iter().copied())
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("ratios".parse::<DisplayMode>(), Ok(DisplayMode::Ratios));
        assert_eq!(
            "Cash Flow & Efficiency".parse::<DisplayMode>(),
            Ok(DisplayMode::Efficiency)
        );
        assert!("charts".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn test_max_companies() {
        assert_eq!(DisplayMode::Efficiency.max_companies(), 4);
        assert_eq!(DisplayMode::Ratios.max_companies(), 2);
    }
}
