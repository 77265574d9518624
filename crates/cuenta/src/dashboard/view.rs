//! Plain, serializable render output.

use cuenta_insights::{Insights, Outlier, classify};
use cuenta_metrics::{DisplayMode, GrowthMetric, MetricSet, ValueFormat};
use cuenta_traits::{Date, FiscalYear, TimeSeries};
use serde::Serialize;
use std::collections::BTreeSet;

/// Everything a presentation layer needs to draw one display mode.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Display mode rendered.
    pub mode: DisplayMode,
    /// Page title.
    pub title: String,
    /// One-line description of the mode.
    pub subtitle: String,
    /// Tickers shown, primary first.
    pub tickers: Vec<String>,
    /// Display names of the tickers shown, in the same order.
    pub companies: Vec<Company>,
    /// Tickers dropped or requests ignored, in user-facing words.
    pub warnings: Vec<String>,
    /// Mode-specific content.
    pub panel: Panel,
}

/// Mode-specific content of a [`DashboardView`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    /// Core financial ratios per company.
    Ratios {
        /// One snapshot per ticker.
        companies: Vec<CompanySnapshot>,
    },
    /// Growth series per company, plus raw-series comparisons.
    Growth(GrowthPanel),
    /// Valuation multiples per company.
    Valuation {
        /// One snapshot per ticker.
        companies: Vec<CompanySnapshot>,
    },
    /// Price performance per company.
    Performance {
        /// One snapshot per ticker.
        companies: Vec<PerformanceSnapshot>,
    },
    /// Cash flow and efficiency comparison tables.
    Efficiency(EfficiencyPanel),
}

/// A company's metric set with optional commentary.
#[derive(Debug, Clone, Serialize)]
pub struct CompanySnapshot {
    /// Ticker symbol.
    pub ticker: String,
    /// Company short name, or the ticker when the provider has none.
    pub name: String,
    /// Metrics in display order.
    pub metrics: MetricSet,
    /// Commentary; only present when a single company is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
}

/// A dated value for charting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Trading date.
    pub date: Date,
    /// Value on that date.
    pub value: f64,
}

impl From<(Date, f64)> for SeriesPoint {
    fn from((date, value): (Date, f64)) -> Self {
        Self { date, value }
    }
}

/// A company's price statistics and chart series.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceSnapshot {
    /// Ticker symbol.
    pub ticker: String,
    /// Company short name, or the ticker.
    pub name: String,
    /// Volatility, Sharpe ratio, max drawdown, cumulative return.
    pub metrics: MetricSet,
    /// Daily closes, oldest first.
    pub prices: Vec<SeriesPoint>,
    /// Cumulative return relative to the first close.
    pub cumulative_returns: Vec<SeriesPoint>,
}

/// A company's growth metrics.
#[derive(Debug, Clone, Serialize)]
pub struct GrowthCompany {
    /// Ticker symbol.
    pub ticker: String,
    /// Company short name, or the ticker.
    pub name: String,
    /// One entry per growth label, in display order.
    pub metrics: Vec<GrowthMetric>,
}

/// Growth mode content.
#[derive(Debug, Clone, Serialize)]
pub struct GrowthPanel {
    /// Per-company growth, primary first.
    pub companies: Vec<GrowthCompany>,
    /// Explanatory caption per growth label.
    pub captions: Insights,
    /// Raw-series comparison per label; empty for a single company.
    pub comparisons: Vec<ComparisonTable>,
}

/// Cash flow and efficiency mode content.
#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyPanel {
    /// Commentary for the primary company's latest fiscal year.
    pub insights: Insights,
    /// One Year × company table per efficiency label.
    pub tables: Vec<ComparisonTable>,
}

/// One cell of a comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cell {
    /// The value, if the company reported the year.
    pub value: Option<f64>,
    /// Position against the label's normal range, if it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlier: Option<Outlier>,
}

/// One fiscal year of a comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Fiscal year.
    pub year: FiscalYear,
    /// One cell per ticker column.
    pub cells: Vec<Cell>,
}

/// A ticker paired with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    /// Ticker symbol.
    pub ticker: String,
    /// Company short name, or the ticker.
    pub name: String,
}

impl Company {
    /// A company labelled by its short name, falling back to the ticker.
    pub fn new(ticker: impl Into<String>, name: Option<&str>) -> Self {
        let ticker = ticker.into();
        let name = name.map_or_else(|| ticker.clone(), str::to_string);
        Self { ticker, name }
    }
}

/// A fiscal year × company table for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    /// Metric label.
    pub label: String,
    /// How cells should be formatted.
    pub format: ValueFormat,
    /// Column companies; those without data for the label are left out.
    pub columns: Vec<Company>,
    /// Rows, oldest year first.
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Whether the table has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build a table over the years every column reports.
    pub(crate) fn intersect(label: &str, format: ValueFormat, columns: &[(&Company, &TimeSeries)]) -> Self {
        let mut years: Option<BTreeSet<FiscalYear>> = None;
        for (_, series) in columns {
            let own: BTreeSet<FiscalYear> = series.years().into_iter().collect();
            years = Some(match years {
                None => own,
                Some(acc) => acc.intersection(&own).copied().collect(),
            });
        }
        Self::build(label, format, columns, years.unwrap_or_default(), false)
    }

    /// Build a table over the years any column reports, classifying cells
    /// against the label's normal range.
    pub(crate) fn union(label: &str, format: ValueFormat, columns: &[(&Company, &TimeSeries)]) -> Self {
        let years = columns
            .iter()
            .flat_map(|(_, series)| series.years())
            .collect();
        Self::build(label, format, columns, years, true)
    }

    fn build(
        label: &str,
        format: ValueFormat,
        columns: &[(&Company, &TimeSeries)],
        years: BTreeSet<FiscalYear>,
        outliers: bool,
    ) -> Self {
        let rows = years
            .into_iter()
            .map(|year| ComparisonRow {
                year,
                cells: columns
                    .iter()
                    .map(|(_, series)| {
                        let value = series.get(year);
                        Cell {
                            value,
                            outlier: value
                                .filter(|_| outliers)
                                .and_then(|v| classify(label, v)),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            label: label.to_string(),
            format,
            columns: columns.iter().map(|(c, _)| (*c).clone()).collect(),
            rows,
        }
    }
}
