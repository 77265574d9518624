//! Per-mode dashboard assembly.
//!
//! A [`Dashboard`] turns a [`DashboardRequest`] into a [`DashboardView`]:
//! it validates the tickers, fetches what the display mode needs from the
//! provider, derives the metrics and attaches commentary. Every render is a
//! full recomputation; only the provider may cache.

mod view;

pub use view::{
    Cell, Company, ComparisonRow, ComparisonTable, CompanySnapshot, DashboardView,
    EfficiencyPanel, GrowthCompany, GrowthPanel, Panel, PerformanceSnapshot, SeriesPoint,
};

use crate::config::DashboardConfig;
use cuenta_insights::{
    efficiency_insights, growth_insights, ratio_insights, valuation_insights,
};
use cuenta_metrics::{
    DisplayMode, ValueFormat,
    efficiency::calculate_efficiency,
    growth::calculate_growth,
    names,
    performance::{calculate_performance, cumulative_return_series},
    ratios::calculate_ratios,
    registry::{EFFICIENCY_LABELS, GROWTH_LABELS},
    valuation::calculate_valuation,
};
use cuenta_traits::{CuentaError, FundamentalsProvider, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// What to show: tickers and a display mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRequest {
    /// Ticker to analyze.
    pub primary: String,
    /// Optional side-by-side ticker.
    #[serde(default)]
    pub compare: Option<String>,
    /// Further tickers, honoured in Cash Flow & Efficiency mode only.
    #[serde(default)]
    pub extra: Vec<String>,
    /// Display mode.
    pub mode: DisplayMode,
}

impl DashboardRequest {
    /// A single-ticker request.
    pub fn new(primary: impl Into<String>, mode: DisplayMode) -> Self {
        Self {
            primary: primary.into(),
            compare: None,
            extra: Vec::new(),
            mode,
        }
    }

    /// Add a comparison ticker.
    #[must_use]
    pub fn with_compare(mut self, ticker: impl Into<String>) -> Self {
        self.compare = Some(ticker.into());
        self
    }

    /// Add further tickers.
    #[must_use]
    pub fn with_extra<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra.extend(tickers.into_iter().map(Into::into));
        self
    }
}

fn normalize(ticker: &str) -> Option<String> {
    let ticker = ticker.trim();
    (!ticker.is_empty()).then(|| ticker.to_uppercase())
}

/// Renders display modes against a data provider.
#[derive(Debug)]
pub struct Dashboard<P> {
    provider: P,
    config: DashboardConfig,
}

impl<P: FundamentalsProvider> Dashboard<P> {
    /// Create a dashboard over `provider`.
    pub const fn new(provider: P, config: DashboardConfig) -> Self {
        Self { provider, config }
    }

    /// The data provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// The configuration.
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Render one display mode.
    ///
    /// # Errors
    ///
    /// Returns [`CuentaError::SymbolNotFound`] if the primary ticker is
    /// empty or unknown, and propagates any provider failure. Unknown
    /// secondary tickers are dropped and reported in
    /// [`DashboardView::warnings`].
    pub async fn render(&self, request: &DashboardRequest) -> Result<DashboardView> {
        let mode = request.mode;
        let (tickers, warnings) = self.resolve_tickers(request).await?;
        info!(mode = %mode, tickers = ?tickers, "rendering dashboard");

        let mut companies = Vec::with_capacity(tickers.len());
        for ticker in &tickers {
            companies.push(self.company(ticker).await?);
        }

        let panel = match mode {
            DisplayMode::Ratios => Panel::Ratios {
                companies: self.ratios(&companies).await?,
            },
            DisplayMode::Growth => Panel::Growth(self.growth(&companies).await?),
            DisplayMode::Valuation => Panel::Valuation {
                companies: self.valuation(&companies).await?,
            },
            DisplayMode::Performance => Panel::Performance {
                companies: self.performance(&companies).await?,
            },
            DisplayMode::Efficiency => Panel::Efficiency(self.efficiency(&companies).await?),
        };

        Ok(DashboardView {
            mode,
            title: mode.title().to_string(),
            subtitle: mode.subtitle().to_string(),
            tickers,
            companies,
            warnings,
            panel,
        })
    }

    /// Label a ticker with its short name. A provider without company
    /// details for the ticker leaves the ticker as its name.
    async fn company(&self, ticker: &str) -> Result<Company> {
        match self.provider.company_info(ticker).await {
            Ok(info) => Ok(Company::new(ticker, info.short_name())),
            Err(e) if e.is_not_found() => {
                debug!(ticker = %ticker, "no company details, using ticker as name");
                Ok(Company::new(ticker, None))
            }
            Err(e) => Err(e),
        }
    }

    async fn resolve_tickers(&self, request: &DashboardRequest) -> Result<(Vec<String>, Vec<String>)> {
        let primary = normalize(&request.primary)
            .ok_or_else(|| CuentaError::SymbolNotFound(request.primary.clone()))?;
        if !self.provider.ticker_exists(&primary).await? {
            return Err(CuentaError::SymbolNotFound(primary));
        }

        let mut warnings = Vec::new();
        let mut candidates: Vec<String> = request.compare.iter().filter_map(|t| normalize(t)).collect();
        let extra: Vec<String> = request.extra.iter().filter_map(|t| normalize(t)).collect();
        if request.mode == DisplayMode::Efficiency {
            candidates.extend(extra);
        } else if !extra.is_empty() {
            warn!(mode = %request.mode, ignored = ?extra, "additional tickers ignored");
            warnings.push(format!(
                "Additional tickers are only compared in {}: ignored {}",
                DisplayMode::Efficiency.title(),
                extra.join(", ")
            ));
        }

        let mut tickers = vec![primary];
        for ticker in candidates {
            if tickers.contains(&ticker) {
                continue;
            }
            if tickers.len() >= request.mode.max_companies() {
                warn!(ticker = %ticker, "too many tickers, dropping");
                warnings.push(format!(
                    "At most {} companies can be compared: dropped {ticker}",
                    request.mode.max_companies()
                ));
                continue;
            }
            if self.provider.ticker_exists(&ticker).await? {
                tickers.push(ticker);
            } else {
                warn!(ticker = %ticker, "unknown ticker, dropping");
                warnings.push(format!("'{ticker}' is not a valid ticker symbol"));
            }
        }
        Ok((tickers, warnings))
    }

    async fn ratios(&self, companies: &[Company]) -> Result<Vec<CompanySnapshot>> {
        let single = companies.len() == 1;
        let mut snapshots = Vec::with_capacity(companies.len());
        for Company { ticker, name } in companies {
            info!(ticker = %ticker, "fetching statements");
            let metrics = calculate_ratios(&self.provider.statements(ticker).await?);
            let insights = single.then(|| ratio_insights(&metrics));
            snapshots.push(CompanySnapshot {
                ticker: ticker.clone(),
                name: name.clone(),
                metrics,
                insights,
            });
        }
        Ok(snapshots)
    }

    async fn valuation(&self, companies: &[Company]) -> Result<Vec<CompanySnapshot>> {
        let single = companies.len() == 1;
        let mut snapshots = Vec::with_capacity(companies.len());
        for Company { ticker, name } in companies {
            info!(ticker = %ticker, "fetching company info");
            let metrics = calculate_valuation(&self.provider.company_info(ticker).await?);
            let insights = single.then(|| valuation_insights(&metrics));
            snapshots.push(CompanySnapshot {
                ticker: ticker.clone(),
                name: name.clone(),
                metrics,
                insights,
            });
        }
        Ok(snapshots)
    }

    async fn growth(&self, companies: &[Company]) -> Result<GrowthPanel> {
        let mut growth = Vec::with_capacity(companies.len());
        for company in companies {
            info!(ticker = %company.ticker, "fetching statements");
            let statements = self.provider.statements(&company.ticker).await?;
            growth.push((company, calculate_growth(&statements)));
        }

        let mut comparisons = Vec::new();
        if growth.len() > 1 {
            for label in GROWTH_LABELS {
                let columns: Option<Vec<_>> = growth
                    .iter()
                    .map(|(company, metrics)| {
                        metrics
                            .iter()
                            .find(|m| m.label == *label)
                            .and_then(|m| m.source.as_ref())
                            .map(|s| (*company, s))
                    })
                    .collect();
                // A label missing for any company has no comparison
                if let Some(columns) = columns {
                    comparisons.push(ComparisonTable::intersect(label, growth_format(label), &columns));
                }
            }
        }

        Ok(GrowthPanel {
            companies: growth
                .into_iter()
                .map(|(company, metrics)| GrowthCompany {
                    ticker: company.ticker.clone(),
                    name: company.name.clone(),
                    metrics,
                })
                .collect(),
            captions: growth_insights(GROWTH_LABELS),
            comparisons,
        })
    }

    async fn performance(&self, companies: &[Company]) -> Result<Vec<PerformanceSnapshot>> {
        let config = self.config.performance();
        let mut snapshots = Vec::with_capacity(companies.len());
        for Company { ticker, name } in companies {
            info!(ticker = %ticker, days = self.config.history_days, "fetching price history");
            let history = self.provider.price_history(ticker, self.config.history_days).await?;
            snapshots.push(PerformanceSnapshot {
                ticker: ticker.clone(),
                name: name.clone(),
                metrics: calculate_performance(&history, &config)?,
                prices: history.points()?.into_iter().map(SeriesPoint::from).collect(),
                cumulative_returns: cumulative_return_series(&history)?
                    .into_iter()
                    .map(SeriesPoint::from)
                    .collect(),
            });
        }
        Ok(snapshots)
    }

    async fn efficiency(&self, companies: &[Company]) -> Result<EfficiencyPanel> {
        let mut metrics = Vec::with_capacity(companies.len());
        for company in companies {
            info!(ticker = %company.ticker, "fetching statements");
            let statements = self.provider.statements(&company.ticker).await?;
            metrics.push((company, calculate_efficiency(&statements)));
        }

        let insights = metrics
            .first()
            .map(|(_, m)| efficiency_insights(m))
            .unwrap_or_default();

        let tables = EFFICIENCY_LABELS
            .iter()
            .map(|label| {
                let columns: Vec<_> = metrics
                    .iter()
                    .filter_map(|(company, m)| m.get(label).map(|s| (*company, s)))
                    .collect();
                ComparisonTable::union(label, efficiency_format(label), &columns)
            })
            .collect();

        Ok(EfficiencyPanel { insights, tables })
    }
}

fn growth_format(label: &str) -> ValueFormat {
    match label {
        names::DILUTED_EPS => ValueFormat::Decimal,
        _ => ValueFormat::LargeNumber,
    }
}

fn efficiency_format(label: &str) -> ValueFormat {
    match label {
        names::FREE_CASH_FLOWS => ValueFormat::LargeNumber,
        names::FCF_MARGIN | names::OPERATING_MARGIN => ValueFormat::Percent,
        _ => ValueFormat::Decimal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" aapl "), Some("AAPL".to_string()));
        assert_eq!(normalize("   "), None);
    }

    #[test]
    fn test_request_builder() {
        let request = DashboardRequest::new("AAPL", DisplayMode::Efficiency)
            .with_compare("MSFT")
            .with_extra(["GOOG", "AMZN"]);
        assert_eq!(request.compare.as_deref(), Some("MSFT"));
        assert_eq!(request.extra, vec!["GOOG", "AMZN"]);
    }

    #[test]
    fn test_table_formats() {
        assert_eq!(growth_format(names::DILUTED_EPS), ValueFormat::Decimal);
        assert_eq!(growth_format(names::TOTAL_REVENUE), ValueFormat::LargeNumber);
        assert_eq!(efficiency_format(names::FCF_MARGIN), ValueFormat::Percent);
        assert_eq!(efficiency_format(names::ASSET_TURNOVER), ValueFormat::Decimal);
    }
}
