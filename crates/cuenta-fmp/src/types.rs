//! Data types for FMP API responses.
//!
//! Numeric fields are optional: a field the API omits or sends as `null`
//! becomes a missing line item downstream, never a zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reporting period for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports (10-K filings).
    #[default]
    Annual,
    /// Quarterly reports (10-Q filings).
    Quarter,
}

impl Period {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.get(..10).unwrap_or(date), "%Y-%m-%d").ok()
}

/// Income statement data from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Period end date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Reporting period (FY, Q1, ...).
    #[serde(default)]
    pub period: Option<String>,
    /// Total revenue.
    #[serde(default)]
    pub revenue: Option<f64>,
    /// Cost of revenue (COGS).
    #[serde(default)]
    pub cost_of_revenue: Option<f64>,
    /// Gross profit.
    #[serde(default)]
    pub gross_profit: Option<f64>,
    /// Operating income.
    #[serde(default)]
    pub operating_income: Option<f64>,
    /// Earnings before interest and taxes.
    #[serde(default)]
    pub ebit: Option<f64>,
    /// EBITDA.
    #[serde(default)]
    pub ebitda: Option<f64>,
    /// Interest expense.
    #[serde(default)]
    pub interest_expense: Option<f64>,
    /// Net income.
    #[serde(default)]
    pub net_income: Option<f64>,
    /// Earnings per share (basic).
    #[serde(default)]
    pub eps: Option<f64>,
    /// Earnings per share (diluted).
    #[serde(default, alias = "epsdiluted")]
    pub eps_diluted: Option<f64>,
}

impl IncomeStatement {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Balance sheet data from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Period end date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Reporting period.
    #[serde(default)]
    pub period: Option<String>,
    /// Total assets.
    #[serde(default)]
    pub total_assets: Option<f64>,
    /// Total current assets.
    #[serde(default)]
    pub total_current_assets: Option<f64>,
    /// Cash and cash equivalents.
    #[serde(default)]
    pub cash_and_cash_equivalents: Option<f64>,
    /// Inventory.
    #[serde(default)]
    pub inventory: Option<f64>,
    /// Total liabilities.
    #[serde(default)]
    pub total_liabilities: Option<f64>,
    /// Total current liabilities.
    #[serde(default)]
    pub total_current_liabilities: Option<f64>,
    /// Total non-current liabilities.
    #[serde(default)]
    pub total_non_current_liabilities: Option<f64>,
    /// Total debt.
    #[serde(default)]
    pub total_debt: Option<f64>,
    /// Total stockholders' equity.
    #[serde(default)]
    pub total_stockholders_equity: Option<f64>,
}

impl BalanceSheet {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Cash flow statement data from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    /// Period end date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Reporting period.
    #[serde(default)]
    pub period: Option<String>,
    /// Net income.
    #[serde(default)]
    pub net_income: Option<f64>,
    /// Operating cash flow.
    #[serde(default)]
    pub operating_cash_flow: Option<f64>,
    /// Capital expenditure, reported as a negative outflow.
    #[serde(default)]
    pub capital_expenditure: Option<f64>,
    /// Dividends paid.
    #[serde(default)]
    pub dividends_paid: Option<f64>,
}

impl CashFlowStatement {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Key financial metrics from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    /// Period end date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Market capitalization.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Enterprise value.
    #[serde(default)]
    pub enterprise_value: Option<f64>,
    /// Enterprise value over EBITDA.
    #[serde(default, rename = "evToEBITDA", alias = "enterpriseValueOverEBITDA")]
    pub ev_to_ebitda: Option<f64>,
    /// Enterprise value over sales.
    #[serde(default)]
    pub ev_to_sales: Option<f64>,
}

/// Financial ratios from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    /// Period end date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Price to earnings ratio.
    #[serde(default, alias = "priceEarningsRatio")]
    pub price_to_earnings_ratio: Option<f64>,
    /// Price to book ratio.
    #[serde(default)]
    pub price_to_book_ratio: Option<f64>,
    /// Price/earnings to growth ratio.
    #[serde(default, alias = "priceEarningsToGrowthRatio")]
    pub price_to_earnings_growth_ratio: Option<f64>,
}

/// Analyst consensus estimate for one fiscal period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystEstimate {
    /// Fiscal period end date the estimate refers to.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Average EPS estimate.
    #[serde(default, alias = "estimatedEpsAvg")]
    pub eps_avg: Option<f64>,
    /// Average revenue estimate.
    #[serde(default, alias = "estimatedRevenueAvg")]
    pub revenue_avg: Option<f64>,
}

impl AnalystEstimate {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Real-time quote data from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub name: Option<String>,
    /// Current price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Market cap.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// EPS.
    #[serde(default)]
    pub eps: Option<f64>,
    /// P/E ratio.
    #[serde(default)]
    pub pe: Option<f64>,
}

/// Historical price data from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// Date.
    pub date: String,
    /// Open price.
    #[serde(default)]
    pub open: Option<f64>,
    /// High price.
    #[serde(default)]
    pub high: Option<f64>,
    /// Low price.
    #[serde(default)]
    pub low: Option<f64>,
    /// Close price.
    #[serde(default)]
    pub close: Option<f64>,
    /// Volume.
    #[serde(default)]
    pub volume: Option<f64>,
}

impl HistoricalPrice {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Valuation inputs gathered for one symbol.
#[derive(Debug, Clone, Default)]
pub struct ValuationData {
    /// Current quote.
    pub quote: Quote,
    /// Most recent key metrics, if any.
    pub key_metrics: Option<KeyMetrics>,
    /// Most recent ratios, if any.
    pub ratios: Option<FinancialRatios>,
    /// Analyst estimates, any order.
    pub estimates: Vec<AnalystEstimate>,
    /// Latest income statements, most recent first.
    pub income_statements: Vec<IncomeStatement>,
}
