//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{
        AnalystEstimate, BalanceSheet, CashFlowStatement, FinancialRatios, HistoricalPrice,
        IncomeStatement, KeyMetrics, Period, Quote, ValuationData,
    },
};
use chrono::NaiveDate;
use reqwest::Client;
use std::env;
use tracing::debug;

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Default number of annual statement periods to request.
pub const DEFAULT_PERIODS: u32 = 5;

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
    base_url: String,
    periods: u32,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: FMP_BASE_URL.to_string(),
            periods: DEFAULT_PERIODS,
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Point the client at a different API root (e.g. a test server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Number of annual statement periods fetched per statement.
    #[must_use]
    pub const fn with_periods(mut self, periods: u32) -> Self {
        self.periods = periods;
        self
    }

    /// Number of annual statement periods fetched per statement.
    #[must_use]
    pub const fn periods(&self) -> u32 {
        self.periods
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!("{}/{endpoint}{separator}apikey={}", self.base_url, self.api_key)
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        debug!(endpoint, "FMP request");
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            debug!(endpoint, %status, "FMP request failed");
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // Error payloads arrive with a 200 status
        if text.contains("\"Error Message\"") {
            return Err(FmpError::Api(text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    fn statement_endpoint(kind: &str, symbol: &str, period: Period, limit: Option<u32>) -> String {
        let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
        format!(
            "{kind}?symbol={}&period={}{limit_param}",
            symbol.to_uppercase(),
            period.as_str(),
        )
    }

    /// Get income statements for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol (e.g., "AAPL")
    /// * `period` - Annual or quarterly
    /// * `limit` - Number of periods to return (most recent first)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn income_statement(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<IncomeStatement>> {
        self.get(&Self::statement_endpoint("income-statement", symbol, period, limit))
            .await
    }

    /// Get balance sheets for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn balance_sheet(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<BalanceSheet>> {
        self.get(&Self::statement_endpoint("balance-sheet-statement", symbol, period, limit))
            .await
    }

    /// Get cash flow statements for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn cash_flow(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<CashFlowStatement>> {
        self.get(&Self::statement_endpoint("cash-flow-statement", symbol, period, limit))
            .await
    }

    /// Get key metrics for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn key_metrics(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<KeyMetrics>> {
        self.get(&Self::statement_endpoint("key-metrics", symbol, period, limit))
            .await
    }

    /// Get financial ratios for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn ratios(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<FinancialRatios>> {
        self.get(&Self::statement_endpoint("ratios", symbol, period, limit))
            .await
    }

    /// Get analyst consensus estimates for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn analyst_estimates(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<AnalystEstimate>> {
        self.get(&Self::statement_endpoint("analyst-estimates", symbol, period, limit))
            .await
    }

    /// Get real-time quote for a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::SymbolNotFound`] if the API returns no quote.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let endpoint = format!("quote?symbol={}", symbol.to_uppercase());
        let quotes: Vec<Quote> = self.get(&endpoint).await?;
        quotes
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Get historical daily prices for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol
    /// * `from` - Start date
    /// * `to` - End date
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn historical_prices(
        &self,
        symbol: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<HistoricalPrice>> {
        let mut params = String::new();
        if let Some(f) = from {
            params.push_str(&format!("&from={}", f.format("%Y-%m-%d")));
        }
        if let Some(t) = to {
            params.push_str(&format!("&to={}", t.format("%Y-%m-%d")));
        }

        let endpoint = format!(
            "historical-price-eod/full?symbol={}{}",
            symbol.to_uppercase(),
            params
        );
        // The stable API returns a flat array, not a wrapped response
        self.get(&endpoint).await
    }

    /// Get the inputs for valuation multiples.
    ///
    /// Fetches the quote, latest key metrics and ratios, annual analyst
    /// estimates and the last two income statements in parallel.
    ///
    /// # Errors
    ///
    /// Returns the first error of any request.
    pub async fn valuation_data(&self, symbol: &str) -> Result<ValuationData> {
        let (quote, metrics, ratios, estimates, income) = tokio::join!(
            self.quote(symbol),
            self.key_metrics(symbol, Period::Annual, Some(1)),
            self.ratios(symbol, Period::Annual, Some(1)),
            self.analyst_estimates(symbol, Period::Annual, Some(10)),
            self.income_statement(symbol, Period::Annual, Some(2)),
        );

        Ok(ValuationData {
            quote: quote?,
            key_metrics: metrics?.into_iter().next(),
            ratios: ratios?.into_iter().next(),
            estimates: estimates?,
            income_statements: income?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = FmpClient::new("test_key");
        assert_eq!(
            client.url("quote?symbol=AAPL"),
            "https://financialmodelingprep.com/stable/quote?symbol=AAPL&apikey=test_key"
        );
        assert_eq!(
            client.url("income-statement?symbol=AAPL&period=annual"),
            "https://financialmodelingprep.com/stable/income-statement?symbol=AAPL&period=annual&apikey=test_key"
        );
    }

    #[test]
    fn test_base_url_override() {
        let client = FmpClient::new("k").with_base_url("http://127.0.0.1:9000/");
        assert_eq!(client.url("ratios"), "http://127.0.0.1:9000/ratios?apikey=k");
    }

    #[test]
    fn test_statement_endpoint() {
        assert_eq!(
            FmpClient::statement_endpoint("ratios", "msft", Period::Annual, Some(1)),
            "ratios?symbol=MSFT&period=annual&limit=1"
        );
        assert_eq!(
            FmpClient::statement_endpoint("income-statement", "aapl", Period::Quarter, None),
            "income-statement?symbol=AAPL&period=quarter"
        );
    }

    #[test]
    fn test_periods_default() {
        assert_eq!(FmpClient::new("k").periods(), DEFAULT_PERIODS);
        assert_eq!(FmpClient::new("k").with_periods(3).periods(), 3);
    }
}
