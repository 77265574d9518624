//! [`FundamentalsProvider`] implementation backed by FMP.

use crate::{FmpClient, FmpError, Period, convert};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use cuenta_traits::{
    CompanyInfo, CuentaError, FinancialStatements, FundamentalsProvider, PriceHistory, Result,
};
use tracing::debug;

#[async_trait]
impl FundamentalsProvider for FmpClient {
    fn name(&self) -> &str {
        "fmp"
    }

    async fn statements(&self, symbol: &str) -> Result<FinancialStatements> {
        let limit = Some(self.periods());
        let (income, balance, cash) = tokio::join!(
            self.income_statement(symbol, Period::Annual, limit),
            self.balance_sheet(symbol, Period::Annual, limit),
            self.cash_flow(symbol, Period::Annual, limit),
        );
        let (income, balance, cash) = (income?, balance?, cash?);
        debug!(
            symbol,
            income = income.len(),
            balance = balance.len(),
            cash_flow = cash.len(),
            "fetched statements"
        );
        Ok(convert::statements(&income, &balance, &cash)?)
    }

    async fn price_history(&self, symbol: &str, days: u32) -> Result<PriceHistory> {
        let to = Utc::now().date_naive();
        let from = to - Duration::days(i64::from(days));
        let bars = self.historical_prices(symbol, Some(from), Some(to)).await?;
        debug!(symbol, bars = bars.len(), "fetched price history");
        Ok(convert::price_history(&bars)?)
    }

    async fn company_info(&self, symbol: &str) -> Result<CompanyInfo> {
        let data = self.valuation_data(symbol).await?;
        Ok(convert::company_info(&data))
    }

    async fn ticker_exists(&self, symbol: &str) -> Result<bool> {
        match self.quote(symbol).await {
            Ok(quote) => Ok(quote.price.is_some()),
            Err(FmpError::SymbolNotFound(_)) => Ok(false),
            Err(e) => Err(CuentaError::from(e)),
        }
    }
}
