//! Mapping of FMP responses onto cuenta tables.
//!
//! FMP reports camelCase fields per period; cuenta works on statement tables
//! keyed by line-item label. Each statement has a fixed field-to-label map.
//! A field that is missing in every period produces no row at all, so
//! metric formulas see an absent line item rather than a column of zeros.

use crate::{
    BalanceSheet, CashFlowStatement, HistoricalPrice, IncomeStatement, Result, ValuationData,
};
use chrono::NaiveDate;
use cuenta_traits::{
    CompanyInfo, Date, FinancialStatements, PriceHistory, StatementTable, info_keys,
};
use polars::prelude::*;

type RowMap<T> = [(&'static str, fn(&T) -> Option<f64>)];

const INCOME_ROWS: &RowMap<IncomeStatement> = &[
    ("Total Revenue", |s| s.revenue),
    ("Cost Of Revenue", |s| s.cost_of_revenue),
    ("Gross Profit", |s| s.gross_profit),
    ("Operating Income", |s| s.operating_income),
    ("EBIT", |s| s.ebit),
    ("EBITDA", |s| s.ebitda),
    ("Interest Expense", |s| s.interest_expense),
    ("Net Income", |s| s.net_income),
    ("Basic EPS", |s| s.eps),
    ("Diluted EPS", |s| s.eps_diluted),
];

const BALANCE_ROWS: &RowMap<BalanceSheet> = &[
    ("Total Assets", |s| s.total_assets),
    ("Total Current Assets", |s| s.total_current_assets),
    ("Cash And Cash Equivalents", |s| s.cash_and_cash_equivalents),
    ("Inventory", |s| s.inventory),
    ("Total Liabilities", |s| s.total_liabilities),
    ("Current Liabilities", |s| s.total_current_liabilities),
    ("Total Non Current Liabilities", |s| s.total_non_current_liabilities),
    ("Total Debt", |s| s.total_debt),
    ("Stockholders Equity", |s| s.total_stockholders_equity),
];

const CASH_FLOW_ROWS: &RowMap<CashFlowStatement> = &[
    ("Net Income", |s| s.net_income),
    ("Operating Cash Flow", |s| s.operating_cash_flow),
    ("Capital Expenditure", |s| s.capital_expenditure),
    ("Dividends Paid", |s| s.dividends_paid),
];

/// Build a statement table from per-period records.
///
/// Records with an unparsable date are skipped. Periods are ordered most
/// recent first; when two records share a date the first one wins.
fn build_table<T>(
    records: &[T],
    date_of: impl Fn(&T) -> Option<NaiveDate>,
    rows: &RowMap<T>,
) -> Result<StatementTable> {
    let mut dated: Vec<(Date, &T)> = records
        .iter()
        .filter_map(|r| date_of(r).map(|d| (d, r)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.dedup_by(|later, earlier| later.0 == earlier.0);

    let mut table = StatementTable::new(dated.iter().map(|(d, _)| *d).collect())?;
    for (label, field) in rows {
        let cells: Vec<Option<f64>> = dated.iter().map(|(_, r)| field(r)).collect();
        if cells.iter().any(Option::is_some) {
            table.insert_row(*label, cells)?;
        }
    }
    Ok(table)
}

/// Assemble the three statements into cuenta tables.
///
/// # Errors
///
/// Returns an error if a table cannot be constructed.
pub fn statements(
    income: &[IncomeStatement],
    balance: &[BalanceSheet],
    cash_flow: &[CashFlowStatement],
) -> Result<FinancialStatements> {
    Ok(FinancialStatements {
        income: build_table(income, IncomeStatement::parsed_date, INCOME_ROWS)?,
        balance: build_table(balance, BalanceSheet::parsed_date, BALANCE_ROWS)?,
        cash_flow: build_table(cash_flow, CashFlowStatement::parsed_date, CASH_FLOW_ROWS)?,
    })
}

/// Convert daily bars into a [`PriceHistory`] DataFrame.
///
/// Bars with an unparsable date are skipped.
///
/// # Errors
///
/// Returns an error if the DataFrame cannot be constructed.
pub fn price_history(bars: &[HistoricalPrice]) -> Result<PriceHistory> {
    let bars: Vec<(Date, &HistoricalPrice)> = bars
        .iter()
        .filter_map(|b| b.parsed_date().map(|d| (d, b)))
        .collect();

    let df = df! {
        "date" => bars.iter().map(|(d, _)| *d).collect::<Vec<_>>(),
        "open" => bars.iter().map(|(_, b)| b.open).collect::<Vec<_>>(),
        "high" => bars.iter().map(|(_, b)| b.high).collect::<Vec<_>>(),
        "low" => bars.iter().map(|(_, b)| b.low).collect::<Vec<_>>(),
        "close" => bars.iter().map(|(_, b)| b.close).collect::<Vec<_>>(),
        "volume" => bars.iter().map(|(_, b)| b.volume).collect::<Vec<_>>(),
    }
    .map_err(cuenta_traits::CuentaError::from)?;

    Ok(PriceHistory::new(df)?)
}

/// Flatten valuation inputs into a [`CompanyInfo`] mapping.
///
/// `forwardPE` is the current price over the consensus EPS of the first
/// fiscal period ending after the latest reported statement.
/// `earningsGrowth` is the change between the last two annual net incomes,
/// relative to the older one.
pub fn company_info(data: &ValuationData) -> CompanyInfo {
    let quote = &data.quote;
    let mut info = CompanyInfo::new();
    if let Some(name) = &quote.name {
        info = info.with_short_name(name.clone());
    }

    info.insert_opt(info_keys::REGULAR_MARKET_PRICE, quote.price);
    info.insert_opt(info_keys::TRAILING_PE, quote.pe);

    let market_cap = quote
        .market_cap
        .or_else(|| data.key_metrics.as_ref().and_then(|m| m.market_cap));
    info.insert_opt(info_keys::MARKET_CAP, market_cap);

    if let Some(metrics) = &data.key_metrics {
        info.insert_opt(info_keys::ENTERPRISE_VALUE, metrics.enterprise_value);
        info.insert_opt(info_keys::EV_TO_EBITDA, metrics.ev_to_ebitda);
        info.insert_opt(info_keys::EV_TO_REVENUE, metrics.ev_to_sales);
    }

    if let Some(ratios) = &data.ratios {
        if quote.pe.is_none() {
            info.insert_opt(info_keys::TRAILING_PE, ratios.price_to_earnings_ratio);
        }
        info.insert_opt(info_keys::PRICE_TO_BOOK, ratios.price_to_book_ratio);
        info.insert_opt(info_keys::PEG_RATIO, ratios.price_to_earnings_growth_ratio);
    }

    info.insert_opt(info_keys::FORWARD_PE, forward_pe(data));
    info.insert_opt(info_keys::EARNINGS_GROWTH, earnings_growth(&data.income_statements));
    info
}

fn forward_pe(data: &ValuationData) -> Option<f64> {
    let price = data.quote.price?;
    let last_reported = data
        .income_statements
        .iter()
        .filter_map(IncomeStatement::parsed_date)
        .max();

    let eps = data
        .estimates
        .iter()
        .filter_map(|e| Some((e.parsed_date()?, e.eps_avg?)))
        .filter(|(date, _)| last_reported.is_none_or(|last| *date > last))
        .min_by_key(|(date, _)| *date)
        .map(|(_, eps)| eps)?;

    (eps > 0.0).then(|| price / eps)
}

fn earnings_growth(income: &[IncomeStatement]) -> Option<f64> {
    let mut dated: Vec<(Date, f64)> = income
        .iter()
        .filter_map(|s| Some((s.parsed_date()?, s.net_income?)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    match dated.as_slice() {
        [(_, current), (_, previous), ..] if *previous != 0.0 => {
            Some((current - previous) / previous.abs())
        }
        _ => None,
    }
}
