//! Cash flow and efficiency metrics per fiscal year.
//!
//! Unlike the ratio set these are full series: every fiscal year present in
//! all inputs yields one point. A required line item missing under every
//! alias makes the whole series unavailable; a zero denominator only drops
//! that year.

use crate::{labels, names, registry::EFFICIENCY_LABELS};
use cuenta_traits::{FinancialStatements, FiscalYear, StatementTable, TimeSeries, stats::safe_div};
use serde::{Deserialize, Serialize};

/// Operating cash flow less capital expenditure.
///
/// Capital expenditure is subtracted by magnitude, so providers reporting it
/// as a negative outflow and those reporting a positive amount agree.
pub fn free_cash_flow(cash_flow: &StatementTable) -> Option<TimeSeries> {
    let operating = labels::resolve_series(cash_flow, labels::OPERATING_CASH_FLOW)?;
    let capex = labels::resolve_series(cash_flow, labels::CAPITAL_EXPENDITURE)?;
    Some(operating.zip_with(&capex, |ocf, capex| Some(ocf - capex.abs())))
}

/// Free cash flow over revenue.
pub fn fcf_margin(statements: &FinancialStatements) -> Option<TimeSeries> {
    let fcf = free_cash_flow(&statements.cash_flow)?;
    let revenue = labels::resolve_series(&statements.income, labels::REVENUE)?;
    Some(fcf.zip_with(&revenue, safe_div))
}

/// Operating income over revenue.
pub fn operating_margin(statements: &FinancialStatements) -> Option<TimeSeries> {
    let income = &statements.income;
    let operating = labels::resolve_series(income, labels::OPERATING_INCOME)?;
    let revenue = labels::resolve_series(income, labels::REVENUE)?;
    Some(operating.zip_with(&revenue, safe_div))
}

/// Revenue over total assets.
pub fn asset_turnover(statements: &FinancialStatements) -> Option<TimeSeries> {
    let revenue = labels::resolve_series(&statements.income, labels::REVENUE)?;
    let assets = labels::resolve_series(&statements.balance, labels::TOTAL_ASSETS)?;
    Some(revenue.zip_with(&assets, safe_div))
}

/// EBIT over interest expense.
pub fn interest_coverage(statements: &FinancialStatements) -> Option<TimeSeries> {
    let income = &statements.income;
    let ebit = labels::resolve_series(income, labels::EBIT)?;
    let interest = labels::resolve_series(income, labels::INTEREST_EXPENSE)?;
    Some(ebit.zip_with(&interest, safe_div))
}

/// The efficiency series of one company, in label order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyMetrics {
    series: Vec<(String, Option<TimeSeries>)>,
}

impl EfficiencyMetrics {
    /// Look up a series by label. `None` if the label is unknown or the
    /// series is unavailable.
    pub fn get(&self, label: &str) -> Option<&TimeSeries> {
        self.series
            .iter()
            .find(|(name, _)| name == label)
            .and_then(|(_, s)| s.as_ref())
    }

    /// The most recent value of a series.
    pub fn latest(&self, label: &str) -> Option<(FiscalYear, f64)> {
        self.get(label)?.latest()
    }

    /// Iterate `(label, series)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&TimeSeries>)> {
        self.series.iter().map(|(name, s)| (name.as_str(), s.as_ref()))
    }
}

/// Compute every cash flow and efficiency series.
pub fn calculate_efficiency(statements: &FinancialStatements) -> EfficiencyMetrics {
    let series = EFFICIENCY_LABELS
        .iter()
        .map(|label| {
            let values = match *label {
                names::FREE_CASH_FLOWS => free_cash_flow(&statements.cash_flow),
                names::FCF_MARGIN => fcf_margin(statements),
                names::OPERATING_MARGIN => operating_margin(statements),
                names::ASSET_TURNOVER => asset_turnover(statements),
                names::INTEREST_COVERAGE => interest_coverage(statements),
                _ => None,
            };
            ((*label).to_string(), values)
        })
        .collect();
    EfficiencyMetrics { series }
}
