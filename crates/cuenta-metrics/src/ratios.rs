//! Core financial ratios.
//!
//! Each ratio is evaluated per period index (0 = most recent). The ratio set
//! uses period 0 for the value and period 1 for the delta.

use crate::{
    labels::{self, resolve_at},
    metric::{DeltaKind, MetricSet, MetricValue},
    names,
    registry::RATIO_LABELS,
};
use cuenta_traits::{FinancialStatements, stats::safe_div};

/// Net income over revenue.
pub fn profit_margin(statements: &FinancialStatements, period: usize) -> Option<f64> {
    let income = &statements.income;
    safe_div(
        resolve_at(income, labels::NET_INCOME, period)?,
        resolve_at(income, labels::REVENUE, period)?,
    )
}

/// Net income over stockholders' equity.
pub fn return_on_equity(statements: &FinancialStatements, period: usize) -> Option<f64> {
    safe_div(
        resolve_at(&statements.income, labels::NET_INCOME, period)?,
        resolve_at(&statements.balance, labels::EQUITY, period)?,
    )
}

/// Liabilities over stockholders' equity.
///
/// Uses `Total Liabilities` when that row exists. Otherwise liabilities are
/// current plus non-current; both legs must be present.
pub fn debt_to_equity(statements: &FinancialStatements, period: usize) -> Option<f64> {
    let balance = &statements.balance;
    let liabilities = if labels::is_present(balance, labels::TOTAL_LIABILITIES) {
        resolve_at(balance, labels::TOTAL_LIABILITIES, period)?
    } else {
        resolve_at(balance, labels::CURRENT_LIABILITIES, period)?
            + resolve_at(balance, labels::NON_CURRENT_LIABILITIES, period)?
    };
    safe_div(liabilities, resolve_at(balance, labels::EQUITY, period)?)
}

/// Current assets over current liabilities.
pub fn current_ratio(statements: &FinancialStatements, period: usize) -> Option<f64> {
    let balance = &statements.balance;
    safe_div(
        resolve_at(balance, labels::CURRENT_ASSETS, period)?,
        resolve_at(balance, labels::CURRENT_LIABILITIES, period)?,
    )
}

/// Current assets less inventory, over current liabilities.
pub fn quick_ratio(statements: &FinancialStatements, period: usize) -> Option<f64> {
    let balance = &statements.balance;
    let current_assets = resolve_at(balance, labels::CURRENT_ASSETS, period)?;
    let inventory = resolve_at(balance, labels::INVENTORY, period)?;
    safe_div(
        current_assets - inventory,
        resolve_at(balance, labels::CURRENT_LIABILITIES, period)?,
    )
}

type RatioFn = fn(&FinancialStatements, usize) -> Option<f64>;

const RATIOS: [(&str, RatioFn, DeltaKind); 5] = [
    (names::PROFIT_MARGIN, profit_margin, DeltaKind::Percent),
    (names::ROE, return_on_equity, DeltaKind::Percent),
    (names::DEBT_TO_EQUITY, debt_to_equity, DeltaKind::Absolute),
    (names::CURRENT_RATIO, current_ratio, DeltaKind::Absolute),
    (names::QUICK_RATIO, quick_ratio, DeltaKind::Absolute),
];

/// Compute the core ratio set with deltas against the prior period.
pub fn calculate_ratios(statements: &FinancialStatements) -> MetricSet {
    let values = RATIOS
        .iter()
        .map(|(name, ratio, kind)| {
            MetricValue::new(*name, ratio(statements, 0)).with_delta(*kind, ratio(statements, 1))
        })
        .collect();
    MetricSet::ordered(RATIO_LABELS, values)
}
