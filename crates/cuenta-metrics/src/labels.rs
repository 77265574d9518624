//! Line-item label resolution.
//!
//! Providers label identical concepts differently across tickers and periods.
//! Each concept is looked up through an ordered alias list; the first alias
//! present in the table's row index wins, even if its cells are empty.

use cuenta_traits::{StatementTable, TimeSeries};

/// Revenue.
pub const REVENUE: &[&str] = &["Total Revenue", "Revenue", "Operating Revenue"];
/// Net income.
pub const NET_INCOME: &[&str] = &["Net Income", "Net Income Common Stockholders"];
/// Stockholders' equity.
pub const EQUITY: &[&str] = &[
    "Stockholders Equity",
    "Total Stockholders Equity",
    "Common Stock Equity",
];
/// Total liabilities.
pub const TOTAL_LIABILITIES: &[&str] = &["Total Liabilities"];
/// Current liabilities.
pub const CURRENT_LIABILITIES: &[&str] = &["Current Liabilities", "Total Current Liabilities"];
/// Non-current liabilities.
pub const NON_CURRENT_LIABILITIES: &[&str] = &[
    "Total Non Current Liabilities Net Minority Interest",
    "Total Non Current Liabilities",
];
/// Current assets.
pub const CURRENT_ASSETS: &[&str] = &["Total Current Assets", "Current Assets"];
/// Inventory.
pub const INVENTORY: &[&str] = &["Inventory"];
/// Total assets.
pub const TOTAL_ASSETS: &[&str] = &["Total Assets"];
/// Operating income.
pub const OPERATING_INCOME: &[&str] = &["Operating Income"];
/// Earnings before interest and taxes.
pub const EBIT: &[&str] = &["EBIT"];
/// Interest expense.
pub const INTEREST_EXPENSE: &[&str] = &["Interest Expense"];
/// Operating cash flow.
pub const OPERATING_CASH_FLOW: &[&str] = &[
    "Total Cash From Operating Activities",
    "Operating Cash Flow",
];
/// Capital expenditure.
pub const CAPITAL_EXPENDITURE: &[&str] = &[
    "Capital Expenditures",
    "Capital Expenditure",
    "Purchase Of PPE",
];
/// Diluted earnings per share.
pub const DILUTED_EPS: &[&str] = &["Diluted EPS"];

/// The row of the first alias present in `table`.
pub fn resolve<'a>(table: &'a StatementTable, aliases: &[&str]) -> Option<&'a [Option<f64>]> {
    aliases.iter().find_map(|label| table.row(label))
}

/// The cell at `period` (0 = most recent) of the first alias present.
pub fn resolve_at(table: &StatementTable, aliases: &[&str], period: usize) -> Option<f64> {
    resolve(table, aliases)?.get(period).copied().flatten()
}

/// The first present alias as a fiscal-year series, oldest first.
pub fn resolve_series(table: &StatementTable, aliases: &[&str]) -> Option<TimeSeries> {
    aliases
        .iter()
        .find(|label| table.has_row(label))
        .and_then(|label| table.row_series(label))
}

/// Whether any alias is present in `table`.
pub fn is_present(table: &StatementTable, aliases: &[&str]) -> bool {
    aliases.iter().any(|label| table.has_row(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuenta_traits::Date;

    fn table() -> StatementTable {
        StatementTable::new(vec![
            Date::from_ymd_opt(2024, 12, 31).unwrap(),
            Date::from_ymd_opt(2023, 12, 31).unwrap(),
        ])
        .unwrap()
        .with_row("Revenue", vec![Some(200.0), Some(180.0)])
        .unwrap()
        .with_row("Operating Revenue", vec![Some(1.0), Some(1.0)])
        .unwrap()
        .with_row("Total Stockholders Equity", vec![None, Some(50.0)])
        .unwrap()
    }

    #[test]
    fn test_first_present_alias_wins() {
        let t = table();
        assert_eq!(resolve(&t, REVENUE), Some(&[Some(200.0), Some(180.0)][..]));
        assert_eq!(resolve_at(&t, REVENUE, 1), Some(180.0));
    }

    #[test]
    fn test_missing_under_every_alias() {
        let t = table();
        assert_eq!(resolve(&t, NET_INCOME), None);
        assert_eq!(resolve_at(&t, NET_INCOME, 0), None);
        assert!(resolve_series(&t, NET_INCOME).is_none());
        assert!(!is_present(&t, NET_INCOME));
    }

    #[test]
    fn test_present_alias_with_empty_cell() {
        let t = table();
        assert!(is_present(&t, EQUITY));
        assert_eq!(resolve_at(&t, EQUITY, 0), None);
        assert_eq!(resolve_at(&t, EQUITY, 1), Some(50.0));
        assert_eq!(resolve_at(&t, EQUITY, 5), None);
    }

    #[test]
    fn test_resolve_series() {
        let t = table();
        let series = resolve_series(&t, REVENUE).unwrap();
        assert_eq!(series.years(), vec![2023, 2024]);
        assert_eq!(series.values(), vec![180.0, 200.0]);
    }
}
