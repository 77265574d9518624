//! Period-over-period growth of key line items.

use crate::{efficiency, labels, names, registry::GROWTH_LABELS};
use cuenta_traits::{FinancialStatements, TimeSeries, stats::pct_change};
use serde::{Deserialize, Serialize};

/// Growth of one line item: the source series and its growth rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthMetric {
    /// Growth label, one of the growth view labels.
    pub label: String,
    /// Line-item values per fiscal year, oldest first; `None` if unavailable.
    pub source: Option<TimeSeries>,
    /// Growth rates keyed by the later year of each pair.
    pub growth: Option<TimeSeries>,
}

impl GrowthMetric {
    /// Whether any data is available for the label.
    pub const fn is_available(&self) -> bool {
        self.source.is_some()
    }

    /// The most recent growth rate.
    pub fn latest_growth(&self) -> Option<f64> {
        self.growth
            .as_ref()?
            .values()
            .into_iter()
            .rev()
            .find(|g| g.is_finite())
    }
}

/// Resolve the fiscal-year series behind a growth label.
///
/// `Free Cash Flow` comes from the income statement when it carries such a
/// row, and is otherwise computed from the cash-flow statement.
pub fn growth_source(statements: &FinancialStatements, label: &str) -> Option<TimeSeries> {
    let income = &statements.income;
    match label {
        names::TOTAL_REVENUE => labels::resolve_series(income, labels::REVENUE),
        names::NET_INCOME => labels::resolve_series(income, labels::NET_INCOME),
        names::DILUTED_EPS => labels::resolve_series(income, labels::DILUTED_EPS),
        names::FREE_CASH_FLOW => income
            .row_series(names::FREE_CASH_FLOW)
            .or_else(|| efficiency::free_cash_flow(&statements.cash_flow)),
        _ => None,
    }
}

/// Year-over-year growth rates `s[y] / s[y - 1] - 1` over a fiscal-year series.
///
/// Each rate is keyed by the later year. A year whose predecessor is absent
/// from the series has no rate, so a gap never passes off a multi-year change
/// as one year's growth. A consecutive series of `n` points gives `n - 1`
/// rates. A zero base yields `NaN` at that position.
///
/// # Examples
///
/// ```
/// use cuenta_metrics::growth::growth_series;
/// use cuenta_traits::TimeSeries;
///
/// let revenue = TimeSeries::from_points([(2022, 100.0), (2023, 110.0), (2024, 121.0)]);
/// assert_eq!(growth_series(&revenue).years(), vec![2023, 2024]);
///
/// let gapped = TimeSeries::from_points([(2022, 100.0), (2024, 121.0)]);
/// assert!(growth_series(&gapped).is_empty());
/// ```
pub fn growth_series(series: &TimeSeries) -> TimeSeries {
    let points: Vec<_> = series.iter().collect();
    TimeSeries::from_points(points.windows(2).filter_map(|pair| {
        let ((prev_year, prev), (year, value)) = (pair[0], pair[1]);
        if year - prev_year != 1 {
            return None;
        }
        pct_change(&[prev, value]).pop().map(|rate| (year, rate))
    }))
}

/// Growth of every growth-view label, in label order.
pub fn calculate_growth(statements: &FinancialStatements) -> Vec<GrowthMetric> {
    GROWTH_LABELS
        .iter()
        .map(|label| {
            let source = growth_source(statements, label).filter(|s| !s.is_empty());
            let growth = source.as_ref().map(growth_series);
            GrowthMetric {
                label: (*label).to_string(),
                source,
                growth,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cuenta_traits::{Date, StatementTable};

    fn periods() -> Vec<Date> {
        vec![
            Date::from_ymd_opt(2024, 9, 30).unwrap(),
            Date::from_ymd_opt(2023, 9, 30).unwrap(),
            Date::from_ymd_opt(2022, 9, 30).unwrap(),
        ]
    }

    #[test]
    fn test_growth_series_revenue() {
        let revenue = TimeSeries::from_points([(2022, 100.0), (2023, 110.0), (2024, 121.0)]);
        let growth = growth_series(&revenue);

        assert_eq!(growth.len(), 2);
        assert_eq!(growth.years(), vec![2023, 2024]);
        assert_relative_eq!(growth.get(2023).unwrap(), 0.10, epsilon = 1e-12);
        assert_relative_eq!(growth.get(2024).unwrap(), 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_growth_series_length_is_n_minus_one() {
        for n in 0..6 {
            let series = TimeSeries::from_points((0..n).map(|i| (2000 + i, f64::from(i + 1))));
            assert_eq!(growth_series(&series).len(), (n as usize).saturating_sub(1));
        }
    }

    #[test]
    fn test_growth_skips_year_after_gap() {
        let series =
            TimeSeries::from_points([(2020, 80.0), (2021, 100.0), (2023, 150.0), (2024, 165.0)]);
        let growth = growth_series(&series);
        assert_eq!(growth.years(), vec![2021, 2024]);
        assert_relative_eq!(growth.get(2021).unwrap(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(growth.get(2024).unwrap(), 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_growth_null_middle_year_has_no_rate() {
        let income = StatementTable::new(periods())
            .unwrap()
            .with_row("Total Revenue", vec![Some(121.0), None, Some(100.0)])
            .unwrap();
        let statements = FinancialStatements {
            income,
            ..Default::default()
        };

        let revenue = &calculate_growth(&statements)[0];
        assert!(revenue.is_available());
        assert_eq!(revenue.source.as_ref().unwrap().years(), vec![2022, 2024]);
        assert!(revenue.growth.as_ref().unwrap().is_empty());
        assert_eq!(revenue.latest_growth(), None);
    }

    #[test]
    fn test_growth_zero_base_is_nan() {
        let series = TimeSeries::from_points([(2022, 0.0), (2023, 5.0)]);
        let growth = growth_series(&series);
        assert_eq!(growth.len(), 1);
        assert!(growth.get(2023).unwrap().is_nan());
    }

    #[test]
    fn test_growth_sorts_descending_statement_columns() {
        let income = StatementTable::new(periods())
            .unwrap()
            .with_row("Total Revenue", vec![Some(121.0), Some(110.0), Some(100.0)])
            .unwrap();
        let statements = FinancialStatements {
            income,
            ..Default::default()
        };

        let metrics = calculate_growth(&statements);
        assert_eq!(metrics.len(), 4);

        let revenue = &metrics[0];
        assert_eq!(revenue.label, "Total Revenue");
        assert_eq!(revenue.source.as_ref().unwrap().values(), vec![100.0, 110.0, 121.0]);
        assert_relative_eq!(revenue.latest_growth().unwrap(), 0.10, epsilon = 1e-12);

        // No net income, EPS or cash flow rows
        assert!(!metrics[1].is_available());
        assert!(!metrics[2].is_available());
        assert!(!metrics[3].is_available());
    }

    #[test]
    fn test_free_cash_flow_from_cash_flow_statement() {
        let cash_flow = StatementTable::new(periods())
            .unwrap()
            .with_row("Operating Cash Flow", vec![Some(130.0), Some(110.0), Some(100.0)])
            .unwrap()
            .with_row("Capital Expenditure", vec![Some(-10.0), Some(-10.0), None])
            .unwrap();
        let statements = FinancialStatements {
            cash_flow,
            ..Default::default()
        };

        let fcf = growth_source(&statements, names::FREE_CASH_FLOW).unwrap();
        assert_eq!(fcf.years(), vec![2023, 2024]);
        assert_eq!(fcf.values(), vec![100.0, 120.0]);
        assert_relative_eq!(growth_series(&fcf).get(2024).unwrap(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_label() {
        assert!(growth_source(&FinancialStatements::default(), "Beta").is_none());
    }
}
