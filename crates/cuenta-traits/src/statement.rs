//! Financial statement tables.
//!
//! A [`StatementTable`] is keyed by line-item label (row) and fiscal period
//! (column). Columns are held in descending recency: column 0 is the most
//! recent period. Providers label identical concepts differently, so callers
//! look rows up through alias lists rather than a single fixed name.

use crate::{CuentaError, Date, Result, TimeSeries};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single financial statement: line items by fiscal period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    /// Period end dates, most recent first.
    periods: Vec<Date>,
    /// Line item label to one cell per period.
    rows: BTreeMap<String, Vec<Option<f64>>>,
}

impl StatementTable {
    /// Create an empty table over the given periods.
    ///
    /// # Errors
    ///
    /// Returns [`CuentaError::InvalidData`] if `periods` is not strictly
    /// descending.
    pub fn new(periods: Vec<Date>) -> Result<Self> {
        if periods.windows(2).any(|w| w[0] <= w[1]) {
            return Err(CuentaError::InvalidData(
                "statement periods must be strictly descending".to_string(),
            ));
        }
        Ok(Self {
            periods,
            rows: BTreeMap::new(),
        })
    }

    /// Insert or replace a line item row.
    ///
    /// Non-finite cells are stored as missing.
    ///
    /// # Errors
    ///
    /// Returns [`CuentaError::InvalidData`] if the row length does not match
    /// the number of periods.
    pub fn insert_row(&mut self, label: impl Into<String>, values: Vec<Option<f64>>) -> Result<()> {
        let label = label.into();
        if values.len() != self.periods.len() {
            return Err(CuentaError::InvalidData(format!(
                "row '{label}' has {} cells but the table has {} periods",
                values.len(),
                self.periods.len()
            )));
        }
        let values = values
            .into_iter()
            .map(|v| v.filter(|x| x.is_finite()))
            .collect();
        self.rows.insert(label, values);
        Ok(())
    }

    /// Builder form of [`StatementTable::insert_row`].
    ///
    /// # Errors
    ///
    /// Same as [`StatementTable::insert_row`].
    pub fn with_row(mut self, label: impl Into<String>, values: Vec<Option<f64>>) -> Result<Self> {
        self.insert_row(label, values)?;
        Ok(self)
    }

    /// Period end dates, most recent first.
    pub fn periods(&self) -> &[Date] {
        &self.periods
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no line items.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether `label` is present in the row index.
    pub fn has_row(&self, label: &str) -> bool {
        self.rows.contains_key(label)
    }

    /// The cells of a row, most recent period first.
    pub fn row(&self, label: &str) -> Option<&[Option<f64>]> {
        self.rows.get(label).map(Vec::as_slice)
    }

    /// All line item labels, in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// A row as a fiscal-year series, oldest first, with missing cells dropped.
    pub fn row_series(&self, label: &str) -> Option<TimeSeries> {
        let row = self.rows.get(label)?;
        Some(TimeSeries::from_points(
            self.periods
                .iter()
                .zip(row)
                .filter_map(|(date, cell)| cell.map(|v| (date.year(), v))),
        ))
    }
}

/// The three statements a provider returns for a ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// Income statement.
    pub income: StatementTable,
    /// Balance sheet.
    pub balance: StatementTable,
    /// Cash flow statement.
    pub cash_flow: StatementTable,
}

impl FinancialStatements {
    /// Whether all three statements are empty.
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.balance.is_empty() && self.cash_flow.is_empty()
    }
}
