//! Daily price history.

use crate::{CuentaError, Date, Result};
use polars::prelude::*;

/// Days between 0001-01-01 (CE day 1) and the Unix epoch, which is how
/// Polars stores `Date` values.
pub const CE_TO_UNIX_EPOCH_DAYS: i32 = 719_163;

/// Container for a ticker's daily price history.
///
/// `PriceHistory` wraps a Polars DataFrame sorted oldest to newest.
///
/// # Expected Schema
///
/// - `date`: trading date (`Date`)
/// - `close`: closing price (`f64`)
/// - additional columns (`open`, `volume`, ...) are carried along untouched
///
/// # Example
///
/// ```no_run
/// use cuenta_traits::{Date, PriceHistory};
///
/// let history = PriceHistory::from_points(&[
///     (Date::from_ymd_opt(2024, 1, 2).unwrap(), 185.6),
///     (Date::from_ymd_opt(2024, 1, 3).unwrap(), 184.3),
/// ])
/// .unwrap();
/// assert_eq!(history.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PriceHistory {
    data: DataFrame,
}

impl PriceHistory {
    /// Required columns.
    pub const REQUIRED_COLUMNS: [&'static str; 2] = ["date", "close"];

    /// Wrap a DataFrame, validating the schema and sorting by date.
    ///
    /// # Errors
    ///
    /// Returns [`CuentaError::MissingColumn`] if `date` or `close` is absent.
    pub fn new(data: DataFrame) -> Result<Self> {
        for col in Self::REQUIRED_COLUMNS {
            if !data.get_column_names().iter().any(|s| s.as_str() == col) {
                return Err(CuentaError::MissingColumn(col.to_string()));
            }
        }
        let data = data.sort(["date"], SortMultipleOptions::default())?;
        Ok(Self { data })
    }

    /// Build a history from `(date, close)` pairs in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if the DataFrame cannot be constructed.
    pub fn from_points(points: &[(Date, f64)]) -> Result<Self> {
        let dates: Vec<Date> = points.iter().map(|(d, _)| *d).collect();
        let closes: Vec<f64> = points.iter().map(|(_, c)| *c).collect();
        let data = df! {
            "date" => dates,
            "close" => closes,
        }?;
        Self::new(data)
    }

    /// An empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if the DataFrame cannot be constructed.
    pub fn empty() -> Result<Self> {
        Self::from_points(&[])
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.data.height()
    }

    /// Whether the history has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }

    /// `(date, close)` rows oldest first, skipping rows with a null in
    /// either column.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns have an unexpected dtype.
    pub fn points(&self) -> Result<Vec<(Date, f64)>> {
        let dates = self.data.column("date")?.as_materialized_series().date()?;
        let closes = self.data.column("close")?.as_materialized_series().f64()?;

        Ok(dates
            .into_iter()
            .zip(closes.into_iter())
            .filter_map(|(d, c): (Option<i32>, Option<f64>)| {
                let date = Date::from_num_days_from_ce_opt(d? + CE_TO_UNIX_EPOCH_DAYS)?;
                Some((date, c?))
            })
            .collect())
    }

    /// Closing prices oldest first, skipping nulls.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns have an unexpected dtype.
    pub fn closes(&self) -> Result<Vec<f64>> {
        Ok(self.points()?.into_iter().map(|(_, c)| c).collect())
    }
}

impl AsRef<DataFrame> for PriceHistory {
    fn as_ref(&self) -> &DataFrame {
        &self.data
    }
}
