//! Statistical utility functions for price and statement series.
//!
//! This module provides the small numeric building blocks shared by the
//! metric derivation layer: guarded division, simple returns, mean and
//! population standard deviation, and running maxima.

use ndarray::Array1;

/// Divide `numerator` by `denominator`, returning `None` on a zero
/// denominator or a non-finite result.
///
/// # Examples
///
/// ```
/// use cuenta_traits::stats::safe_div;
///
/// assert_eq!(safe_div(20.0, 100.0), Some(0.2));
/// assert_eq!(safe_div(1.0, 0.0), None);
/// ```
pub fn safe_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let result = numerator / denominator;
    result.is_finite().then_some(result)
}

/// Simple period-over-period returns `x[i+1] / x[i] - 1`.
///
/// Returns `n - 1` values for `n` inputs. A zero base yields `NaN` at that
/// position so the output stays aligned with the input.
///
/// # Edge Cases
///
/// - Empty or single-value input: returns an empty vector
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| if w[0] == 0.0 { f64::NAN } else { w[1] / w[0] - 1.0 })
        .collect()
}

/// Arithmetic mean of the finite values in `values`.
///
/// Returns `None` when no finite value is present.
pub fn mean(values: &[f64]) -> Option<f64> {
    let finite = finite_array(values);
    finite.mean()
}

/// Population standard deviation (N denominator) of the finite values.
///
/// Returns `None` when no finite value is present.
///
/// # Examples
///
/// ```
/// use cuenta_traits::stats::population_std;
///
/// let std = population_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((std - 2.0).abs() < 1e-12);
/// ```
pub fn population_std(values: &[f64]) -> Option<f64> {
    let finite = finite_array(values);
    if finite.is_empty() {
        return None;
    }
    Some(finite.std(0.0))
}

/// Running maximum of `values`, element by element.
pub fn running_max(values: &[f64]) -> Vec<f64> {
    let mut peak = f64::NEG_INFINITY;
    values
        .iter()
        .map(|&v| {
            peak = peak.max(v);
            peak
        })
        .collect()
}

fn finite_array(values: &[f64]) -> Array1<f64> {
    values.iter().copied().filter(|x| x.is_finite()).collect()
}
