use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Round `value` to `decimals` decimal places, ties to even.
///
/// ```text
/// round_to(0.125, 2) -> 0.12
/// round_to(0.135, 2) -> 0.14
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Total order on `f64` that places every NaN after every number.
pub fn cmp_nan_last(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(b),
    }
}

/// Sort ascending, NaN last.
pub fn sort_nan_last(values: &mut [f64]) {
    values.sort_by(cmp_nan_last);
}

/// Minimum and maximum of `values`, or `None` if empty.
///
/// NaN propagates: if any value is NaN, both bounds are NaN.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    if values.iter().any(|v| v.is_nan()) {
        return Some((f64::NAN, f64::NAN));
    }
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((lo, hi))
}

/// Min-max normalization to `[0, 1]`.
///
/// ```text
/// v -> (v - min) / (max - min)
/// ```
///
/// `what` names the collection in error messages.
pub fn normalize(values: &[f64], what: &'static str) -> Result<Vec<f64>> {
    let (lo, hi) = min_max(values).ok_or(Error::EmptyInput { what })?;
    if hi == lo {
        return Err(Error::DegenerateRange { what, value: lo });
    }
    let width = hi - lo;
    Ok(values.iter().map(|v| (v - lo) / width).collect())
}

/// Index of the first value strictly greater than `threshold`.
pub fn first_exceeding(values: &[f64], threshold: f64) -> Option<usize> {
    values.iter().position(|&v| v > threshold)
}
