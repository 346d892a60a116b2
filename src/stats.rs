//! Slice-level descriptive statistics.
//!
//! Every function validates its input before computing: an empty slice
//! yields [`StatsError::EmptyInput`] and the first NaN or infinite element
//! yields [`StatsError::InvalidElement`]. Nothing here mutates the caller's
//! data.
//!
//! # Algorithms
//!
//! - **Sum**: plain left-to-right accumulation in iteration order, so
//!   floating-point rounding is reproducible across calls.
//! - **Median**: sorts a copy under [`f64::total_cmp`], then takes the
//!   middle element or the [`f64::midpoint`] of the two middle elements.

use crate::error::StatsError;

/// Checks that `data` is non-empty and every element is finite.
///
/// # Errors
/// - [`StatsError::EmptyInput`] if `data` is empty.
/// - [`StatsError::InvalidElement`] for the first NaN or infinite element.
///
/// # Examples
/// ```
/// use u_describe::{check_finite, StatsError};
/// assert!(check_finite(&[1.0, 2.0]).is_ok());
/// assert_eq!(check_finite(&[]), Err(StatsError::EmptyInput));
/// ```
pub fn check_finite(data: &[f64]) -> Result<(), StatsError> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(StatsError::InvalidElement {
            index,
            value: data[index],
        }),
        None => Ok(()),
    }
}

/// Returns the arithmetic sum of `data`, accumulated left to right.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// - Fails on empty input or any non-finite element; see [`check_finite`].
/// - [`StatsError::Overflow`] if the running sum leaves the `f64` range.
///
/// Use [`sum_or`] when an empty slice should produce a default instead.
///
/// # Examples
/// ```
/// use u_describe::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), Ok(6.0));
/// ```
pub fn sum(data: &[f64]) -> Result<f64, StatsError> {
    check_finite(data)?;
    finite_sum(data)
}

/// Like [`sum`], but returns `default` for an empty slice.
///
/// # Errors
/// - [`StatsError::InvalidElement`] for the first NaN or infinite element.
/// - [`StatsError::Overflow`] if the running sum leaves the `f64` range.
///
/// # Examples
/// ```
/// use u_describe::sum_or;
/// assert_eq!(sum_or(&[], 0.0), Ok(0.0));
/// assert_eq!(sum_or(&[2.5, 2.5], 0.0), Ok(5.0));
/// ```
pub fn sum_or(data: &[f64], default: f64) -> Result<f64, StatsError> {
    match check_finite(data) {
        Err(StatsError::EmptyInput) => Ok(default),
        Err(e) => Err(e),
        Ok(()) => finite_sum(data),
    }
}

/// Returns the arithmetic mean, `sum / len`.
///
/// # Errors
/// Same as [`sum`].
///
/// # Examples
/// ```
/// use u_describe::mean;
/// let m = mean(&[3.0, 2.0, 4.0, 5.0, 5.0, 5.0, 2.0, 6.0, 7.0]).unwrap();
/// assert_eq!(m, 39.0 / 9.0);
/// ```
pub fn mean(data: &[f64]) -> Result<f64, StatsError> {
    check_finite(data)?;
    Ok(finite_sum(data)? / data.len() as f64)
}

/// Returns the smallest element.
///
/// # Examples
/// ```
/// use u_describe::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), Ok(1.0));
/// ```
pub fn min(data: &[f64]) -> Result<f64, StatsError> {
    check_finite(data)?;
    Ok(min_unchecked(data))
}

/// Returns the largest element.
///
/// # Examples
/// ```
/// use u_describe::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]), Ok(5.0));
/// ```
pub fn max(data: &[f64]) -> Result<f64, StatsError> {
    check_finite(data)?;
    Ok(max_unchecked(data))
}

/// Computes the median of `data` without mutating the input.
///
/// Sorts a copy in ascending order. For odd `n` returns the element at
/// position `(n - 1) / 2`; for even `n` returns the average of positions
/// `n / 2 - 1` and `n / 2`, which may be non-integral even when every
/// input is a whole number. The average is taken with [`f64::midpoint`],
/// so it cannot overflow even at `±f64::MAX`.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use u_describe::median;
/// assert_eq!(median(&[3.0, 2.0, 5.0, 6.0, 2.0, 7.0, 4.0, 2.0, 7.0, 5.0]), Ok(4.5));
/// assert_eq!(median(&[1.0, 2.0]), Ok(1.5));
/// assert_eq!(median(&[f64::MAX, f64::MAX]), Ok(f64::MAX));
/// ```
pub fn median(data: &[f64]) -> Result<f64, StatsError> {
    check_finite(data)?;
    Ok(median_unchecked(data))
}

// Helpers below assume `data` already passed `check_finite`.

pub(crate) fn finite_sum(data: &[f64]) -> Result<f64, StatsError> {
    let total = data.iter().fold(0.0, |acc, &x| acc + x);
    if total.is_finite() {
        Ok(total)
    } else {
        Err(StatsError::Overflow)
    }
}

pub(crate) fn min_unchecked(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::INFINITY, f64::min)
}

pub(crate) fn max_unchecked(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub(crate) fn median_unchecked(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        f64::midpoint(sorted[n / 2 - 1], sorted[n / 2])
    } else {
        sorted[(n - 1) / 2]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
