//! One-shot descriptive summary of a numeric sequence.
//!
//! [`StatisticsCalculator`] composes the primitives in [`crate::stats`]
//! with a [`VarianceFn`] into a single [`StatisticsResult`]. Input is
//! validated once up front; on error no partial result is produced.

use log::{debug, trace};

use crate::error::StatsError;
use crate::stats::{check_finite, finite_sum, max_unchecked, median_unchecked, min_unchecked};
use crate::variance::{PopulationVariance, VarianceFn};

/// Immutable summary of a non-empty sequence.
///
/// Invariants: `length >= 1`, `min <= median <= max`, `variance >= 0`
/// for the built-in strategies, and `standard_deviation` is exactly
/// `variance.sqrt()`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsResult {
    /// Number of elements.
    pub length: usize,
    /// Left-to-right sum of the elements.
    pub sum: f64,
    /// `sum / length`.
    pub mean: f64,
    /// Middle value, or mean of the two middle values.
    pub median: f64,
    /// Smallest element.
    pub min: f64,
    /// Largest element.
    pub max: f64,
    /// Variance around `mean`, as defined by the calculator's strategy.
    pub variance: f64,
    /// Non-negative square root of `variance`.
    pub standard_deviation: f64,
}

impl StatisticsResult {
    /// Returns `max - min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Computes [`StatisticsResult`]s with a fixed variance strategy.
///
/// # Examples
/// ```
/// use u_describe::{SampleVariance, StatisticsCalculator};
///
/// let population = StatisticsCalculator::new().compute(&[1.0, 3.0]).unwrap();
/// assert_eq!(population.variance, 1.0);
///
/// let sample = StatisticsCalculator::with_variance(SampleVariance)
///     .compute(&[1.0, 3.0])
///     .unwrap();
/// assert_eq!(sample.variance, 2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatisticsCalculator<V = PopulationVariance> {
    variance: V,
}

impl StatisticsCalculator<PopulationVariance> {
    /// Creates a calculator that reports population variance.
    pub fn new() -> Self {
        Self::with_variance(PopulationVariance)
    }
}

impl Default for StatisticsCalculator<PopulationVariance> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VarianceFn> StatisticsCalculator<V> {
    /// Creates a calculator using `variance` for the spread fields.
    pub fn with_variance(variance: V) -> Self {
        Self { variance }
    }

    /// Summarizes `data`.
    ///
    /// Fields are computed in a fixed order (min, median, max, sum, mean,
    /// variance) so floating-point results are reproducible. Validation
    /// runs once; the remaining passes skip it.
    /// The median works on a private copy; `data` is never reordered.
    ///
    /// # Errors
    /// - [`StatsError::EmptyInput`] if `data` is empty.
    /// - [`StatsError::InvalidElement`] for the first NaN or infinite
    ///   element.
    /// - [`StatsError::Overflow`] if the sum or the variance of finite
    ///   input is not itself finite, e.g. `[f64::MAX, f64::MAX]`.
    pub fn compute(&self, data: &[f64]) -> Result<StatisticsResult, StatsError> {
        if let Err(e) = check_finite(data) {
            trace!("rejecting input of {} elements: {}", data.len(), e);
            return Err(e);
        }

        let min = min_unchecked(data);
        let median = median_unchecked(data);
        let max = max_unchecked(data);
        let sum = finite_sum(data)
            .inspect_err(|_| trace!("sum of {} elements overflowed", data.len()))?;
        let mean = sum / data.len() as f64;
        let variance = self.variance.variance(data, mean);
        if !variance.is_finite() {
            trace!("variance of {} elements is not finite: {}", data.len(), variance);
            return Err(StatsError::Overflow);
        }
        let length = data.len();
        let standard_deviation = variance.sqrt();

        debug!(
            "summarized {} elements: mean={} variance={}",
            length, mean, variance
        );

        Ok(StatisticsResult {
            length,
            sum,
            mean,
            median,
            min,
            max,
            variance,
            standard_deviation,
        })
    }

    /// Summarizes any sequence whose elements widen losslessly to `f64`.
    ///
    /// # Examples
    /// ```
    /// use u_describe::StatisticsCalculator;
    /// let stats = StatisticsCalculator::new().compute_from(&[1_i32, 2]).unwrap();
    /// assert_eq!(stats.median, 1.5);
    /// ```
    pub fn compute_from<T>(&self, data: &[T]) -> Result<StatisticsResult, StatsError>
    where
        T: Copy + Into<f64>,
    {
        let widened: Vec<f64> = data.iter().map(|&x| x.into()).collect();
        self.compute(&widened)
    }
}

/// Summarizes `data` using population variance.
///
/// # Examples
/// ```
/// use u_describe::compute_statistics;
/// let s = compute_statistics(&[3.0, 2.0, 4.0, 5.0, 5.0, 5.0, 2.0, 6.0, 7.0]).unwrap();
/// assert_eq!(s.length, 9);
/// assert_eq!(s.sum, 39.0);
/// assert_eq!(s.median, 5.0);
/// ```
pub fn compute_statistics(data: &[f64]) -> Result<StatisticsResult, StatsError> {
    StatisticsCalculator::new().compute(data)
}

/// Integer-friendly variant of [`compute_statistics`].
pub fn compute_statistics_from<T>(data: &[T]) -> Result<StatisticsResult, StatsError>
where
    T: Copy + Into<f64>,
{
    StatisticsCalculator::new().compute_from(data)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Finite vectors spanning the whole f64 range, extremes included.
    fn wide_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(
            prop_oneof![
                prop::num::f64::NORMAL,
                prop::num::f64::ZERO,
                Just(f64::MAX),
                Just(-f64::MAX),
            ],
            min_len..=max_len,
        )
    }

    /// Computes a summary, treating overflow as the only acceptable failure.
    fn summarize(data: &[f64]) -> Result<Option<StatisticsResult>, TestCaseError> {
        match compute_statistics(data) {
            Ok(s) => Ok(Some(s)),
            Err(StatsError::Overflow) => Ok(None),
            Err(e) => Err(TestCaseError::fail(format!("unexpected error: {e}"))),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn variance_non_negative(data in wide_vec(1, 100)) {
            if let Some(s) = summarize(&data)? {
                prop_assert!(s.variance >= 0.0, "variance must be >= 0, got {}", s.variance);
            }
        }

        #[test]
        fn std_dev_is_sqrt_of_variance(data in wide_vec(1, 100)) {
            if let Some(s) = summarize(&data)? {
                prop_assert_eq!(s.standard_deviation, s.variance.sqrt());
                prop_assert!(s.standard_deviation >= 0.0);
            }
        }

        #[test]
        fn fields_are_finite_and_ordered(data in wide_vec(1, 100)) {
            if let Some(s) = summarize(&data)? {
                prop_assert!(s.min <= s.median && s.median <= s.max);
                prop_assert!(s.sum.is_finite() && s.mean.is_finite() && s.variance.is_finite());
                prop_assert_eq!(s.length, data.len());
            }
        }

        #[test]
        fn variance_of_constant_is_zero(value in -1e6_f64..1e6, n in 1_usize..50) {
            let s = compute_statistics(&vec![value; n]).unwrap();
            prop_assert!(s.variance.abs() < 1e-6, "variance of constant should be ~0, got {}", s.variance);
        }
    }
}
