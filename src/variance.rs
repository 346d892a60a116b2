//! Pluggable variance strategies.
//!
//! The aggregate in [`crate::summary`] computes the mean once and hands it
//! to a [`VarianceFn`] together with the data. Swapping the strategy
//! changes only the `variance` and `standard_deviation` fields of the
//! result.
//!
//! | Strategy | Divisor |
//! |---|---|
//! | [`PopulationVariance`] (default) | n |
//! | [`SampleVariance`] | n − 1 |
//!
//! Any closure `Fn(&[f64], f64) -> f64` is also a [`VarianceFn`].

/// Variance of a sequence around a precomputed mean.
///
/// Implementations receive non-empty, finite data and must return a
/// non-negative value.
pub trait VarianceFn {
    /// Returns the variance of `data` around `mean`.
    fn variance(&self, data: &[f64], mean: f64) -> f64;
}

impl<F> VarianceFn for F
where
    F: Fn(&[f64], f64) -> f64,
{
    fn variance(&self, data: &[f64], mean: f64) -> f64 {
        self(data, mean)
    }
}

/// Population variance: mean of squared deviations, divisor `n`.
///
/// # Examples
/// ```
/// use u_describe::{PopulationVariance, VarianceFn};
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(PopulationVariance.variance(&v, 5.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationVariance;

impl VarianceFn for PopulationVariance {
    fn variance(&self, data: &[f64], mean: f64) -> f64 {
        squared_deviations(data, mean) / data.len() as f64
    }
}

/// Sample variance with Bessel's correction, divisor `n − 1`.
///
/// A single observation has no spread to estimate, so it yields `0.0`.
///
/// # Examples
/// ```
/// use u_describe::{SampleVariance, VarianceFn};
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((SampleVariance.variance(&v, 5.0) - 4.571428571428571).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleVariance;

impl VarianceFn for SampleVariance {
    fn variance(&self, data: &[f64], mean: f64) -> f64 {
        if data.len() < 2 {
            return 0.0;
        }
        squared_deviations(data, mean) / (data.len() - 1) as f64
    }
}

fn squared_deviations(data: &[f64], mean: f64) -> f64 {
    data.iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum()
}
