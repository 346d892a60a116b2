//! # u-describe
//!
//! Descriptive statistics over finite numeric sequences.
//!
//! Given a non-empty slice, this crate computes sum, mean, median,
//! extrema, variance, and standard deviation, either one at a time or as
//! a single [`StatisticsResult`].
//!
//! ## Modules
//!
//! - [`stats`] — Slice-level primitives (`sum`, `mean`, `median`, ...)
//! - [`variance`] — Pluggable variance strategies
//! - [`summary`] — The aggregate [`StatisticsResult`] and its calculator
//! - [`error`] — [`StatsError`]
//!
//! ## Design Philosophy
//!
//! - **Fail fast**: empty input and non-finite elements are reported as
//!   [`StatsError`] before anything is computed
//! - **No hidden mutation**: the median sorts a private copy
//! - **Property-based testing**: invariants verified via proptest
//!
//! ## Example
//!
//! ```
//! use u_describe::compute_statistics;
//!
//! let s = compute_statistics(&[3.0, 2.0, 4.0, 5.0, 5.0, 5.0, 2.0, 6.0, 7.0])?;
//! assert_eq!(s.min, 2.0);
//! assert_eq!(s.max, 7.0);
//! assert_eq!(s.standard_deviation, s.variance.sqrt());
//! # Ok::<(), u_describe::StatsError>(())
//! ```

pub mod error;
pub mod stats;
pub mod summary;
pub mod variance;

pub use error::StatsError;
pub use stats::{check_finite, max, mean, median, min, sum, sum_or};
pub use summary::{
    compute_statistics, compute_statistics_from, StatisticsCalculator, StatisticsResult,
};
pub use variance::{PopulationVariance, SampleVariance, VarianceFn};
