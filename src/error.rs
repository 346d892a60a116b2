//! Error type shared by every statistics operation.

use thiserror::Error;

/// Errors raised when an input sequence cannot be summarized.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StatsError {
    /// The sequence has no elements.
    #[error("at least one value is required to compute statistics")]
    EmptyInput,

    /// An element is NaN or infinite.
    #[error("element at index {index} is not a finite number: {value}")]
    InvalidElement {
        /// Position of the first offending element.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// An intermediate result (sum or variance) left the finite `f64` range.
    #[error("result overflowed the finite f64 range")]
    Overflow,
}
