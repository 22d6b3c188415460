//! Error types used by the crate.

use thiserror::Error;

/// Flowmap error type.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FlowmapError {
    /// Statistics interval with the minimum above the maximum.
    #[error("minimum {0} is greater than maximum {1}")]
    InvalidRange(f64, f64),
    /// Value outside of the interval it must lie in.
    #[error("value {0} must be between {1} and {2}")]
    OutOfInterval(f64, f64, f64),
    /// Vectors of mismatched dimensions.
    #[error("vector dimensions do not match: {0} vs {1}")]
    DimensionMismatch(usize, usize),
}
