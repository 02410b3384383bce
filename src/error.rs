use thiserror::Error;

/// Errors returned by the clustering engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points have inconsistent dimensionality, or a query's dimension
    /// differs from the fitted dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// Input contains a NaN or infinite coordinate.
    #[error("non-finite value in input row {row}")]
    NonFiniteValue {
        /// Row index of the offending point.
        row: usize,
    },

    /// The engine has not been fitted yet.
    #[error("model has not been fitted")]
    NotFitted,

    /// A predict query does not exactly match any fitted point.
    #[error("query row {row} does not match any fitted point")]
    UnknownPoint {
        /// Row index of the unmatched query point.
        row: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
