//! Error types for the hubness-knn crate.

use hubness_distance::DistanceError;

/// Error type for all fallible operations in the hubness-knn crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KnnError {
    /// Distance computation error.
    #[error(transparent)]
    Distance(#[from] DistanceError),

    /// Returned when the input cannot be processed (e.g. an empty dataset).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Returned when k is outside `[1, n)`, or when an extension does not
    /// grow the neighborhood.
    #[error("invalid neighborhood size k = {k} for {n} points")]
    InvalidNeighborhoodSize {
        /// The requested neighborhood size.
        k: usize,
        /// Number of points.
        n: usize,
    },

    /// Returned when an input does not cover the expected number of points.
    #[error("{what} has length {actual}, expected {expected}")]
    SizeMismatch {
        /// Name of the mismatched input.
        what: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
}
