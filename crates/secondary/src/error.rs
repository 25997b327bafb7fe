//! Error types for the hubness-secondary crate.

use hubness_knn::KnnError;

/// Error type for all fallible operations in the hubness-secondary crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SecondaryError {
    /// Returned when there is nothing to compute on.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Returned when the occurrence profile does not match the neighbor sets.
    #[error("{what} is {actual}, expected {expected}")]
    SizeMismatch {
        /// Name of the mismatched quantity.
        what: &'static str,
        /// Value implied by the neighbor sets.
        expected: usize,
        /// Value found.
        actual: usize,
    },

    /// Neighbor-set error from the secondary kNN pass.
    #[error(transparent)]
    Knn(#[from] KnnError),
}
