//! Error types for the hubness-distance crate.

/// Error type for all fallible operations in the hubness-distance crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DistanceError {
    /// Returned when the input dataset cannot be processed (e.g. it is empty).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Returned when a Minkowski exponent is non-finite or non-positive.
    #[error("Minkowski exponent must be finite and positive, got {p}")]
    InvalidExponent {
        /// The invalid exponent.
        p: f64,
    },

    /// Returned when the configured worker count is zero.
    #[error("thread count must be >= 1, got {threads}")]
    InvalidThreads {
        /// The invalid thread count.
        threads: usize,
    },

    /// Returned when two dense vectors differ in length.
    #[error("dense vectors differ in length: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the first vector.
        left: usize,
        /// Length of the second vector.
        right: usize,
    },

    /// Failure raised by a user-supplied distance function.
    #[error("{0}")]
    Custom(String),

    /// Returned when the distance between a specific pair fails during a
    /// matrix build. Aborts the whole build.
    #[error("distance between points {i} and {j} failed: {source}")]
    DistanceComputation {
        /// First point index.
        i: usize,
        /// Second point index.
        j: usize,
        /// Underlying failure.
        source: Box<DistanceError>,
    },

    /// Returned when the worker pool cannot be created.
    #[error("failed to start distance worker pool: {0}")]
    ThreadPool(String),
}
