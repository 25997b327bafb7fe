//! Error types for the hubness-exponent crate.

use hubness_distance::DistanceError;
use hubness_knn::KnnError;

/// Error type for all fallible operations in the hubness-exponent crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExponentError {
    /// Returned when the search has nothing to work on.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Returned when the exponent range or step is malformed.
    #[error("invalid exponent range [{min}, {max}] with step {step}")]
    InvalidRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Step between candidates.
        step: f64,
    },

    /// Distance matrix construction failed for a candidate.
    #[error(transparent)]
    Distance(#[from] DistanceError),

    /// Neighbor-set computation failed for a candidate.
    #[error(transparent)]
    Knn(#[from] KnnError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_input() {
        let err = ExponentError::InvalidInput("dataset is empty");
        assert_eq!(err.to_string(), "invalid input: dataset is empty");
    }

    #[test]
    fn error_invalid_range() {
        let err = ExponentError::InvalidRange {
            min: 4.0,
            max: 1.0,
            step: 0.5,
        };
        assert_eq!(err.to_string(), "invalid exponent range [4, 1] with step 0.5");
    }

    #[test]
    fn error_wraps_upstream() {
        let err = ExponentError::from(DistanceError::InvalidExponent { p: -1.0 });
        assert!(matches!(err, ExponentError::Distance(_)));
        let err = ExponentError::from(KnnError::InvalidNeighborhoodSize { k: 0, n: 3 });
        assert_eq!(
            err.to_string(),
            "invalid neighborhood size k = 0 for 3 points"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ExponentError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ExponentError>();
    }
}
