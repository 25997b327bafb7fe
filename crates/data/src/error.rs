//! Error types for the hubness-data crate.

/// Error type for all fallible operations in the hubness-data crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DataError {
    /// Returned when a feature value is NaN or infinite.
    #[error("non-finite feature value at attribute {index}")]
    NonFiniteValue {
        /// Attribute index of the offending value.
        index: usize,
    },

    /// Returned when sparse indices are not strictly increasing.
    #[error("sparse indices must be strictly increasing (violated at entry {position})")]
    UnsortedSparseIndices {
        /// Position in the entry list where ordering breaks.
        position: usize,
    },

    /// Returned when a sparse vector has mismatched index and value lengths.
    #[error("sparse vector has {indices} indices but {values} values")]
    SparseLengthMismatch {
        /// Number of indices supplied.
        indices: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// Returned when the label count does not match the point count.
    #[error("{labels} labels supplied for {points} points")]
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of points in the dataset.
        points: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_non_finite_value() {
        let e = DataError::NonFiniteValue { index: 3 };
        assert_eq!(e.to_string(), "non-finite feature value at attribute 3");
    }

    #[test]
    fn error_unsorted_sparse_indices() {
        let e = DataError::UnsortedSparseIndices { position: 2 };
        assert_eq!(
            e.to_string(),
            "sparse indices must be strictly increasing (violated at entry 2)"
        );
    }

    #[test]
    fn error_sparse_length_mismatch() {
        let e = DataError::SparseLengthMismatch {
            indices: 3,
            values: 2,
        };
        assert_eq!(e.to_string(), "sparse vector has 3 indices but 2 values");
    }

    #[test]
    fn error_label_count_mismatch() {
        let e = DataError::LabelCountMismatch {
            labels: 4,
            points: 5,
        };
        assert_eq!(e.to_string(), "4 labels supplied for 5 points");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DataError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DataError>();
    }
}
