//! Dense and sparse feature vectors.

use crate::error::DataError;

/// Sparse feature vector: `(attribute index, value)` pairs sorted by index.
///
/// Attributes that are not stored are implicitly zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Creates a sparse vector from `(index, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnsortedSparseIndices`] if indices are not strictly
    /// increasing and [`DataError::NonFiniteValue`] for NaN or infinite values.
    pub fn new(entries: Vec<(usize, f64)>) -> Result<Self, DataError> {
        for (position, window) in entries.windows(2).enumerate() {
            if window[1].0 <= window[0].0 {
                return Err(DataError::UnsortedSparseIndices {
                    position: position + 1,
                });
            }
        }
        if let Some(&(index, _)) = entries.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DataError::NonFiniteValue { index });
        }
        Ok(Self { entries })
    }

    /// Creates a sparse vector from parallel index and value slices.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::SparseLengthMismatch`] when the slices differ in
    /// length, otherwise the same errors as [`SparseVector::new`].
    pub fn from_parts(indices: &[usize], values: &[f64]) -> Result<Self, DataError> {
        if indices.len() != values.len() {
            return Err(DataError::SparseLengthMismatch {
                indices: indices.len(),
                values: values.len(),
            });
        }
        Self::new(indices.iter().copied().zip(values.iter().copied()).collect())
    }

    /// Returns the stored `(index, value)` pairs in increasing index order.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Returns the number of stored (non-implicit) entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Returns the value at `index`, zero when absent.
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }
}

/// A single point of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureVector {
    /// Ordered sequence of numeric attributes.
    Dense(Vec<f64>),
    /// Index-to-weight mapping, absent attributes are zero.
    Sparse(SparseVector),
}

impl FeatureVector {
    /// Creates a dense vector, rejecting non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NonFiniteValue`] with the first offending attribute.
    pub fn dense(values: Vec<f64>) -> Result<Self, DataError> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(DataError::NonFiniteValue { index });
        }
        Ok(Self::Dense(values))
    }

    /// Creates a sparse vector from `(index, value)` pairs.
    ///
    /// # Errors
    ///
    /// See [`SparseVector::new`].
    pub fn sparse(entries: Vec<(usize, f64)>) -> Result<Self, DataError> {
        SparseVector::new(entries).map(Self::Sparse)
    }

    /// Returns `true` for the sparse representation.
    pub fn is_sparse(&self) -> bool {
        matches!(self, Self::Sparse(_))
    }

    /// Number of attributes: length for dense vectors, highest stored index
    /// plus one for sparse vectors.
    pub fn dim(&self) -> usize {
        match self {
            Self::Dense(values) => values.len(),
            Self::Sparse(sparse) => sparse.entries().last().map_or(0, |&(i, _)| i + 1),
        }
    }

    /// Returns the dense attribute slice, or `None` for sparse vectors.
    pub fn as_dense(&self) -> Option<&[f64]> {
        match self {
            Self::Dense(values) => Some(values),
            Self::Sparse(_) => None,
        }
    }

    /// Returns the sparse representation, or `None` for dense vectors.
    pub fn as_sparse(&self) -> Option<&SparseVector> {
        match self {
            Self::Dense(_) => None,
            Self::Sparse(sparse) => Some(sparse),
        }
    }

    /// Converts to a sparse vector, dropping exact zeros.
    pub fn to_sparse(&self) -> SparseVector {
        match self {
            Self::Dense(values) => SparseVector {
                entries: values
                    .iter()
                    .copied()
                    .enumerate()
                    .filter(|&(_, v)| v != 0.0)
                    .collect(),
            },
            Self::Sparse(sparse) => sparse.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_rejects_nan() {
        let err = FeatureVector::dense(vec![1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, DataError::NonFiniteValue { index: 1 }));
    }

    #[test]
    fn test_dense_rejects_infinity() {
        let err = FeatureVector::dense(vec![f64::NEG_INFINITY]).unwrap_err();
        assert!(matches!(err, DataError::NonFiniteValue { index: 0 }));
    }

    #[test]
    fn test_sparse_rejects_unsorted() {
        let err = FeatureVector::sparse(vec![(3, 1.0), (1, 2.0)]).unwrap_err();
        assert!(matches!(
            err,
            DataError::UnsortedSparseIndices { position: 1 }
        ));
    }

    #[test]
    fn test_sparse_rejects_duplicates() {
        let err = FeatureVector::sparse(vec![(1, 1.0), (1, 2.0)]).unwrap_err();
        assert!(matches!(err, DataError::UnsortedSparseIndices { .. }));
    }

    #[test]
    fn test_sparse_rejects_nan_with_attribute_index() {
        let err = FeatureVector::sparse(vec![(2, 1.0), (7, f64::NAN)]).unwrap_err();
        assert!(matches!(err, DataError::NonFiniteValue { index: 7 }));
    }

    #[test]
    fn test_from_parts_length_mismatch() {
        let err = SparseVector::from_parts(&[0, 1], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            DataError::SparseLengthMismatch {
                indices: 2,
                values: 1
            }
        ));
    }

    #[test]
    fn test_sparse_get() {
        let v = SparseVector::from_parts(&[1, 4], &[2.5, -1.0]).unwrap();
        assert_eq!(v.get(1), 2.5);
        assert_eq!(v.get(4), -1.0);
        assert_eq!(v.get(0), 0.0);
        assert_eq!(v.get(100), 0.0);
        assert_eq!(v.nnz(), 2);
    }

    #[test]
    fn test_dim() {
        assert_eq!(FeatureVector::dense(vec![0.0; 5]).unwrap().dim(), 5);
        assert_eq!(
            FeatureVector::sparse(vec![(0, 1.0), (9, 1.0)]).unwrap().dim(),
            10
        );
        assert_eq!(FeatureVector::sparse(Vec::new()).unwrap().dim(), 0);
    }

    #[test]
    fn test_to_sparse_drops_zeros() {
        let v = FeatureVector::dense(vec![0.0, 3.0, 0.0, -2.0]).unwrap();
        assert_eq!(v.to_sparse().entries(), &[(1, 3.0), (3, -2.0)]);
    }

    #[test]
    fn test_representation_accessors() {
        let d = FeatureVector::dense(vec![1.0]).unwrap();
        let s = FeatureVector::sparse(vec![(0, 1.0)]).unwrap();
        assert!(!d.is_sparse());
        assert!(s.is_sparse());
        assert_eq!(d.as_dense(), Some(&[1.0][..]));
        assert!(d.as_sparse().is_none());
        assert!(s.as_dense().is_none());
        assert!(s.as_sparse().is_some());
    }
}
