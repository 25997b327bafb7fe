//! Ordered point collection with optional class labels.

use crate::error::DataError;
use crate::vector::FeatureVector;

/// An ordered collection of feature vectors with optional class labels.
///
/// Points are addressed by their position `0..size()`. Labels, when present,
/// are class indices with one entry per point. A dataset may be empty; the
/// computations that need points reject empty datasets themselves.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    points: Vec<FeatureVector>,
    labels: Option<Vec<usize>>,
}

impl Dataset {
    /// Creates an unlabelled dataset.
    pub fn new(points: Vec<FeatureVector>) -> Self {
        Self {
            points,
            labels: None,
        }
    }

    /// Creates an unlabelled dataset of dense rows.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NonFiniteValue`] if any row holds NaN or infinity.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        let points = rows
            .into_iter()
            .map(FeatureVector::dense)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(points))
    }

    /// Attaches class labels, one per point.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::LabelCountMismatch`] if `labels.len() != size()`.
    pub fn with_labels(mut self, labels: Vec<usize>) -> Result<Self, DataError> {
        if labels.len() != self.points.len() {
            return Err(DataError::LabelCountMismatch {
                labels: labels.len(),
                points: self.points.len(),
            });
        }
        self.labels = Some(labels);
        Ok(self)
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the dataset holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the feature vector of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= size()`.
    pub fn vector_at(&self, i: usize) -> &FeatureVector {
        &self.points[i]
    }

    /// Returns the class label of point `i`, or `None` for unlabelled data.
    pub fn label_at(&self, i: usize) -> Option<usize> {
        self.labels.as_ref().and_then(|l| l.get(i).copied())
    }

    /// Returns all labels, or `None` for unlabelled data.
    pub fn labels(&self) -> Option<&[usize]> {
        self.labels.as_deref()
    }

    /// Returns all points in order.
    pub fn points(&self) -> &[FeatureVector] {
        &self.points
    }

    /// Number of distinct classes (highest label plus one), zero when unlabelled.
    pub fn n_classes(&self) -> usize {
        self.labels
            .as_ref()
            .and_then(|l| l.iter().max())
            .map_or(0, |&max| max + 1)
    }
}
