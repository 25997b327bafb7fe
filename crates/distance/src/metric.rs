//! Distance capability trait and the built-in metric family.

use hubness_data::FeatureVector;

use crate::error::DistanceError;
use crate::kernel;

/// A non-negative, symmetric dissimilarity between two feature vectors.
///
/// Implemented by [`Metric`] and by any `Fn(&FeatureVector, &FeatureVector)
/// -> Result<f64, DistanceError>` closure, so custom metrics can be plugged
/// into the matrix builder without a wrapper type.
///
/// Implementations must be total over the dataset they are applied to; an
/// error for any pair aborts the enclosing matrix build.
pub trait Distance: Send + Sync {
    /// Computes the distance between `a` and `b`.
    fn distance(&self, a: &FeatureVector, b: &FeatureVector) -> Result<f64, DistanceError>;
}

impl<F> Distance for F
where
    F: Fn(&FeatureVector, &FeatureVector) -> Result<f64, DistanceError> + Send + Sync,
{
    fn distance(&self, a: &FeatureVector, b: &FeatureVector) -> Result<f64, DistanceError> {
        self(a, b)
    }
}

/// Built-in metric family.
///
/// | Variant | Formula |
/// |---------|---------|
/// | `Minkowski { p }` | `(Σ|aᵢ − bᵢ|^p)^(1/p)` |
/// | `Cosine` | `1 − ⟨a,b⟩ / (‖a‖‖b‖)` |
///
/// Every variant accepts dense, sparse and mixed operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Minkowski distance with exponent `p > 0`. `p = 1` is Manhattan,
    /// `p = 2` is Euclidean. Exponents below 1 are accepted even though the
    /// result is not a true metric.
    Minkowski {
        /// The exponent.
        p: f64,
    },
    /// Cosine distance.
    Cosine,
}

impl Metric {
    /// Manhattan (L1) distance.
    pub fn manhattan() -> Self {
        Self::Minkowski { p: 1.0 }
    }

    /// Euclidean (L2) distance.
    pub fn euclidean() -> Self {
        Self::Minkowski { p: 2.0 }
    }

    /// Minkowski distance with a validated exponent.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::InvalidExponent`] unless `p` is finite and positive.
    pub fn minkowski(p: f64) -> Result<Self, DistanceError> {
        let metric = Self::Minkowski { p };
        metric.validate()?;
        Ok(metric)
    }

    /// Returns the Minkowski exponent, or `None` for non-Minkowski metrics.
    pub fn exponent(&self) -> Option<f64> {
        match self {
            Self::Minkowski { p } => Some(*p),
            Self::Cosine => None,
        }
    }

    /// Validates the metric parameters.
    pub fn validate(&self) -> Result<(), DistanceError> {
        match *self {
            Self::Minkowski { p } if !p.is_finite() || p <= 0.0 => {
                Err(DistanceError::InvalidExponent { p })
            }
            _ => Ok(()),
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Self::euclidean()
    }
}

impl Distance for Metric {
    fn distance(&self, a: &FeatureVector, b: &FeatureVector) -> Result<f64, DistanceError> {
        match *self {
            Self::Minkowski { p } => {
                self.validate()?;
                kernel::minkowski(a, b, p)
            }
            Self::Cosine => kernel::cosine(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn v(values: &[f64]) -> FeatureVector {
        FeatureVector::dense(values.to_vec()).unwrap()
    }

    #[test]
    fn test_named_constructors() {
        assert_eq!(Metric::manhattan().exponent(), Some(1.0));
        assert_eq!(Metric::euclidean().exponent(), Some(2.0));
        assert_eq!(Metric::Cosine.exponent(), None);
        assert_eq!(Metric::default(), Metric::euclidean());
    }

    #[test]
    fn test_minkowski_rejects_bad_exponents() {
        for p in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Metric::minkowski(p),
                Err(DistanceError::InvalidExponent { .. })
            ));
        }
        assert!(Metric::minkowski(3.5).is_ok());
    }

    #[test]
    fn test_unvalidated_exponent_fails_at_use() {
        let metric = Metric::Minkowski { p: 0.0 };
        let result = metric.distance(&v(&[0.0]), &v(&[1.0]));
        assert!(matches!(result, Err(DistanceError::InvalidExponent { .. })));
    }

    #[test]
    fn test_metric_dispatch() {
        let a = v(&[0.0, 0.0]);
        let b = v(&[3.0, 4.0]);
        assert_abs_diff_eq!(
            Metric::manhattan().distance(&a, &b).unwrap(),
            7.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Metric::euclidean().distance(&a, &b).unwrap(),
            5.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_closure_is_a_distance() {
        let constant = |_: &FeatureVector, _: &FeatureVector| Ok::<f64, DistanceError>(0.5);
        let d = constant.distance(&v(&[1.0]), &v(&[2.0])).unwrap();
        assert_eq!(d, 0.5);
    }

    #[test]
    fn test_symmetry() {
        let a = v(&[1.0, -2.0, 0.5]);
        let b = v(&[0.0, 4.0, 2.0]);
        for metric in [Metric::manhattan(), Metric::euclidean(), Metric::Cosine] {
            assert_eq!(
                metric.distance(&a, &b).unwrap(),
                metric.distance(&b, &a).unwrap()
            );
        }
    }
}
