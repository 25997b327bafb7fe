//! Configuration for the Minkowski exponent search.

use hubness_distance::MatrixConfig;
use hubness_knn::OccurrenceProfile;

use crate::error::ExponentError;

/// Slack, in units of the step, absorbed when counting candidates.
const STEP_TOLERANCE: f64 = 1e-9;

/// Upper bound on the number of candidate exponents in one sweep.
pub const MAX_CANDIDATES: usize = 100_000;

/// Rate minimized by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Criterion {
    /// Fraction of points occurring at least `2k` times.
    Hub,
    /// Fraction of points that never occur (default).
    #[default]
    AntiHub,
}

impl Criterion {
    /// Score of `profile` under this criterion; lower is better.
    pub fn score(&self, profile: &OccurrenceProfile) -> f64 {
        match self {
            Self::Hub => profile.hub_rate(),
            Self::AntiHub => profile.anti_hub_rate(),
        }
    }
}

/// Configuration for [`ExponentFinder`](crate::ExponentFinder).
///
/// # Example
///
/// ```
/// use hubness_exponent::{Criterion, ExponentConfig};
///
/// let config = ExponentConfig::new(1.0, 4.0, 0.5)
///     .with_k(2)
///     .with_criterion(Criterion::Hub);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.candidates().len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentConfig {
    /// Smallest exponent tried.
    min: f64,
    /// Largest exponent tried.
    max: f64,
    /// Distance between consecutive candidates.
    step: f64,
    /// Neighborhood size used to score each candidate.
    k: usize,
    /// Rate to minimize.
    criterion: Criterion,
    /// Stop after this many consecutive non-improving trials.
    patience: Option<usize>,
    /// Distance matrix construction settings.
    matrix: MatrixConfig,
}

impl ExponentConfig {
    /// Creates a configuration sweeping `[min, max]` by `step` with `k = 1`,
    /// the anti-hub criterion and no early exit.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            k: 1,
            criterion: Criterion::default(),
            patience: None,
            matrix: MatrixConfig::new(),
        }
    }

    /// Sets the neighborhood size.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the criterion.
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Stops the sweep after `patience` consecutive trials without improvement.
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = Some(patience);
        self
    }

    /// Sets the distance matrix configuration.
    pub fn with_matrix(mut self, matrix: MatrixConfig) -> Self {
        self.matrix = matrix;
        self
    }

    /// Returns the lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the neighborhood size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the criterion.
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Returns the early-exit patience, if any.
    pub fn patience(&self) -> Option<usize> {
        self.patience
    }

    /// Returns the distance matrix configuration.
    pub fn matrix(&self) -> &MatrixConfig {
        &self.matrix
    }

    /// Candidate exponents `min + i·step` for `i = 0..=m`, with
    /// `m = ⌈(max − min) / step⌉` and the last candidate clamped to `max`.
    ///
    /// Only meaningful for a configuration that passes [`validate`](Self::validate).
    pub fn candidates(&self) -> Vec<f64> {
        let m = self.last_index().min(MAX_CANDIDATES);
        (0..=m)
            .map(|i| (self.min + i as f64 * self.step).min(self.max))
            .collect()
    }

    /// Index of the last candidate, `⌈(max − min) / step⌉`, saturating.
    fn last_index(&self) -> usize {
        let ratio = (self.max - self.min) / self.step;
        (ratio - STEP_TOLERANCE).ceil().max(0.0) as usize
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// * [`ExponentError::InvalidRange`] if a bound or the step is not finite,
    ///   `step <= 0`, `min <= 0`, `min > max`, or the range holds more than
    ///   [`MAX_CANDIDATES`] candidates.
    /// * [`ExponentError::InvalidInput`] if `k` or the patience is zero.
    /// * [`ExponentError::Distance`] if the matrix configuration is invalid.
    pub fn validate(&self) -> Result<(), ExponentError> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.step.is_finite();
        if !finite
            || self.step <= 0.0
            || self.min <= 0.0
            || self.min > self.max
            || !((self.max - self.min) / self.step).is_finite()
            || self.last_index() >= MAX_CANDIDATES
        {
            return Err(ExponentError::InvalidRange {
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        if self.k == 0 {
            return Err(ExponentError::InvalidInput("k must be >= 1"));
        }
        if self.patience == Some(0) {
            return Err(ExponentError::InvalidInput("patience must be >= 1"));
        }
        self.matrix.validate()?;
        Ok(())
    }
}
