//! Stateful sweep over candidate Minkowski exponents.

use hubness_data::Dataset;
use hubness_distance::{DistanceMatrix, Metric, build_distance_matrix};
use hubness_knn::{KnnError, NeighborSets};
use tracing::{debug, info};

use crate::config::ExponentConfig;
use crate::error::ExponentError;
use crate::trial::{ExponentSearch, ExponentTrial};

/// Best candidate seen so far.
#[derive(Debug)]
struct Best {
    exponent: f64,
    score: f64,
    matrix: DistanceMatrix,
}

/// Evaluates candidate exponents one at a time, keeping only the best matrix.
///
/// Each [`step`](Self::step) builds the Minkowski matrix for the next
/// candidate, computes its kNN sets and scores them with the configured
/// criterion. A candidate replaces the best only with a strictly lower
/// score, so the earliest minimizer wins.
///
/// # Example
///
/// ```
/// use hubness_data::Dataset;
/// use hubness_exponent::{ExponentConfig, ExponentFinder};
///
/// let dataset = Dataset::from_rows(vec![
///     vec![0.0, 0.0],
///     vec![1.0, 0.5],
///     vec![3.0, 3.0],
///     vec![4.0, 1.0],
/// ])
/// .unwrap();
/// let mut finder = ExponentFinder::new(&dataset, ExponentConfig::new(1.0, 2.0, 0.5)).unwrap();
/// while let Some(trial) = finder.step().unwrap() {
///     assert!(trial.anti_hub_rate() <= 1.0);
/// }
/// let search = finder.finish().unwrap();
/// assert_eq!(search.trials().len(), 3);
/// ```
#[derive(Debug)]
pub struct ExponentFinder<'a> {
    dataset: &'a Dataset,
    config: ExponentConfig,
    candidates: Vec<f64>,
    next: usize,
    trials: Vec<ExponentTrial>,
    best: Option<Best>,
    /// Consecutive trials without improvement.
    stale: usize,
}

impl<'a> ExponentFinder<'a> {
    /// Prepares a sweep over `dataset`.
    ///
    /// # Errors
    ///
    /// * [`ExponentError::InvalidInput`] if the dataset is empty.
    /// * Everything [`ExponentConfig::validate`] returns.
    /// * [`ExponentError::Knn`] unless `1 <= k < n`.
    pub fn new(dataset: &'a Dataset, config: ExponentConfig) -> Result<Self, ExponentError> {
        if dataset.is_empty() {
            return Err(ExponentError::InvalidInput("dataset is empty"));
        }
        config.validate()?;
        let n = dataset.size();
        if config.k() >= n {
            return Err(KnnError::InvalidNeighborhoodSize { k: config.k(), n }.into());
        }

        let candidates = config.candidates();
        debug!(n, candidates = candidates.len(), "exponent sweep prepared");
        Ok(Self {
            dataset,
            config,
            candidates,
            next: 0,
            trials: Vec::new(),
            best: None,
            stale: 0,
        })
    }

    /// Candidate exponents in sweep order.
    pub fn candidates(&self) -> &[f64] {
        &self.candidates
    }

    /// Trials recorded so far.
    pub fn trials(&self) -> &[ExponentTrial] {
        &self.trials
    }

    /// Returns `true` once every candidate was tried or patience ran out.
    pub fn is_done(&self) -> bool {
        let exhausted = self.next >= self.candidates.len();
        let impatient = self
            .config
            .patience()
            .is_some_and(|patience| self.stale >= patience);
        exhausted || impatient
    }

    /// Evaluates the next candidate and returns its trial, or `None` when the
    /// sweep is done.
    ///
    /// # Errors
    ///
    /// Any distance or neighbor-set failure; the sweep should then be
    /// abandoned.
    #[tracing::instrument(skip(self), fields(trial = self.next))]
    pub fn step(&mut self) -> Result<Option<&ExponentTrial>, ExponentError> {
        if self.is_done() {
            return Ok(None);
        }
        let exponent = self.candidates[self.next];
        self.next += 1;

        let metric = Metric::minkowski(exponent)?;
        let matrix = build_distance_matrix(self.dataset, &metric, self.config.matrix())?;
        let sets = NeighborSets::compute(&matrix, self.config.k())?;
        let profile = sets.occurrences(None)?;
        let score = self.config.criterion().score(&profile);

        let is_best = self.best.as_ref().is_none_or(|best| score < best.score);
        if is_best {
            self.best = Some(Best {
                exponent,
                score,
                matrix,
            });
            self.stale = 0;
        } else {
            self.stale += 1;
        }

        let trial = ExponentTrial::new(
            exponent,
            profile.hub_rate(),
            profile.anti_hub_rate(),
            is_best,
        );
        info!(
            p = exponent,
            hub_rate = trial.hub_rate(),
            anti_hub_rate = trial.anti_hub_rate(),
            is_best,
            "exponent trial"
        );
        self.trials.push(trial);
        Ok(self.trials.last())
    }

    /// Ends the sweep, returning the best exponent, its matrix and the log.
    ///
    /// Candidates not yet evaluated are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ExponentError::InvalidInput`] if no candidate was evaluated.
    pub fn finish(self) -> Result<ExponentSearch, ExponentError> {
        let best = self
            .best
            .ok_or(ExponentError::InvalidInput("no exponent was evaluated"))?;
        info!(
            best_exponent = best.exponent,
            score = best.score,
            trials = self.trials.len(),
            "exponent search finished"
        );
        Ok(ExponentSearch::new(best.exponent, best.matrix, self.trials))
    }

    /// Runs the remaining candidates and finishes the sweep.
    ///
    /// # Errors
    ///
    /// The first error of any [`step`](Self::step).
    pub fn run(mut self) -> Result<ExponentSearch, ExponentError> {
        while self.step()?.is_some() {}
        self.finish()
    }
}

/// Sweeps the configured exponent range over `dataset` and returns the
/// exponent minimizing the configured criterion.
///
/// # Errors
///
/// Everything [`ExponentFinder::new`] and [`ExponentFinder::step`] return.
#[tracing::instrument(skip_all, fields(n = dataset.size(), min = config.min(), max = config.max(), step = config.step()))]
pub fn find_best_exponent(
    dataset: &Dataset,
    config: &ExponentConfig,
) -> Result<ExponentSearch, ExponentError> {
    ExponentFinder::new(dataset, config.clone())?.run()
}
