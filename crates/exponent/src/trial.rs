//! Search log entries and the final search result.

use hubness_distance::DistanceMatrix;

/// One evaluated candidate exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentTrial {
    exponent: f64,
    hub_rate: f64,
    anti_hub_rate: f64,
    is_best: bool,
}

impl ExponentTrial {
    pub(crate) fn new(exponent: f64, hub_rate: f64, anti_hub_rate: f64, is_best: bool) -> Self {
        Self {
            exponent,
            hub_rate,
            anti_hub_rate,
            is_best,
        }
    }

    /// The Minkowski exponent tried.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Fraction of hubs at this exponent.
    pub fn hub_rate(&self) -> f64 {
        self.hub_rate
    }

    /// Fraction of anti-hubs at this exponent.
    pub fn anti_hub_rate(&self) -> f64 {
        self.anti_hub_rate
    }

    /// Whether this trial was the best seen when it was recorded.
    pub fn is_best(&self) -> bool {
        self.is_best
    }
}

/// Outcome of a completed exponent search.
#[derive(Debug, Clone)]
pub struct ExponentSearch {
    best_exponent: f64,
    best_matrix: DistanceMatrix,
    trials: Vec<ExponentTrial>,
}

impl ExponentSearch {
    pub(crate) fn new(
        best_exponent: f64,
        best_matrix: DistanceMatrix,
        trials: Vec<ExponentTrial>,
    ) -> Self {
        Self {
            best_exponent,
            best_matrix,
            trials,
        }
    }

    /// The exponent with the lowest score; the earliest one on ties.
    pub fn best_exponent(&self) -> f64 {
        self.best_exponent
    }

    /// Distance matrix computed at the best exponent.
    pub fn best_matrix(&self) -> &DistanceMatrix {
        &self.best_matrix
    }

    /// Every evaluated candidate, in sweep order.
    pub fn trials(&self) -> &[ExponentTrial] {
        &self.trials
    }

    /// The trial of the best exponent.
    pub fn best_trial(&self) -> Option<&ExponentTrial> {
        self.trials.iter().rev().find(|t| t.is_best())
    }

    /// Consumes the result, returning `(best_exponent, best_matrix, trials)`.
    pub fn into_parts(self) -> (f64, DistanceMatrix, Vec<ExponentTrial>) {
        (self.best_exponent, self.best_matrix, self.trials)
    }
}
