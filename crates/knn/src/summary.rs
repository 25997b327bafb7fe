//! Aggregate hubness statistics.

use crate::error::KnnError;
use crate::neighbors::NeighborSets;
use crate::occurrence::OccurrenceProfile;

/// Dataset-level summary of a neighbor-occurrence distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct HubnessSummary {
    n: usize,
    k: usize,
    hub_count: usize,
    anti_hub_count: usize,
    max_occurrence: usize,
    skewness: Option<f64>,
    bad_occurrence_rate: Option<f64>,
    knn_accuracy: Option<f64>,
}

impl HubnessSummary {
    /// Summarizes `profile`, computed from `sets`.
    ///
    /// Label-based statistics are only filled when `labels` is given.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::SizeMismatch`] if the profile or labels do not
    /// cover the same points as `sets`.
    pub fn new(
        sets: &NeighborSets,
        profile: &OccurrenceProfile,
        labels: Option<&[usize]>,
    ) -> Result<Self, KnnError> {
        let n = sets.size();
        if profile.size() != n {
            return Err(KnnError::SizeMismatch {
                what: "occurrence profile",
                expected: n,
                actual: profile.size(),
            });
        }
        if let Some(actual) = labels.map(<[usize]>::len).filter(|&len| len != n) {
            return Err(KnnError::SizeMismatch {
                what: "labels",
                expected: n,
                actual,
            });
        }

        let total_occurrences: usize = profile.total().iter().sum();
        let bad_occurrence_rate = (profile.is_labeled() && total_occurrences > 0)
            .then(|| profile.bad().iter().sum::<usize>() as f64 / total_occurrences as f64);
        let knn_accuracy = labels.map(|labels| majority_vote_accuracy(sets, labels));

        Ok(Self {
            n,
            k: sets.k(),
            hub_count: profile.hubs().len(),
            anti_hub_count: profile.anti_hubs().len(),
            max_occurrence: profile.total().iter().copied().max().unwrap_or(0),
            skewness: profile.skewness(),
            bad_occurrence_rate,
            knn_accuracy,
        })
    }

    /// Number of points.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Neighborhood size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of points occurring at least `2k` times.
    pub fn hub_count(&self) -> usize {
        self.hub_count
    }

    /// Number of points that never occur.
    pub fn anti_hub_count(&self) -> usize {
        self.anti_hub_count
    }

    /// Fraction of hubs.
    pub fn hub_rate(&self) -> f64 {
        self.hub_count as f64 / self.n as f64
    }

    /// Fraction of anti-hubs.
    pub fn anti_hub_rate(&self) -> f64 {
        self.anti_hub_count as f64 / self.n as f64
    }

    /// Largest occurrence count.
    pub fn max_occurrence(&self) -> usize {
        self.max_occurrence
    }

    /// Skewness of the occurrence distribution, `None` when it is flat.
    pub fn skewness(&self) -> Option<f64> {
        self.skewness
    }

    /// Share of occurrences whose querying point has a different label.
    pub fn bad_occurrence_rate(&self) -> Option<f64> {
        self.bad_occurrence_rate
    }

    /// Leave-one-out accuracy of a majority vote over each point's neighbors.
    pub fn knn_accuracy(&self) -> Option<f64> {
        self.knn_accuracy
    }
}

/// Fraction of points whose neighbors' majority label equals their own.
///
/// Ties between labels go to the one held by the nearer neighbor.
fn majority_vote_accuracy(sets: &NeighborSets, labels: &[usize]) -> f64 {
    let mut counts: Vec<(usize, usize)> = Vec::with_capacity(sets.k());
    let mut correct = 0;
    for (i, list) in sets.iter().enumerate() {
        counts.clear();
        for &j in list {
            match counts.iter_mut().find(|(label, _)| *label == labels[j]) {
                Some((_, c)) => *c += 1,
                None => counts.push((labels[j], 1)),
            }
        }
        // `counts` is ordered by first appearance, i.e. by nearest holder.
        let mut best = counts[0];
        for &entry in &counts[1..] {
            if entry.1 > best.1 {
                best = entry;
            }
        }
        if best.0 == labels[i] {
            correct += 1;
        }
    }
    correct as f64 / sets.size() as f64
}
