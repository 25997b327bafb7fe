//! Reverse-neighbor occurrence counts.

use crate::error::KnnError;
use crate::neighbors::NeighborSets;

/// Multiplier of k at which a point counts as a hub.
pub const HUB_FACTOR: usize = 2;

/// Per-point neighbor-occurrence counts.
///
/// `total[j]` is the number of lists that contain `j` (its hubness). With
/// labels, every occurrence of `j` in the list of `i` is *good* when
/// `label(i) == label(j)` and *bad* otherwise, so `good + bad == total`.
/// Without labels `good` and `bad` stay zero.
#[derive(Debug, Clone, PartialEq)]
pub struct OccurrenceProfile {
    k: usize,
    total: Vec<usize>,
    good: Vec<usize>,
    bad: Vec<usize>,
    labeled: bool,
}

impl OccurrenceProfile {
    /// Counts occurrences over every list of `sets`.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::SizeMismatch`] if `labels` is given with a length
    /// other than `sets.size()`.
    pub fn from_neighbor_sets(
        sets: &NeighborSets,
        labels: Option<&[usize]>,
    ) -> Result<Self, KnnError> {
        let n = sets.size();
        if let Some(actual) = labels.map(<[usize]>::len).filter(|&len| len != n) {
            return Err(KnnError::SizeMismatch {
                what: "labels",
                expected: n,
                actual,
            });
        }

        let mut total = vec![0; n];
        let mut good = vec![0; n];
        let mut bad = vec![0; n];
        for (i, list) in sets.iter().enumerate() {
            for &j in list {
                total[j] += 1;
                if let Some(labels) = labels {
                    if labels[i] == labels[j] {
                        good[j] += 1;
                    } else {
                        bad[j] += 1;
                    }
                }
            }
        }

        Ok(Self {
            k: sets.k(),
            total,
            good,
            bad,
            labeled: labels.is_some(),
        })
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.total.len()
    }

    /// Neighborhood size the counts were taken at.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns `true` when good/bad counts are meaningful.
    pub fn is_labeled(&self) -> bool {
        self.labeled
    }

    /// Total occurrence counts (hubness) per point.
    pub fn total(&self) -> &[usize] {
        &self.total
    }

    /// Label-agreeing occurrence counts per point.
    pub fn good(&self) -> &[usize] {
        &self.good
    }

    /// Label-disagreeing occurrence counts per point.
    pub fn bad(&self) -> &[usize] {
        &self.bad
    }

    /// Occurrence count at or above which a point is a hub, `2k`.
    pub fn hub_threshold(&self) -> usize {
        HUB_FACTOR * self.k
    }

    /// Returns `true` if point `i` occurs at least `2k` times.
    pub fn is_hub(&self, i: usize) -> bool {
        self.total[i] >= self.hub_threshold()
    }

    /// Returns `true` if point `i` never occurs.
    pub fn is_anti_hub(&self, i: usize) -> bool {
        self.total[i] == 0
    }

    /// Indices of all hubs, ascending.
    pub fn hubs(&self) -> Vec<usize> {
        (0..self.size()).filter(|&i| self.is_hub(i)).collect()
    }

    /// Indices of all anti-hubs, ascending.
    pub fn anti_hubs(&self) -> Vec<usize> {
        (0..self.size()).filter(|&i| self.is_anti_hub(i)).collect()
    }

    /// Fraction of points that are hubs.
    pub fn hub_rate(&self) -> f64 {
        self.rate(|i| self.is_hub(i))
    }

    /// Fraction of points that are anti-hubs.
    pub fn anti_hub_rate(&self) -> f64 {
        self.rate(|i| self.is_anti_hub(i))
    }

    fn rate(&self, pred: impl Fn(usize) -> bool) -> f64 {
        if self.total.is_empty() {
            return 0.0;
        }
        (0..self.size()).filter(|&i| pred(i)).count() as f64 / self.size() as f64
    }

    /// Skewness (third standardized moment) of the total occurrence counts.
    ///
    /// Returns `None` when every point occurs equally often.
    pub fn skewness(&self) -> Option<f64> {
        let n = self.total.len() as f64;
        if self.total.is_empty() {
            return None;
        }
        let mean = self.total.iter().sum::<usize>() as f64 / n;
        let (m2, m3) = self.total.iter().fold((0.0, 0.0), |(m2, m3), &t| {
            let d = t as f64 - mean;
            (m2 + d * d, m3 + d * d * d)
        });
        let (m2, m3) = (m2 / n, m3 / n);
        if m2 <= f64::EPSILON {
            return None;
        }
        Some(m3 / m2.powf(1.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use hubness_distance::DistanceMatrix;

    fn sets_on_line(coords: &[f64], k: usize) -> NeighborSets {
        let m = DistanceMatrix::from_pair_fn(coords.len(), |i, j| (coords[i] - coords[j]).abs());
        NeighborSets::compute(&m, k).unwrap()
    }

    #[test]
    fn test_unlabeled_counts() {
        // 0→1, 1→2, 2→1, 3→2
        let profile = sets_on_line(&[0.0, 1.0, 1.5, 9.0], 1)
            .occurrences(None)
            .unwrap();
        assert_eq!(profile.total(), &[0, 2, 2, 0]);
        assert_eq!(profile.good(), &[0, 0, 0, 0]);
        assert_eq!(profile.bad(), &[0, 0, 0, 0]);
        assert!(!profile.is_labeled());
    }

    #[test]
    fn test_labeled_split() {
        // 0→1, 1→2, 2→1, 3→2 with labels [a, a, b, b]
        let labels = [0, 0, 1, 1];
        let profile = sets_on_line(&[0.0, 1.0, 1.5, 9.0], 1)
            .occurrences(Some(&labels[..]))
            .unwrap();
        assert_eq!(profile.total(), &[0, 2, 2, 0]);
        // 1 occurs for 0 (same) and 2 (different)
        assert_eq!(profile.good(), &[0, 1, 1, 0]);
        assert_eq!(profile.bad(), &[0, 1, 1, 0]);
        assert!(profile.is_labeled());
    }

    #[test]
    fn test_label_length_checked() {
        let sets = sets_on_line(&[0.0, 1.0, 2.0], 1);
        assert!(matches!(
            sets.occurrences(Some(&[0, 1][..])),
            Err(KnnError::SizeMismatch {
                what: "labels",
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_hubs_and_anti_hubs() {
        let profile = sets_on_line(&[0.0, 1.0, 1.5, 9.0], 1)
            .occurrences(None)
            .unwrap();
        assert_eq!(profile.hub_threshold(), 2);
        assert_eq!(profile.hubs(), vec![1, 2]);
        assert_eq!(profile.anti_hubs(), vec![0, 3]);
        assert_abs_diff_eq!(profile.hub_rate(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(profile.anti_hub_rate(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_uniform_is_none() {
        let profile = sets_on_line(&[0.0, 1.0, 10.0, 11.0], 1)
            .occurrences(None)
            .unwrap();
        assert_eq!(profile.total(), &[1, 1, 1, 1]);
        assert!(profile.skewness().is_none());
    }

    #[test]
    fn test_skewness_hand_computed() {
        let profile = sets_on_line(&[0.0, 1.0, -1.1, 2.5, -3.0], 1)
            .occurrences(None)
            .unwrap();
        // 0→1, 1→0, 2→0, 3→1, 4→2  => totals [2, 2, 1, 0, 0]
        assert_eq!(profile.total(), &[2, 2, 1, 0, 0]);
        // mean 1, deviations [1, 1, 0, -1, -1]: m2 = 4/5, m3 = 0
        assert_abs_diff_eq!(profile.skewness().unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_right_tail_is_positive() {
        // Star: 1, 2 and 3 all pick the centre 0; 0 picks 1 by index.
        let m = DistanceMatrix::from_pair_fn(4, |i, _| if i == 0 { 1.0 } else { 5.0 });
        let profile = NeighborSets::compute(&m, 1)
            .unwrap()
            .occurrences(None)
            .unwrap();
        assert_eq!(profile.total(), &[3, 1, 0, 0]);
        assert!(profile.skewness().unwrap() > 0.0);
    }
}
