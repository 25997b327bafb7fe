//! k-nearest-neighbor lists for every point of a distance matrix.

use std::io::{self, Write};

use hubness_distance::DistanceMatrix;
use tracing::debug;

use crate::error::KnnError;
use crate::occurrence::OccurrenceProfile;
use crate::select::insert_bounded;

/// Ordered k-nearest-neighbor lists for every point.
///
/// List `i` holds the `k` points closest to `i` by ascending
/// `(distance, index)`: equal distances are broken by the lower index, so the
/// lists are reproducible bit for bit. A point is never its own neighbor and
/// no list holds duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborSets {
    n: usize,
    k: usize,
    /// Row-major `[n × k]` neighbor indices.
    indices: Vec<usize>,
    /// Row-major `[n × k]` neighbor distances.
    distances: Vec<f64>,
}

/// Checks `1 <= k < n`.
pub(crate) fn validate_k(k: usize, n: usize) -> Result<(), KnnError> {
    if k == 0 || k >= n {
        return Err(KnnError::InvalidNeighborhoodSize { k, n });
    }
    Ok(())
}

impl NeighborSets {
    /// Computes the `k` nearest neighbors of every point of `matrix`.
    ///
    /// Each point keeps a bounded, insertion-sorted list of its best
    /// candidates while scanning all other points in index order.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::InvalidNeighborhoodSize`] unless `1 <= k < n`.
    #[tracing::instrument(skip(matrix), fields(n = matrix.size()))]
    pub fn compute(matrix: &DistanceMatrix, k: usize) -> Result<Self, KnnError> {
        let n = matrix.size();
        validate_k(k, n)?;

        let mut indices = Vec::with_capacity(n * k);
        let mut distances = Vec::with_capacity(n * k);
        let mut kept = Vec::with_capacity(k + 1);
        for i in 0..n {
            kept.clear();
            for j in (0..n).filter(|&j| j != i) {
                insert_bounded(&mut kept, k, matrix.get(i, j), j);
            }
            for &(d, j) in &kept {
                indices.push(j);
                distances.push(d);
            }
        }
        debug!(n, k, "neighbor sets computed");

        Ok(Self {
            n,
            k,
            indices,
            distances,
        })
    }

    /// Grows every list to `k_new` neighbors, reusing the current lists.
    ///
    /// Only points outside a list are scanned for the `k_new − k` additional
    /// slots. The result is identical to [`NeighborSets::compute`] at
    /// `k_new`, provided `matrix` is the matrix these sets were computed from.
    ///
    /// # Errors
    ///
    /// * [`KnnError::SizeMismatch`] if `matrix` covers a different number of points.
    /// * [`KnnError::InvalidNeighborhoodSize`] unless `k < k_new < n`.
    #[tracing::instrument(skip(self, matrix), fields(n = self.n, k = self.k))]
    pub fn extend_to(&self, matrix: &DistanceMatrix, k_new: usize) -> Result<Self, KnnError> {
        if matrix.size() != self.n {
            return Err(KnnError::SizeMismatch {
                what: "distance matrix",
                expected: self.n,
                actual: matrix.size(),
            });
        }
        if k_new <= self.k {
            return Err(KnnError::InvalidNeighborhoodSize {
                k: k_new,
                n: self.n,
            });
        }
        validate_k(k_new, self.n)?;

        let n = self.n;
        let extra = k_new - self.k;
        let mut indices = Vec::with_capacity(n * k_new);
        let mut distances = Vec::with_capacity(n * k_new);
        let mut member = vec![false; n];
        let mut kept = Vec::with_capacity(extra + 1);
        for i in 0..n {
            let current = self.neighbors(i);
            member[i] = true;
            for &j in current {
                member[j] = true;
            }

            kept.clear();
            for j in (0..n).filter(|&j| !member[j]) {
                insert_bounded(&mut kept, extra, matrix.get(i, j), j);
            }

            indices.extend_from_slice(current);
            distances.extend_from_slice(self.distances(i));
            for &(d, j) in &kept {
                indices.push(j);
                distances.push(d);
            }

            member[i] = false;
            for &j in current {
                member[j] = false;
            }
        }
        debug!(n, k = k_new, reused = self.k, "neighbor sets extended");

        Ok(Self {
            n,
            k: k_new,
            indices,
            distances,
        })
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Neighborhood size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Neighbors of point `i`, nearest first.
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.indices[i * self.k..(i + 1) * self.k]
    }

    /// Distances from point `i` to its neighbors, ascending.
    pub fn distances(&self, i: usize) -> &[f64] {
        &self.distances[i * self.k..(i + 1) * self.k]
    }

    /// Distance from point `i` to its k-th nearest neighbor.
    pub fn k_distance(&self, i: usize) -> f64 {
        self.distances[(i + 1) * self.k - 1]
    }

    /// Iterates the neighbor lists in point order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.indices.chunks(self.k)
    }

    /// For every point, the points whose lists contain it, ascending.
    pub fn reverse_neighbors(&self) -> Vec<Vec<usize>> {
        let mut reverse = vec![Vec::new(); self.n];
        for (i, list) in self.iter().enumerate() {
            for &j in list {
                reverse[j].push(i);
            }
        }
        reverse
    }

    /// Counts neighbor occurrences, splitting them by label agreement when
    /// `labels` is given.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::SizeMismatch`] if `labels` does not have one entry
    /// per point.
    pub fn occurrences(&self, labels: Option<&[usize]>) -> Result<OccurrenceProfile, KnnError> {
        OccurrenceProfile::from_neighbor_sets(self, labels)
    }
}

/// Writes one `i<TAB>n₁ n₂ … n_k` line per point.
pub fn write_neighbor_table<W: Write>(sets: &NeighborSets, mut writer: W) -> io::Result<()> {
    for (i, list) in sets.iter().enumerate() {
        write!(writer, "{i}\t")?;
        for (pos, j) in list.iter().enumerate() {
            if pos > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{j}")?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}
