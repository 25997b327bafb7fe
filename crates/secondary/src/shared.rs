//! Shared-neighbor distance computation.

use std::time::Instant;

use hubness_distance::DistanceMatrix;
use hubness_knn::{NeighborSets, OccurrenceProfile};
use tracing::debug;

use crate::config::{SecondaryConfig, SecondaryVariant};
use crate::error::SecondaryError;

/// Shared-neighbor distance between two points with neighbor lists `nx` and
/// `ny` of size `k`.
///
/// simcos counts the shared neighbors; simhub sums their weights under the
/// variant's [`HubWeighting`](crate::HubWeighting), reading occurrence counts
/// from `profile`. The result lies in `[0, 1]`.
pub fn secondary_distance(
    nx: &[usize],
    ny: &[usize],
    profile: &OccurrenceProfile,
    variant: &SecondaryVariant,
    k: usize,
) -> f64 {
    let n = profile.size();
    let shared: f64 = ny
        .iter()
        .filter(|z| nx.contains(z))
        .map(|&z| weight(variant, profile.total()[z], n))
        .sum();
    1.0 - shared / k as f64
}

fn weight(variant: &SecondaryVariant, total: usize, n: usize) -> f64 {
    match variant {
        SecondaryVariant::SimCos => 1.0,
        SecondaryVariant::SimHub(weighting) => weighting.weight(total, n),
    }
}

/// Computes the shared-neighbor distance of every pair of points.
///
/// For each row `i` the members of `N(i)` are flagged once, so every pair
/// costs `O(k)` and the whole matrix `O(n² k)`. Values equal
/// [`secondary_distance`]`(N(i), N(j), ..)` for `i < j`.
///
/// # Errors
///
/// * [`SecondaryError::InvalidInput`] if `sets` holds no points.
/// * [`SecondaryError::SizeMismatch`] if `profile` was not counted on `sets`.
#[tracing::instrument(skip_all, fields(n = sets.size(), k = sets.k(), variant = ?variant))]
pub fn compute_secondary_distances(
    sets: &NeighborSets,
    profile: &OccurrenceProfile,
    variant: &SecondaryVariant,
) -> Result<DistanceMatrix, SecondaryError> {
    let n = sets.size();
    if n == 0 {
        return Err(SecondaryError::InvalidInput("neighbor sets are empty"));
    }
    if profile.size() != n {
        return Err(SecondaryError::SizeMismatch {
            what: "occurrence profile size",
            expected: n,
            actual: profile.size(),
        });
    }
    if profile.k() != sets.k() {
        return Err(SecondaryError::SizeMismatch {
            what: "occurrence profile k",
            expected: sets.k(),
            actual: profile.k(),
        });
    }

    let started = Instant::now();
    let k = sets.k() as f64;
    let weights: Vec<f64> = profile
        .total()
        .iter()
        .map(|&total| weight(variant, total, n))
        .collect();

    let mut marked = vec![false; n];
    let matrix = DistanceMatrix::from_row_fn(n, |i, row| {
        for &z in sets.neighbors(i) {
            marked[z] = true;
        }
        for (cell, j) in row.iter_mut().zip(i + 1..n) {
            let shared: f64 = sets
                .neighbors(j)
                .iter()
                .filter(|&&z| marked[z])
                .map(|&z| weights[z])
                .sum();
            *cell = 1.0 - shared / k;
        }
        for &z in sets.neighbors(i) {
            marked[z] = false;
        }
    });

    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "secondary distances computed"
    );
    Ok(matrix)
}

/// Computes secondary distances and a fresh kNN pass over them.
///
/// The secondary pass uses `config.k()`, or the primary k when unset.
/// Occurrences are split by `labels` when given.
///
/// # Errors
///
/// Everything [`compute_secondary_distances`] returns, plus
/// [`SecondaryError::Knn`] if the secondary k is out of range or the labels
/// do not match.
pub fn secondary_neighbors(
    sets: &NeighborSets,
    profile: &OccurrenceProfile,
    config: &SecondaryConfig,
    labels: Option<&[usize]>,
) -> Result<(NeighborSets, OccurrenceProfile), SecondaryError> {
    config.validate()?;
    let matrix = compute_secondary_distances(sets, profile, config.variant())?;
    let secondary = NeighborSets::compute(&matrix, config.k().unwrap_or(sets.k()))?;
    let occurrences = secondary.occurrences(labels)?;
    Ok((secondary, occurrences))
}
