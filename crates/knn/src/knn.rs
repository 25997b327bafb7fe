//! Dataset-level entry point: distance matrix, neighbor sets and occurrences.

use hubness_data::Dataset;
use hubness_distance::{Distance, MatrixConfig, build_distance_matrix};
use tracing::info;

use crate::error::KnnError;
use crate::neighbors::{NeighborSets, validate_k};
use crate::occurrence::OccurrenceProfile;

/// Computes the k-nearest-neighbor sets of every point of `dataset` under
/// `distance`, together with their occurrence profile.
///
/// The pairwise matrix is built in parallel as configured by `config` and
/// dropped afterwards; use [`build_distance_matrix`] and
/// [`NeighborSets::compute`] directly to keep it. Occurrences are split into
/// good and bad when the dataset carries labels.
///
/// # Errors
///
/// * [`KnnError::InvalidInput`] if the dataset is empty.
/// * [`KnnError::InvalidNeighborhoodSize`] unless `1 <= k < n`; checked before
///   any distance is computed.
/// * [`KnnError::Distance`] if building the matrix fails.
#[tracing::instrument(skip_all, fields(n = dataset.size(), k = k))]
pub fn compute_neighbor_sets(
    dataset: &Dataset,
    k: usize,
    distance: &dyn Distance,
    config: &MatrixConfig,
) -> Result<(NeighborSets, OccurrenceProfile), KnnError> {
    if dataset.is_empty() {
        return Err(KnnError::InvalidInput("dataset is empty"));
    }
    validate_k(k, dataset.size())?;

    let matrix = build_distance_matrix(dataset, distance, config)?;
    let sets = NeighborSets::compute(&matrix, k)?;
    let profile = sets.occurrences(dataset.labels())?;
    info!(
        hub_rate = profile.hub_rate(),
        anti_hub_rate = profile.anti_hub_rate(),
        "neighbor sets ready"
    );
    Ok((sets, profile))
}
