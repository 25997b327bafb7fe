//! Parallel construction of the pairwise distance matrix.

use std::ops::Range;
use std::time::Instant;

use hubness_data::Dataset;
use rayon::prelude::*;
use tracing::debug;

use crate::config::MatrixConfig;
use crate::error::DistanceError;
use crate::matrix::{DistanceMatrix, n_pairs, row_offset};
use crate::metric::Distance;

/// Computes the full pairwise distance matrix of `dataset`.
///
/// Rows are split into contiguous blocks, one per worker, holding roughly
/// equal numbers of cells. Each worker computes `d(i, j)` for its rows `i`
/// against every `j > i` and writes into its own disjoint slice of the shared
/// buffer, so no locking is involved. The worker count is
/// [`MatrixConfig::effective_threads`]; a single block runs on the calling
/// thread.
///
/// # Errors
///
/// * [`DistanceError::InvalidInput`] if the dataset is empty.
/// * [`DistanceError::InvalidThreads`] if the configuration is invalid.
/// * [`DistanceError::DistanceComputation`] for the first failing pair; the
///   partially built matrix is discarded.
#[tracing::instrument(skip_all, fields(n = dataset.size(), threads = config.threads()))]
pub fn build_distance_matrix(
    dataset: &Dataset,
    distance: &dyn Distance,
    config: &MatrixConfig,
) -> Result<DistanceMatrix, DistanceError> {
    config.validate()?;
    if dataset.is_empty() {
        return Err(DistanceError::InvalidInput("dataset is empty"));
    }

    let n = dataset.size();
    let started = Instant::now();
    let ranges = partition_rows(n, config.effective_threads(n));
    let n_blocks = ranges.len();

    let mut cells = vec![0.0; n_pairs(n)];
    let mut blocks: Vec<(Range<usize>, &mut [f64])> = Vec::with_capacity(n_blocks);
    let mut rest = cells.as_mut_slice();
    for range in ranges {
        let len = row_offset(n, range.end) - row_offset(n, range.start);
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(len);
        blocks.push((range, head));
        rest = tail;
    }

    if n_blocks <= 1 {
        for (rows, out) in blocks {
            fill_rows(dataset, distance, rows, out)?;
        }
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n_blocks)
            .thread_name(|i| format!("hubness-distance-{i}"))
            .build()
            .map_err(|e| DistanceError::ThreadPool(e.to_string()))?;
        pool.install(|| {
            blocks
                .into_par_iter()
                .try_for_each(|(rows, out)| fill_rows(dataset, distance, rows, out))
        })?;
    }

    debug!(
        n,
        n_blocks,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "distance matrix built"
    );
    Ok(DistanceMatrix::from_cells(n, cells))
}

/// Fills the cells of `rows` against all later points.
fn fill_rows(
    dataset: &Dataset,
    distance: &dyn Distance,
    rows: Range<usize>,
    out: &mut [f64],
) -> Result<(), DistanceError> {
    let n = dataset.size();
    let mut cell = 0;
    for i in rows {
        let a = dataset.vector_at(i);
        for j in (i + 1)..n {
            out[cell] = distance.distance(a, dataset.vector_at(j)).map_err(|source| {
                DistanceError::DistanceComputation {
                    i,
                    j,
                    source: Box::new(source),
                }
            })?;
            cell += 1;
        }
    }
    debug_assert_eq!(cell, out.len());
    Ok(())
}

/// Splits `[0, n)` into at most `workers` contiguous row ranges with roughly
/// equal numbers of upper-triangular cells.
pub(crate) fn partition_rows(n: usize, workers: usize) -> Vec<Range<usize>> {
    if n < 2 || workers <= 1 {
        return vec![0..n];
    }
    let target = n_pairs(n).div_ceil(workers).max(1);
    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    let mut acc = 0;
    for row in 0..n {
        acc += n - 1 - row;
        if acc >= target && ranges.len() + 1 < workers {
            ranges.push(start..row + 1);
            start = row + 1;
            acc = 0;
        }
    }
    if start < n {
        ranges.push(start..n);
    }
    ranges
}
