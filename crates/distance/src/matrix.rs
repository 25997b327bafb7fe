//! Upper-triangular storage for symmetric pairwise distances.

use std::io::{self, Write};

/// Symmetric, zero-diagonal pairwise distance matrix.
///
/// Only the `n(n−1)/2` cells above the diagonal are stored, row-major: row
/// `i` holds `d(i, j)` for `j = i+1 .. n`. [`get`](Self::get) is symmetric
/// and returns zero on the diagonal.
///
/// A matrix is read-only once constructed; derived distances (e.g. shared
/// neighbor distances) are built as a new matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<f64>,
}

/// Number of stored cells for `n` points.
pub(crate) fn n_pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Offset of the first stored cell of row `i`, valid for `i <= n`.
pub(crate) fn row_offset(n: usize, i: usize) -> usize {
    i * (2 * n).saturating_sub(i + 1) / 2
}

impl DistanceMatrix {
    pub(crate) fn from_cells(n: usize, cells: Vec<f64>) -> Self {
        debug_assert_eq!(cells.len(), n_pairs(n));
        Self { n, cells }
    }

    /// Builds a matrix by evaluating `f(i, j)` for every pair `i < j`.
    pub fn from_pair_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut cells = Vec::with_capacity(n_pairs(n));
        for i in 0..n {
            for j in (i + 1)..n {
                cells.push(f(i, j));
            }
        }
        Self::from_cells(n, cells)
    }

    /// Builds a matrix row by row.
    ///
    /// `f(i, row)` fills `row[t] = d(i, i + 1 + t)`; the slice is zeroed on entry.
    pub fn from_row_fn(n: usize, mut f: impl FnMut(usize, &mut [f64])) -> Self {
        let mut cells = vec![0.0; n_pairs(n)];
        for i in 0..n {
            let start = row_offset(n, i);
            let end = row_offset(n, i + 1);
            f(i, &mut cells[start..end]);
        }
        Self::from_cells(n, cells)
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of stored pairs, `n(n−1)/2`.
    pub fn n_pairs(&self) -> usize {
        self.cells.len()
    }

    /// Distance between points `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.n && j < self.n,
            "index ({i}, {j}) out of range for {} points",
            self.n
        );
        match i.cmp(&j) {
            std::cmp::Ordering::Equal => 0.0,
            std::cmp::Ordering::Less => self.cells[row_offset(self.n, i) + (j - i - 1)],
            std::cmp::Ordering::Greater => self.cells[row_offset(self.n, j) + (i - j - 1)],
        }
    }

    /// Stored upper part of row `i`: distances to points `i+1 .. n`.
    pub fn upper_row(&self, i: usize) -> &[f64] {
        &self.cells[row_offset(self.n, i)..row_offset(self.n, i + 1)]
    }

    /// Iterates `(i, j, d)` over all stored pairs in row-major order.
    pub fn iter_pairs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.n).flat_map(move |i| {
            self.upper_row(i)
                .iter()
                .enumerate()
                .map(move |(t, &d)| (i, i + 1 + t, d))
        })
    }
}

/// Writes one `i<TAB>j<TAB>distance` line per stored pair.
pub fn write_distance_table<W: Write>(matrix: &DistanceMatrix, mut writer: W) -> io::Result<()> {
    for (i, j, d) in matrix.iter_pairs() {
        writeln!(writer, "{i}\t{j}\t{d}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_offsets_partition_cells() {
        for n in 0..8 {
            assert_eq!(row_offset(n, 0), 0);
            assert_eq!(row_offset(n, n), n_pairs(n));
            for i in 0..n {
                assert_eq!(row_offset(n, i + 1) - row_offset(n, i), n - 1 - i);
            }
        }
    }

    #[test]
    fn test_get_is_symmetric_with_zero_diagonal() {
        let m = DistanceMatrix::from_pair_fn(5, |i, j| (10 * i + j) as f64);
        for i in 0..5 {
            assert_eq!(m.get(i, i), 0.0);
            for j in (i + 1)..5 {
                assert_eq!(m.get(i, j), (10 * i + j) as f64);
                assert_eq!(m.get(j, i), m.get(i, j));
            }
        }
        assert_eq!(m.n_pairs(), 10);
    }

    #[test]
    fn test_from_row_fn_matches_pair_fn() {
        let by_pair = DistanceMatrix::from_pair_fn(6, |i, j| (i * j) as f64 + 0.5);
        let by_row = DistanceMatrix::from_row_fn(6, |i, row| {
            for (t, cell) in row.iter_mut().enumerate() {
                *cell = (i * (i + 1 + t)) as f64 + 0.5;
            }
        });
        assert_eq!(by_pair, by_row);
    }

    #[test]
    fn test_degenerate_sizes() {
        let empty = DistanceMatrix::from_pair_fn(0, |_, _| 1.0);
        assert_eq!(empty.size(), 0);
        assert_eq!(empty.n_pairs(), 0);

        let single = DistanceMatrix::from_pair_fn(1, |_, _| 1.0);
        assert_eq!(single.n_pairs(), 0);
        assert_eq!(single.get(0, 0), 0.0);
        assert!(single.upper_row(0).is_empty());
    }

    #[test]
    fn test_iter_pairs_order() {
        let m = DistanceMatrix::from_pair_fn(3, |i, j| (i + j) as f64);
        let pairs: Vec<_> = m.iter_pairs().collect();
        assert_eq!(pairs, vec![(0, 1, 1.0), (0, 2, 2.0), (1, 2, 3.0)]);
    }

    #[test]
    fn test_write_distance_table() {
        let m = DistanceMatrix::from_pair_fn(3, |i, j| (i + j) as f64 * 0.5);
        let mut out = Vec::new();
        write_distance_table(&m, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "0\t1\t0.5\n0\t2\t1\n1\t2\t1.5\n");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let m = DistanceMatrix::from_pair_fn(2, |_, _| 1.0);
        m.get(0, 2);
    }
}
