//! Bounded nearest-neighbor selection.

/// Offers candidate `(d, j)` to `kept`, an ascending list of at most `cap`
/// `(distance, index)` pairs.
///
/// The candidate is inserted when the list is not full or `d` is strictly
/// smaller than the current worst distance. It lands after every kept entry
/// with distance `<= d`, so when candidates are offered in increasing index
/// order, ties are broken by the lower index and the result is the
/// lexicographically smallest `cap` pairs.
///
/// NaN distances violate the distance contract and are not ordered
/// meaningfully.
#[inline]
pub(crate) fn insert_bounded(kept: &mut Vec<(f64, usize)>, cap: usize, d: f64, j: usize) {
    debug_assert!(cap >= 1);
    if kept.len() == cap {
        match kept.last() {
            Some(&(worst, _)) if d < worst => {
                kept.pop();
            }
            _ => return,
        }
    }
    let pos = kept.partition_point(|&(kd, _)| kd <= d);
    kept.insert(pos, (d, j));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Offers `dists[j]` for every `j` in order.
    fn run(dists: &[f64], cap: usize) -> Vec<(f64, usize)> {
        let mut kept = Vec::new();
        for (j, &d) in dists.iter().enumerate() {
            insert_bounded(&mut kept, cap, d, j);
        }
        kept
    }

    #[test]
    fn test_k1_closest() {
        assert_eq!(run(&[9.0, 1.0, 4.0], 1), vec![(1.0, 1)]);
    }

    #[test]
    fn test_cap_equals_len_sorts_everything() {
        let kept = run(&[4.0, 1.0, 9.0, 0.0], 4);
        assert_eq!(kept, vec![(0.0, 3), (1.0, 1), (4.0, 0), (9.0, 2)]);
    }

    #[test]
    fn test_ties_prefer_lower_index() {
        // Indices 0, 1 and 3 tie at distance 4.0; only two slots remain after 2.
        let kept = run(&[4.0, 4.0, 1.0, 4.0], 3);
        assert_eq!(kept, vec![(1.0, 2), (4.0, 0), (4.0, 1)]);
    }

    #[test]
    fn test_tie_with_worst_does_not_replace() {
        let kept = run(&[2.0, 3.0, 3.0], 2);
        assert_eq!(kept, vec![(2.0, 0), (3.0, 1)]);
    }

    #[test]
    fn test_all_zero_distances() {
        let kept = run(&[0.0; 6], 3);
        assert_eq!(kept, vec![(0.0, 0), (0.0, 1), (0.0, 2)]);
    }

    #[test]
    fn test_matches_full_sort() {
        let dists = [5.0, 3.0, 8.0, 3.0, 1.0, 7.0, 1.0, 2.0, 9.0, 0.5];
        for cap in 1..=dists.len() {
            let mut sorted: Vec<(f64, usize)> =
                dists.iter().copied().enumerate().map(|(i, d)| (d, i)).collect();
            sorted.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
            sorted.truncate(cap);
            assert_eq!(run(&dists, cap), sorted, "cap = {cap}");
        }
    }
}
