//! Minkowski and cosine kernels over dense, sparse and mixed vectors.

use hubness_data::FeatureVector;

use crate::error::DistanceError;

/// Minkowski distance `(Σ|aᵢ − bᵢ|^p)^(1/p)` between two feature vectors.
///
/// Dispatches to closed forms for `p = 1` and `p = 2`. Sparse operands sum
/// over the union of stored indices; dense operands of different length are
/// rejected. Mixed dense/sparse pairs treat the dense vector as sparse.
pub(crate) fn minkowski(
    a: &FeatureVector,
    b: &FeatureVector,
    p: f64,
) -> Result<f64, DistanceError> {
    if let (Some(x), Some(y)) = (a.as_dense(), b.as_dense()) {
        if x.len() != y.len() {
            return Err(DistanceError::DimensionMismatch {
                left: x.len(),
                right: y.len(),
            });
        }
        return Ok(minkowski_dense(x, y, p));
    }

    let mut acc = 0.0;
    for_each_union_diff(entries(a), entries(b), |d| acc += pow_abs(d, p));
    Ok(root(acc, p))
}

/// Cosine distance `1 − cos(a, b)`, clamped to `[0, 2]`.
///
/// Two zero vectors are at distance 0; a zero vector and a non-zero vector
/// are at distance 1.
pub(crate) fn cosine(a: &FeatureVector, b: &FeatureVector) -> Result<f64, DistanceError> {
    let dot = if let (Some(x), Some(y)) = (a.as_dense(), b.as_dense()) {
        if x.len() != y.len() {
            return Err(DistanceError::DimensionMismatch {
                left: x.len(),
                right: y.len(),
            });
        }
        x.iter().zip(y).map(|(u, v)| u * v).sum::<f64>()
    } else {
        let mut dot = 0.0;
        for_each_intersection(entries(a), entries(b), |u, v| dot += u * v);
        dot
    };

    let norm_a = entries(a).map(|(_, v)| v * v).sum::<f64>().sqrt();
    let norm_b = entries(b).map(|(_, v)| v * v).sum::<f64>().sqrt();
    let d = match (norm_a == 0.0, norm_b == 0.0) {
        (true, true) => 0.0,
        (true, false) | (false, true) => 1.0,
        (false, false) => 1.0 - dot / (norm_a * norm_b),
    };
    Ok(d.clamp(0.0, 2.0))
}

#[inline]
fn minkowski_dense(x: &[f64], y: &[f64], p: f64) -> f64 {
    if p == 1.0 {
        x.iter().zip(y).map(|(u, v)| (u - v).abs()).sum()
    } else if p == 2.0 {
        x.iter()
            .zip(y)
            .map(|(u, v)| (u - v) * (u - v))
            .sum::<f64>()
            .sqrt()
    } else {
        x.iter()
            .zip(y)
            .map(|(u, v)| (u - v).abs().powf(p))
            .sum::<f64>()
            .powf(1.0 / p)
    }
}

#[inline]
fn pow_abs(d: f64, p: f64) -> f64 {
    if p == 1.0 {
        d.abs()
    } else if p == 2.0 {
        d * d
    } else {
        d.abs().powf(p)
    }
}

#[inline]
fn root(acc: f64, p: f64) -> f64 {
    if p == 1.0 {
        acc
    } else if p == 2.0 {
        acc.sqrt()
    } else {
        acc.powf(1.0 / p)
    }
}

/// Iterates a vector as `(index, value)` pairs in increasing index order.
fn entries(v: &FeatureVector) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
    match v {
        FeatureVector::Dense(values) => Box::new(values.iter().copied().enumerate()),
        FeatureVector::Sparse(sparse) => Box::new(sparse.entries().iter().copied()),
    }
}

/// Calls `f(a_i − b_i)` for every index stored in either operand.
fn for_each_union_diff<A, B>(a: A, b: B, mut f: impl FnMut(f64))
where
    A: Iterator<Item = (usize, f64)>,
    B: Iterator<Item = (usize, f64)>,
{
    let mut a = a.peekable();
    let mut b = b.peekable();
    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (Some((ia, va)), Some((ib, vb))) => {
                if ia == ib {
                    f(va - vb);
                    a.next();
                    b.next();
                } else if ia < ib {
                    f(va);
                    a.next();
                } else {
                    f(-vb);
                    b.next();
                }
            }
            (Some((_, va)), None) => {
                f(va);
                a.next();
            }
            (None, Some((_, vb))) => {
                f(-vb);
                b.next();
            }
            (None, None) => break,
        }
    }
}

/// Calls `f(a_i, b_i)` for every index stored in both operands.
fn for_each_intersection<A, B>(a: A, b: B, mut f: impl FnMut(f64, f64))
where
    A: Iterator<Item = (usize, f64)>,
    B: Iterator<Item = (usize, f64)>,
{
    let mut a = a.peekable();
    let mut b = b.peekable();
    while let (Some(&(ia, va)), Some(&(ib, vb))) = (a.peek(), b.peek()) {
        if ia == ib {
            f(va, vb);
            a.next();
            b.next();
        } else if ia < ib {
            a.next();
        } else {
            b.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn dense(v: &[f64]) -> FeatureVector {
        FeatureVector::dense(v.to_vec()).unwrap()
    }

    fn sparse(v: &[(usize, f64)]) -> FeatureVector {
        FeatureVector::sparse(v.to_vec()).unwrap()
    }

    #[test]
    fn test_manhattan_hand_computed() {
        let d = minkowski(&dense(&[0.0, 0.0]), &dense(&[3.0, -4.0]), 1.0).unwrap();
        assert_abs_diff_eq!(d, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_euclidean_hand_computed() {
        let d = minkowski(&dense(&[0.0, 0.0]), &dense(&[3.0, -4.0]), 2.0).unwrap();
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_general_exponent_matches_fast_paths() {
        let a = dense(&[1.0, 2.5, -3.0]);
        let b = dense(&[0.5, -1.0, 2.0]);
        for p in [1.0, 2.0] {
            let fast = minkowski(&a, &b, p).unwrap();
            let x = a.as_dense().unwrap();
            let y = b.as_dense().unwrap();
            let slow = x
                .iter()
                .zip(y)
                .map(|(u, v)| (u - v).abs().powf(p))
                .sum::<f64>()
                .powf(1.0 / p);
            assert_abs_diff_eq!(fast, slow, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_p4_hand_computed() {
        // (1^4 + 1^4)^(1/4) = 2^(1/4)
        let d = minkowski(&dense(&[0.0, 0.0]), &dense(&[1.0, 1.0]), 4.0).unwrap();
        assert_abs_diff_eq!(d, 2.0_f64.powf(0.25), epsilon = 1e-12);
    }

    #[test]
    fn test_fractional_exponent() {
        // (1^0.5 + 1^0.5)^2 = 4
        let d = minkowski(&dense(&[0.0, 0.0]), &dense(&[1.0, 1.0]), 0.5).unwrap();
        assert_abs_diff_eq!(d, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dense_dimension_mismatch() {
        let err = minkowski(&dense(&[0.0]), &dense(&[0.0, 1.0]), 2.0).unwrap_err();
        assert!(matches!(
            err,
            DistanceError::DimensionMismatch { left: 1, right: 2 }
        ));
    }

    #[test]
    fn test_sparse_union_semantics() {
        // a = {0: 1, 3: 2}, b = {3: 5, 6: 4}
        // diffs over union: 1, -3, -4 => L1 = 8, L2 = sqrt(26)
        let a = sparse(&[(0, 1.0), (3, 2.0)]);
        let b = sparse(&[(3, 5.0), (6, 4.0)]);
        assert_abs_diff_eq!(minkowski(&a, &b, 1.0).unwrap(), 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            minkowski(&a, &b, 2.0).unwrap(),
            26.0_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sparse_matches_dense() {
        let a = dense(&[0.0, 1.5, 0.0, -2.0, 0.0]);
        let b = dense(&[3.0, 0.0, 0.0, 1.0, 0.5]);
        let sa = FeatureVector::Sparse(a.to_sparse());
        let sb = FeatureVector::Sparse(b.to_sparse());
        for p in [0.5, 1.0, 2.0, 3.0] {
            let want = minkowski(&a, &b, p).unwrap();
            assert_abs_diff_eq!(minkowski(&sa, &sb, p).unwrap(), want, epsilon = 1e-12);
            assert_abs_diff_eq!(minkowski(&a, &sb, p).unwrap(), want, epsilon = 1e-12);
            assert_abs_diff_eq!(minkowski(&sa, &b, p).unwrap(), want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sparse_empty_vectors() {
        let e = sparse(&[]);
        assert_eq!(minkowski(&e, &e, 2.0).unwrap(), 0.0);
        assert_abs_diff_eq!(
            minkowski(&e, &sparse(&[(2, -3.0)]), 1.0).unwrap(),
            3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_cosine_orthogonal_and_parallel() {
        let x = dense(&[1.0, 0.0]);
        let y = dense(&[0.0, 2.0]);
        let z = dense(&[3.0, 0.0]);
        assert_abs_diff_eq!(cosine(&x, &y).unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cosine(&x, &z).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            cosine(&x, &dense(&[-1.0, 0.0])).unwrap(),
            2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_cosine_zero_vectors() {
        let zero = dense(&[0.0, 0.0]);
        assert_eq!(cosine(&zero, &zero).unwrap(), 0.0);
        assert_eq!(cosine(&zero, &dense(&[1.0, 1.0])).unwrap(), 1.0);
    }

    #[test]
    fn test_cosine_sparse_matches_dense() {
        let a = dense(&[1.0, 0.0, 2.0, 0.0]);
        let b = dense(&[0.0, 3.0, 1.0, 4.0]);
        let sa = FeatureVector::Sparse(a.to_sparse());
        let sb = FeatureVector::Sparse(b.to_sparse());
        let want = cosine(&a, &b).unwrap();
        assert_abs_diff_eq!(cosine(&sa, &sb).unwrap(), want, epsilon = 1e-12);
        assert_abs_diff_eq!(cosine(&a, &sb).unwrap(), want, epsilon = 1e-12);
    }
}
