//! Integration tests for dataset construction.

use hubness_data::{DataError, Dataset, FeatureVector, SparseVector};

#[test]
fn mixed_representations_share_a_dataset() {
    let points = vec![
        FeatureVector::dense(vec![1.0, 0.0, 2.0]).unwrap(),
        FeatureVector::sparse(vec![(0, 1.0), (2, 2.0)]).unwrap(),
    ];
    let ds = Dataset::new(points).with_labels(vec![1, 1]).unwrap();

    assert_eq!(ds.size(), 2);
    assert_eq!(ds.n_classes(), 2);
    assert_eq!(ds.vector_at(0).to_sparse(), *ds.vector_at(1).as_sparse().unwrap());
}

#[test]
fn sparse_from_parts_round_trips_entries() {
    let v = SparseVector::from_parts(&[0, 3, 9], &[0.5, 1.5, -4.0]).unwrap();
    assert_eq!(v.entries(), &[(0, 0.5), (3, 1.5), (9, -4.0)]);
}

#[test]
fn labels_must_cover_every_point() {
    let ds = Dataset::from_rows(vec![vec![0.0]; 3]).unwrap();
    let result = ds.with_labels(vec![0, 1, 0, 1]);
    assert!(matches!(
        result,
        Err(DataError::LabelCountMismatch {
            labels: 4,
            points: 3
        })
    ));
}
