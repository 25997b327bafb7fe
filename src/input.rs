//! Dataset JSON reader.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use hubness_data::{Dataset, FeatureVector, SparseVector};

/// On-disk dataset document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetDocument {
    points: Vec<PointJson>,
    #[serde(default)]
    labels: Option<Vec<usize>>,
}

/// A point stored either as a dense array or as sparse index/value lists.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PointJson {
    Dense(Vec<f64>),
    Sparse { indices: Vec<usize>, values: Vec<f64> },
}

/// Parses a dataset document.
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let doc: DatasetDocument = serde_json::from_str(json).context("failed to parse dataset JSON")?;
    let points = doc
        .points
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let vector = match point {
                PointJson::Dense(values) => FeatureVector::dense(values),
                PointJson::Sparse { indices, values } => {
                    SparseVector::from_parts(&indices, &values).map(FeatureVector::Sparse)
                }
            };
            vector.with_context(|| format!("invalid point {i}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let dataset = Dataset::new(points);
    match doc.labels {
        Some(labels) => dataset.with_labels(labels).context("invalid labels"),
        None => Ok(dataset),
    }
}

/// Reads and parses the dataset at `path`.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset: {}", path.display()))?;
    parse_dataset(&json).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_points() {
        let ds = parse_dataset(r#"{"points": [[0.0, 1.0], [2.0, 3.0]]}"#).unwrap();
        assert_eq!(ds.size(), 2);
        assert_eq!(ds.vector_at(1).as_dense(), Some(&[2.0, 3.0][..]));
        assert!(ds.labels().is_none());
    }

    #[test]
    fn test_sparse_and_labels() {
        let ds = parse_dataset(
            r#"{
                "points": [
                    {"indices": [0, 4], "values": [1.0, 2.0]},
                    [0.0, 0.0, 0.0, 0.0, 1.0]
                ],
                "labels": [1, 0]
            }"#,
        )
        .unwrap();
        assert!(ds.vector_at(0).is_sparse());
        assert!(!ds.vector_at(1).is_sparse());
        assert_eq!(ds.labels(), Some(&[1, 0][..]));
    }

    #[test]
    fn test_invalid_sparse_point() {
        let err = parse_dataset(r#"{"points": [{"indices": [3, 1], "values": [1.0, 2.0]}]}"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("invalid point 0"));
    }

    #[test]
    fn test_label_count_mismatch() {
        let result = parse_dataset(r#"{"points": [[0.0], [1.0]], "labels": [0]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse_dataset(r#"{"points": [], "names": []}"#).is_err());
    }
}
