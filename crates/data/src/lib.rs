//! Feature vectors and labelled datasets.
//!
//! A [`Dataset`] is an ordered collection of [`FeatureVector`]s, each either
//! dense (a slice of attributes) or sparse (index-to-weight pairs where absent
//! attributes are zero), with optional class labels.
//!
//! # Quick start
//!
//! ```
//! use hubness_data::{Dataset, FeatureVector};
//!
//! let dataset = Dataset::from_rows(vec![vec![0.0, 0.0], vec![0.0, 1.0]])
//!     .unwrap()
//!     .with_labels(vec![0, 1])
//!     .unwrap();
//!
//! assert_eq!(dataset.size(), 2);
//! assert_eq!(dataset.label_at(1), Some(1));
//!
//! let sparse = FeatureVector::sparse(vec![(0, 1.5), (7, -2.0)]).unwrap();
//! assert_eq!(sparse.dim(), 8);
//! ```

pub mod dataset;
pub mod error;
pub mod vector;

pub use dataset::Dataset;
pub use error::DataError;
pub use vector::{FeatureVector, SparseVector};
