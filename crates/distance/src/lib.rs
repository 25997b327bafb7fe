//! Minkowski-family metrics and parallel pairwise distance matrices.
//!
//! | Metric | Formula | Notes |
//! |--------|---------|-------|
//! | Minkowski | `(Σ|aᵢ − bᵢ|^p)^(1/p)` | `p = 1` Manhattan, `p = 2` Euclidean |
//! | Cosine | `1 − cos(a, b)` | zero vectors handled explicitly |
//!
//! Sparse operands sum over the union of their stored indices, treating
//! absent attributes as zero.
//!
//! # Quick start
//!
//! ```
//! use hubness_data::Dataset;
//! use hubness_distance::{MatrixConfig, Metric, build_distance_matrix};
//!
//! let dataset = Dataset::from_rows(vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![3.0, 4.0],
//! ])
//! .unwrap();
//! let config = MatrixConfig::new().with_threads(2);
//!
//! let matrix = build_distance_matrix(&dataset, &Metric::euclidean(), &config).unwrap();
//! assert_eq!(matrix.get(0, 2), 5.0);
//! assert_eq!(matrix.get(2, 0), 5.0);
//! assert_eq!(matrix.get(1, 1), 0.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! build_distance_matrix()
//!   ├─ validate config, reject empty dataset
//!   ├─ partition_rows()            (builder.rs, balanced contiguous blocks)
//!   ├─ split buffer into disjoint &mut blocks
//!   ├─ rayon pool: fill_rows() per block
//!   │    └─ Distance::distance()   (metric.rs → kernel.rs)
//!   └─ DistanceMatrix              (matrix.rs, upper-triangular)
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod matrix;
pub mod metric;

pub(crate) mod kernel;

pub use builder::build_distance_matrix;
pub use config::{DEFAULT_THREADS, MatrixConfig};
pub use error::DistanceError;
pub use matrix::{DistanceMatrix, write_distance_table};
pub use metric::{Distance, Metric};
