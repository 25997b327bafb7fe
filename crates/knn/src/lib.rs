//! Exact k-nearest-neighbor sets and neighbor-occurrence (hubness) statistics.
//!
//! | Quantity | Definition |
//! |----------|------------|
//! | `total[j]` | number of kNN lists containing `j` |
//! | good / bad | occurrences whose querying point shares / differs in label |
//! | hub | `total[j] >= 2k` |
//! | anti-hub | `total[j] == 0` |
//!
//! Lists are ordered by ascending `(distance, index)`, so ties always go to
//! the lower index and results are reproducible.
//!
//! # Quick start
//!
//! ```
//! use hubness_data::Dataset;
//! use hubness_distance::{MatrixConfig, Metric};
//! use hubness_knn::compute_neighbor_sets;
//!
//! let dataset = Dataset::from_rows(vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 10.0],
//!     vec![10.0, 11.0],
//! ])
//! .unwrap();
//!
//! let (sets, profile) =
//!     compute_neighbor_sets(&dataset, 1, &Metric::euclidean(), &MatrixConfig::new()).unwrap();
//! assert_eq!(sets.neighbors(0), &[1]);
//! assert_eq!(sets.neighbors(2), &[3]);
//! assert_eq!(profile.total(), &[1, 1, 1, 1]);
//! assert_eq!(profile.hub_rate(), 0.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! compute_neighbor_sets()
//!   ├─ validate dataset and k
//!   ├─ build_distance_matrix()          (hubness-distance)
//!   ├─ NeighborSets::compute()          (neighbors.rs)
//!   │    └─ insert_bounded()            (select.rs)
//!   └─ OccurrenceProfile                (occurrence.rs)
//!
//! HubnessSummary::new()                 (summary.rs)
//! NeighborSets::extend_to()             reuse lists at a larger k
//! ```

pub mod error;
pub mod knn;
pub mod neighbors;
pub mod occurrence;
pub mod summary;

pub(crate) mod select;

pub use error::KnnError;
pub use knn::compute_neighbor_sets;
pub use neighbors::{NeighborSets, write_neighbor_table};
pub use occurrence::{HUB_FACTOR, OccurrenceProfile};
pub use summary::HubnessSummary;
