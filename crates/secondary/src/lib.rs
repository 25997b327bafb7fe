//! Shared-neighbor secondary distances.
//!
//! Two points are close in the secondary space when their primary kNN lists
//! overlap:
//!
//! | Variant | Distance |
//! |---------|----------|
//! | simcos | `1 − |N(x) ∩ N(y)| / k` |
//! | simhub | `1 − Σ_{z ∈ N(x) ∩ N(y)} w(z) / k` |
//!
//! simhub weighs each shared neighbor by a [`HubWeighting`] of its occurrence
//! count, so sharing a hub says less than sharing a rarely chosen point.
//!
//! # Quick start
//!
//! ```
//! use hubness_data::Dataset;
//! use hubness_distance::{MatrixConfig, Metric};
//! use hubness_knn::compute_neighbor_sets;
//! use hubness_secondary::{SecondaryVariant, compute_secondary_distances};
//!
//! let dataset = Dataset::from_rows(vec![
//!     vec![0.0],
//!     vec![1.0],
//!     vec![2.0],
//!     vec![10.0],
//!     vec![11.0],
//! ])
//! .unwrap();
//! let (sets, profile) =
//!     compute_neighbor_sets(&dataset, 2, &Metric::euclidean(), &MatrixConfig::new()).unwrap();
//!
//! let secondary =
//!     compute_secondary_distances(&sets, &profile, &SecondaryVariant::simhub()).unwrap();
//! assert_eq!(secondary.size(), 5);
//! assert!(secondary.iter_pairs().all(|(_, _, d)| (0.0..=1.0).contains(&d)));
//! ```
//!
//! # Architecture
//!
//! ```text
//! secondary_neighbors()
//!   ├─ SecondaryConfig::validate()       (config.rs)
//!   ├─ compute_secondary_distances()     (shared.rs, per-row membership flags)
//!   │    └─ HubWeighting::weight()       (config.rs)
//!   └─ NeighborSets::compute()           (hubness-knn)
//! ```

pub mod config;
pub mod error;
pub mod shared;

pub use config::{HubWeighting, SecondaryConfig, SecondaryVariant};
pub use error::SecondaryError;
pub use shared::{compute_secondary_distances, secondary_distance, secondary_neighbors};
