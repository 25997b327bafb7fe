//! Minkowski exponent search minimizing hub or anti-hub rate.
//!
//! For each candidate `p` in `[min, max]` stepping by `step`, the search
//! builds the `L_p` distance matrix, computes kNN sets and scores them:
//!
//! | Criterion | Score (lower is better) |
//! |-----------|-------------------------|
//! | `Hub` | fraction of points with `total >= 2k` |
//! | `AntiHub` | fraction of points with `total == 0` |
//!
//! Only the best matrix is kept; the earliest candidate wins ties.
//!
//! # Quick start
//!
//! ```
//! use hubness_data::Dataset;
//! use hubness_exponent::{Criterion, ExponentConfig, find_best_exponent};
//!
//! let dataset = Dataset::from_rows(vec![
//!     vec![7.5, 7.0],
//!     vec![7.0, 2.5],
//!     vec![7.5, 0.0],
//!     vec![1.5, 2.5],
//!     vec![5.5, 7.5],
//!     vec![4.0, 6.0],
//! ])
//! .unwrap();
//! let config = ExponentConfig::new(1.0, 4.0, 1.0).with_criterion(Criterion::AntiHub);
//!
//! let search = find_best_exponent(&dataset, &config).unwrap();
//! assert_eq!(search.best_exponent(), 2.0);
//! assert_eq!(search.trials().len(), 4);
//! ```
//!
//! # Architecture
//!
//! ```text
//! find_best_exponent()
//!   └─ ExponentFinder                    (search.rs)
//!        ├─ ExponentConfig::candidates() (config.rs)
//!        └─ step() per candidate
//!             ├─ build_distance_matrix() (hubness-distance)
//!             ├─ NeighborSets::compute() (hubness-knn)
//!             ├─ Criterion::score()      (config.rs)
//!             └─ ExponentTrial           (trial.rs)
//! ```

pub mod config;
pub mod error;
pub mod search;
pub mod trial;

pub use config::{Criterion, ExponentConfig, MAX_CANDIDATES};
pub use error::ExponentError;
pub use search::{ExponentFinder, find_best_exponent};
pub use trial::{ExponentSearch, ExponentTrial};
