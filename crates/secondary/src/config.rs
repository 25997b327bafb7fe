//! Secondary distance variants and configuration.

use crate::error::SecondaryError;

/// Weight given to a shared neighbor `z` by simhub, from its occurrence
/// count `total[z]` in a dataset of `n` points.
///
/// Every strategy is non-increasing in `total[z]` and maps into `[0, 1]`.
///
/// | Strategy | `w(z)` |
/// |----------|--------|
/// | `Inverse` | `1 / total[z]` |
/// | `Informativeness` | `ln(n / total[z]) / ln(n)` |
/// | `Uniform` | `1` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HubWeighting {
    /// Reciprocal occurrence count (default).
    #[default]
    Inverse,
    /// Normalized self-information of occurring; zero for `n <= 1`.
    Informativeness,
    /// Constant weight; simhub then equals simcos.
    Uniform,
}

impl HubWeighting {
    /// Weight of a neighbor occurring `total` times among `n` points.
    ///
    /// Points that never occur cannot be shared and get weight zero.
    pub fn weight(&self, total: usize, n: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        match self {
            Self::Inverse => 1.0 / total as f64,
            Self::Informativeness => {
                if n <= 1 {
                    0.0
                } else {
                    ((n as f64 / total as f64).ln() / (n as f64).ln()).clamp(0.0, 1.0)
                }
            }
            Self::Uniform => 1.0,
        }
    }
}

/// Shared-neighbor distance variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecondaryVariant {
    /// `1 − |N(x) ∩ N(y)| / k`.
    #[default]
    SimCos,
    /// `1 − Σ_{z ∈ N(x) ∩ N(y)} w(z) / k`, discounting shared hubs.
    SimHub(HubWeighting),
}

impl SecondaryVariant {
    /// simhub with the default [`HubWeighting::Inverse`] weighting.
    pub fn simhub() -> Self {
        Self::SimHub(HubWeighting::default())
    }

    /// Returns `true` if the variant reads occurrence counts.
    pub fn uses_occurrences(&self) -> bool {
        matches!(self, Self::SimHub(_))
    }
}

/// Configuration for [`secondary_neighbors`](crate::secondary_neighbors).
///
/// # Example
///
/// ```
/// use hubness_secondary::{HubWeighting, SecondaryConfig, SecondaryVariant};
///
/// let config = SecondaryConfig::new()
///     .with_variant(SecondaryVariant::SimHub(HubWeighting::Informativeness))
///     .with_k(5);
/// assert_eq!(config.k(), Some(5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecondaryConfig {
    /// Distance variant.
    variant: SecondaryVariant,
    /// Neighborhood size of the secondary kNN pass; `None` reuses the
    /// primary k.
    k: Option<usize>,
}

impl SecondaryConfig {
    /// Creates a simcos configuration reusing the primary k.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distance variant.
    pub fn with_variant(mut self, variant: SecondaryVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the neighborhood size of the secondary pass.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    /// Returns the distance variant.
    pub fn variant(&self) -> &SecondaryVariant {
        &self.variant
    }

    /// Returns the secondary neighborhood size, if set.
    pub fn k(&self) -> Option<usize> {
        self.k
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the secondary k is set to zero. The upper bound
    /// depends on the dataset and is checked by the kNN pass.
    pub fn validate(&self) -> Result<(), SecondaryError> {
        if self.k == Some(0) {
            return Err(SecondaryError::InvalidInput("secondary k must be >= 1"));
        }
        Ok(())
    }
}
