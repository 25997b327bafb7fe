//! Configuration for distance matrix construction.

use crate::error::DistanceError;

/// Default number of distance workers.
pub const DEFAULT_THREADS: usize = 8;

/// Configuration for [`build_distance_matrix`](crate::build_distance_matrix).
///
/// # Example
///
/// ```
/// use hubness_distance::MatrixConfig;
///
/// let config = MatrixConfig::new().with_threads(4);
/// assert_eq!(config.threads(), 4);
/// assert_eq!(config.effective_threads(3), 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Number of workers, each owning a contiguous block of rows.
    threads: usize,
}

impl MatrixConfig {
    /// Creates a configuration with [`DEFAULT_THREADS`] workers.
    pub fn new() -> Self {
        Self {
            threads: DEFAULT_THREADS,
        }
    }

    /// Sets the number of workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Returns the configured number of workers.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Returns the worker count for a dataset of `n` points: the configured
    /// count clamped to `[1, n]`.
    pub fn effective_threads(&self, n: usize) -> usize {
        self.threads.clamp(1, n.max(1))
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the worker count is zero.
    pub fn validate(&self) -> Result<(), DistanceError> {
        if self.threads == 0 {
            return Err(DistanceError::InvalidThreads {
                threads: self.threads,
            });
        }
        Ok(())
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = MatrixConfig::default();
        assert_eq!(cfg.threads(), DEFAULT_THREADS);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_effective_threads_clamped_to_n() {
        let cfg = MatrixConfig::new().with_threads(8);
        assert_eq!(cfg.effective_threads(100), 8);
        assert_eq!(cfg.effective_threads(3), 3);
        assert_eq!(cfg.effective_threads(1), 1);
        assert_eq!(cfg.effective_threads(0), 1);
    }

    #[test]
    fn test_validate_zero_threads() {
        let result = MatrixConfig::new().with_threads(0).validate();
        assert!(matches!(
            result,
            Err(DistanceError::InvalidThreads { threads: 0 })
        ));
    }
}
