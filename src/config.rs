use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level hubness configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HubnessConfig {
    /// Distance matrix settings.
    #[serde(default)]
    pub matrix: MatrixToml,

    /// Primary kNN settings.
    #[serde(default)]
    pub knn: KnnToml,

    /// Shared-neighbor pass settings.
    #[serde(default)]
    pub secondary: SecondaryToml,

    /// Exponent search settings.
    #[serde(default)]
    pub exponent: ExponentToml,
}

impl HubnessConfig {
    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixToml {
    #[serde(default = "default_threads")]
    pub threads: usize,
    #[serde(default = "default_metric")]
    pub metric: String,
    #[serde(default = "default_exponent")]
    pub exponent: f64,
}

impl Default for MatrixToml {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            metric: default_metric(),
            exponent: default_exponent(),
        }
    }
}

fn default_threads() -> usize {
    hubness_distance::DEFAULT_THREADS
}
fn default_metric() -> String {
    "minkowski".to_string()
}
fn default_exponent() -> f64 {
    2.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    #[serde(default = "default_k")]
    pub k: usize,
}

impl Default for KnnToml {
    fn default() -> Self {
        Self { k: default_k() }
    }
}

fn default_k() -> usize {
    5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecondaryToml {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_variant")]
    pub variant: String,
    #[serde(default = "default_weighting")]
    pub weighting: String,
    #[serde(default)]
    pub k: Option<usize>,
}

impl Default for SecondaryToml {
    fn default() -> Self {
        Self {
            enabled: false,
            variant: default_variant(),
            weighting: default_weighting(),
            k: None,
        }
    }
}

fn default_variant() -> String {
    "simhub".to_string()
}
fn default_weighting() -> String {
    "inverse".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExponentToml {
    #[serde(default = "default_min")]
    pub min: f64,
    #[serde(default = "default_max")]
    pub max: f64,
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default = "default_exponent_k")]
    pub k: usize,
    #[serde(default = "default_criterion")]
    pub criterion: String,
    #[serde(default)]
    pub patience: Option<usize>,
}

impl Default for ExponentToml {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            step: default_step(),
            k: default_exponent_k(),
            criterion: default_criterion(),
            patience: None,
        }
    }
}

fn default_min() -> f64 {
    0.5
}
fn default_max() -> f64 {
    4.0
}
fn default_step() -> f64 {
    0.5
}
fn default_exponent_k() -> usize {
    1
}
fn default_criterion() -> String {
    "antihub".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: HubnessConfig = toml::from_str("").unwrap();
        assert_eq!(config.matrix.threads, hubness_distance::DEFAULT_THREADS);
        assert_eq!(config.matrix.metric, "minkowski");
        assert_eq!(config.knn.k, 5);
        assert!(!config.secondary.enabled);
        assert_eq!(config.exponent.k, 1);
        assert_eq!(config.exponent.criterion, "antihub");
    }

    #[test]
    fn test_partial_sections() {
        let config: HubnessConfig = toml::from_str(
            r#"
            [matrix]
            exponent = 1.5

            [secondary]
            enabled = true
            k = 10

            [exponent]
            min = 1.0
            patience = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.matrix.exponent, 1.5);
        assert_eq!(config.matrix.threads, hubness_distance::DEFAULT_THREADS);
        assert!(config.secondary.enabled);
        assert_eq!(config.secondary.k, Some(10));
        assert_eq!(config.secondary.weighting, "inverse");
        assert_eq!(config.exponent.min, 1.0);
        assert_eq!(config.exponent.max, 4.0);
        assert_eq!(config.exponent.patience, Some(3));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<HubnessConfig, _> = toml::from_str("[knn]\nk = 3\nseed = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_without_path() {
        let config = HubnessConfig::load(None).unwrap();
        assert_eq!(config.knn.k, 5);
    }
}
