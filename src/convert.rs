//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use hubness_distance::{MatrixConfig, Metric};
use hubness_exponent::{Criterion, ExponentConfig};
use hubness_secondary::{HubWeighting, SecondaryConfig, SecondaryVariant};

/// Lowercases `name` and drops `-` and `_`, so `Anti-Hub` matches `antihub`.
fn normalize(name: &str) -> String {
    name.to_lowercase().replace(['-', '_'], "")
}

/// Parses a metric name, using `exponent` for the Minkowski family.
pub fn parse_metric(name: &str, exponent: f64) -> Result<Metric> {
    match normalize(name).as_str() {
        "minkowski" => Ok(Metric::minkowski(exponent)?),
        "manhattan" => Ok(Metric::manhattan()),
        "euclidean" => Ok(Metric::euclidean()),
        "cosine" => Ok(Metric::Cosine),
        other => bail!("unknown metric: {other:?}"),
    }
}

/// Parses a simhub weighting name into the corresponding enum variant.
pub fn parse_weighting(s: &str) -> Result<HubWeighting> {
    match normalize(s).as_str() {
        "inverse" => Ok(HubWeighting::Inverse),
        "informativeness" => Ok(HubWeighting::Informativeness),
        "uniform" => Ok(HubWeighting::Uniform),
        other => bail!("unknown hub weighting: {other:?}"),
    }
}

/// Parses a secondary variant name; simhub takes `weighting`.
pub fn parse_variant(s: &str, weighting: &str) -> Result<SecondaryVariant> {
    match normalize(s).as_str() {
        "simcos" => Ok(SecondaryVariant::SimCos),
        "simhub" => Ok(SecondaryVariant::SimHub(parse_weighting(weighting)?)),
        other => bail!("unknown secondary variant: {other:?}"),
    }
}

/// Parses an exponent search criterion name.
pub fn parse_criterion(s: &str) -> Result<Criterion> {
    match normalize(s).as_str() {
        "hub" => Ok(Criterion::Hub),
        "antihub" => Ok(Criterion::AntiHub),
        other => bail!("unknown criterion: {other:?}"),
    }
}

/// Builds a [`MatrixConfig`] from the TOML matrix configuration.
pub fn build_matrix_config(matrix: &MatrixToml) -> Result<MatrixConfig> {
    let cfg = MatrixConfig::new().with_threads(matrix.threads);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds the metric from the TOML matrix configuration.
pub fn build_metric(matrix: &MatrixToml) -> Result<Metric> {
    parse_metric(&matrix.metric, matrix.exponent)
}

/// Builds a [`SecondaryConfig`] from the TOML secondary configuration.
pub fn build_secondary_config(secondary: &SecondaryToml) -> Result<SecondaryConfig> {
    let variant = parse_variant(&secondary.variant, &secondary.weighting)?;
    let mut cfg = SecondaryConfig::new().with_variant(variant);
    if let Some(k) = secondary.k {
        cfg = cfg.with_k(k);
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Builds an [`ExponentConfig`] from the TOML exponent configuration.
///
/// The distance worker count comes from the matrix section.
pub fn build_exponent_config(
    exponent: &ExponentToml,
    matrix: &MatrixToml,
) -> Result<ExponentConfig> {
    let criterion = parse_criterion(&exponent.criterion)?;
    let mut cfg = ExponentConfig::new(exponent.min, exponent.max, exponent.step)
        .with_k(exponent.k)
        .with_criterion(criterion)
        .with_matrix(build_matrix_config(matrix)?);
    if let Some(patience) = exponent.patience {
        cfg = cfg.with_patience(patience);
    }
    cfg.validate()?;
    Ok(cfg)
}
