//! JSON report structures.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use hubness_exponent::{ExponentSearch, ExponentTrial};
use hubness_knn::HubnessSummary;

/// Report of the `neighbors` subcommand.
#[derive(Debug, Serialize)]
pub struct NeighborsReport {
    pub metric: String,
    pub primary: SummaryOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<SecondaryOutput>,
}

/// Summary of the shared-neighbor pass.
#[derive(Debug, Serialize)]
pub struct SecondaryOutput {
    pub variant: String,
    pub summary: SummaryOutput,
}

/// Hubness statistics of one kNN pass.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryOutput {
    pub n: usize,
    pub k: usize,
    pub hub_count: usize,
    pub hub_rate: f64,
    pub anti_hub_count: usize,
    pub anti_hub_rate: f64,
    pub max_occurrence: usize,
    pub skewness: Option<f64>,
    pub bad_occurrence_rate: Option<f64>,
    pub knn_accuracy: Option<f64>,
}

impl From<&HubnessSummary> for SummaryOutput {
    fn from(s: &HubnessSummary) -> Self {
        Self {
            n: s.n(),
            k: s.k(),
            hub_count: s.hub_count(),
            hub_rate: s.hub_rate(),
            anti_hub_count: s.anti_hub_count(),
            anti_hub_rate: s.anti_hub_rate(),
            max_occurrence: s.max_occurrence(),
            skewness: s.skewness(),
            bad_occurrence_rate: s.bad_occurrence_rate(),
            knn_accuracy: s.knn_accuracy(),
        }
    }
}

/// Report of the `exponent` subcommand.
#[derive(Debug, Serialize)]
pub struct ExponentReport {
    pub criterion: String,
    pub k: usize,
    pub best_exponent: f64,
    pub trials: Vec<TrialOutput>,
}

/// One row of the exponent search log.
#[derive(Debug, Clone, Serialize)]
pub struct TrialOutput {
    pub exponent: f64,
    pub hub_rate: f64,
    pub anti_hub_rate: f64,
    pub is_best: bool,
}

impl From<&ExponentTrial> for TrialOutput {
    fn from(t: &ExponentTrial) -> Self {
        Self {
            exponent: t.exponent(),
            hub_rate: t.hub_rate(),
            anti_hub_rate: t.anti_hub_rate(),
            is_best: t.is_best(),
        }
    }
}

impl ExponentReport {
    pub fn new(criterion: String, k: usize, search: &ExponentSearch) -> Self {
        Self {
            criterion,
            k,
            best_exponent: search.best_exponent(),
            trials: search.trials().iter().map(TrialOutput::from).collect(),
        }
    }
}

/// Writes `report` as pretty JSON to `path`, or to stdout when `None`.
pub fn write_json<T: Serialize>(report: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    match path {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write report to stdout")?;
        }
    }
    Ok(())
}
