//! Neighbors command: kNN sets, occurrence statistics and an optional
//! shared-neighbor pass.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use hubness_distance::{Metric, build_distance_matrix, write_distance_table};
use hubness_knn::{HubnessSummary, NeighborSets, write_neighbor_table};
use hubness_secondary::{HubWeighting, SecondaryVariant, secondary_neighbors};

use crate::cli::NeighborsArgs;
use crate::config::HubnessConfig;
use crate::report::{NeighborsReport, SecondaryOutput, SummaryOutput, write_json};
use crate::{convert, input};

/// Run the neighbor-set analysis.
pub fn run(args: NeighborsArgs) -> Result<()> {
    let _cmd = info_span!("neighbors").entered();
    // 1. Load TOML and apply CLI overrides
    let mut config = HubnessConfig::load(args.config.as_deref())?;
    if let Some(k) = args.k {
        config.knn.k = k;
    }
    if let Some(metric) = args.metric {
        config.matrix.metric = metric;
    }
    if let Some(exponent) = args.exponent {
        config.matrix.exponent = exponent;
    }
    if let Some(threads) = args.threads {
        config.matrix.threads = threads;
    }
    if let Some(variant) = args.secondary {
        config.secondary.enabled = true;
        config.secondary.variant = variant;
    }

    // 2. Convert before touching data so bad settings fail fast
    let metric = convert::build_metric(&config.matrix)?;
    let matrix_cfg = convert::build_matrix_config(&config.matrix)?;
    let secondary_cfg = if config.secondary.enabled {
        Some(convert::build_secondary_config(&config.secondary)?)
    } else {
        None
    };

    // 3. Read dataset
    let dataset = input::read_dataset(&args.input)?;
    info!(
        n = dataset.size(),
        labeled = dataset.labels().is_some(),
        "dataset loaded"
    );

    // 4. Primary distances and neighbor sets
    let matrix = build_distance_matrix(&dataset, &metric, &matrix_cfg)
        .context("failed to build distance matrix")?;
    if let Some(path) = &args.distance_table {
        write_distance_table(&matrix, create(path)?)
            .with_context(|| format!("failed to write distance table: {}", path.display()))?;
    }
    let sets = NeighborSets::compute(&matrix, config.knn.k)
        .context("failed to compute neighbor sets")?;
    drop(matrix);
    if let Some(path) = &args.neighbors_table {
        write_neighbor_table(&sets, create(path)?)
            .with_context(|| format!("failed to write neighbor table: {}", path.display()))?;
    }
    let profile = sets.occurrences(dataset.labels())?;
    let primary = HubnessSummary::new(&sets, &profile, dataset.labels())?;
    info!(
        hub_rate = primary.hub_rate(),
        anti_hub_rate = primary.anti_hub_rate(),
        skewness = ?primary.skewness(),
        "primary neighbor sets"
    );

    // 5. Optional shared-neighbor pass
    let secondary = match secondary_cfg {
        Some(cfg) => {
            let (secondary_sets, secondary_profile) =
                secondary_neighbors(&sets, &profile, &cfg, dataset.labels())
                    .context("shared-neighbor pass failed")?;
            let summary =
                HubnessSummary::new(&secondary_sets, &secondary_profile, dataset.labels())?;
            info!(
                hub_rate = summary.hub_rate(),
                anti_hub_rate = summary.anti_hub_rate(),
                "secondary neighbor sets"
            );
            Some(SecondaryOutput {
                variant: variant_name(cfg.variant()),
                summary: SummaryOutput::from(&summary),
            })
        }
        None => None,
    };

    // 6. Report
    let report = NeighborsReport {
        metric: metric_name(&metric),
        primary: SummaryOutput::from(&primary),
        secondary,
    };
    write_json(&report, args.output.as_deref())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn metric_name(metric: &Metric) -> String {
    match metric {
        Metric::Minkowski { p } => format!("minkowski(p={p})"),
        Metric::Cosine => "cosine".to_string(),
    }
}

fn variant_name(variant: &SecondaryVariant) -> String {
    match variant {
        SecondaryVariant::SimCos => "simcos".to_string(),
        SecondaryVariant::SimHub(HubWeighting::Inverse) => "simhub(inverse)".to_string(),
        SecondaryVariant::SimHub(HubWeighting::Informativeness) => {
            "simhub(informativeness)".to_string()
        }
        SecondaryVariant::SimHub(HubWeighting::Uniform) => "simhub(uniform)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(metric_name(&Metric::euclidean()), "minkowski(p=2)");
        assert_eq!(metric_name(&Metric::Cosine), "cosine");
        assert_eq!(variant_name(&SecondaryVariant::simhub()), "simhub(inverse)");
        assert_eq!(variant_name(&SecondaryVariant::SimCos), "simcos");
    }
}
