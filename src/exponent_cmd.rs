//! Exponent command: sweep Minkowski exponents and report the search log.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use hubness_exponent::find_best_exponent;

use crate::cli::ExponentArgs;
use crate::config::HubnessConfig;
use crate::report::{ExponentReport, write_json};
use crate::{convert, input};

/// Run the exponent search.
pub fn run(args: ExponentArgs) -> Result<()> {
    let _cmd = info_span!("exponent").entered();
    // 1. Load TOML and apply CLI overrides
    let mut config = HubnessConfig::load(args.config.as_deref())?;
    let exp = &mut config.exponent;
    if let Some(min) = args.min {
        exp.min = min;
    }
    if let Some(max) = args.max {
        exp.max = max;
    }
    if let Some(step) = args.step {
        exp.step = step;
    }
    if let Some(k) = args.k {
        exp.k = k;
    }
    if let Some(criterion) = args.criterion {
        exp.criterion = criterion;
    }
    if let Some(threads) = args.threads {
        config.matrix.threads = threads;
    }
    let search_cfg = convert::build_exponent_config(&config.exponent, &config.matrix)?;

    // 2. Read dataset
    let dataset = input::read_dataset(&args.input)?;
    info!(
        n = dataset.size(),
        candidates = search_cfg.candidates().len(),
        "dataset loaded"
    );

    // 3. Sweep
    let search = find_best_exponent(&dataset, &search_cfg).context("exponent search failed")?;

    // 4. Report
    let criterion = format!("{:?}", search_cfg.criterion()).to_lowercase();
    let report = ExponentReport::new(criterion, search_cfg.k(), &search);
    write_json(&report, args.output.as_deref())
}
