use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hubness analysis of k-nearest-neighbor graphs.
#[derive(Parser)]
#[command(
    name = "hubness",
    version,
    about = "Neighbor-occurrence statistics and Minkowski exponent search"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute kNN sets and hubness statistics for a dataset.
    Neighbors(NeighborsArgs),
    /// Search the Minkowski exponent minimizing hub or anti-hub rate.
    Exponent(ExponentArgs),
}

/// Arguments for the `neighbors` subcommand.
#[derive(clap::Args)]
pub struct NeighborsArgs {
    /// Path to the dataset JSON file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override neighborhood size from config.
    #[arg(short)]
    pub k: Option<usize>,

    /// Override metric from config (minkowski, manhattan, euclidean, cosine).
    #[arg(short, long)]
    pub metric: Option<String>,

    /// Override Minkowski exponent from config.
    #[arg(short, long)]
    pub exponent: Option<f64>,

    /// Override distance worker count from config.
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Run a shared-neighbor pass with this variant (simcos, simhub).
    #[arg(long)]
    pub secondary: Option<String>,

    /// Write `i<TAB>neighbors` lines of the primary kNN sets to this path.
    #[arg(long = "neighbors-table")]
    pub neighbors_table: Option<PathBuf>,

    /// Write `i<TAB>j<TAB>d` lines of the primary distance matrix to this path.
    #[arg(long = "distance-table")]
    pub distance_table: Option<PathBuf>,
}

/// Arguments for the `exponent` subcommand.
#[derive(clap::Args)]
pub struct ExponentArgs {
    /// Path to the dataset JSON file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override smallest exponent from config.
    #[arg(long)]
    pub min: Option<f64>,

    /// Override largest exponent from config.
    #[arg(long)]
    pub max: Option<f64>,

    /// Override exponent step from config.
    #[arg(long)]
    pub step: Option<f64>,

    /// Override neighborhood size from config.
    #[arg(short)]
    pub k: Option<usize>,

    /// Override criterion from config (hub, antihub).
    #[arg(long)]
    pub criterion: Option<String>,

    /// Override distance worker count from config.
    #[arg(short, long)]
    pub threads: Option<usize>,
}
