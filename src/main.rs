mod cli;
mod config;
mod convert;
mod exponent_cmd;
mod input;
mod logging;
mod neighbors_cmd;
mod report;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Neighbors(args) => neighbors_cmd::run(args),
        Command::Exponent(args) => exponent_cmd::run(args),
    }
}
