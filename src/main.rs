//! Console entry point for the library catalog.

mod cli;
mod logging;

use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use library_catalog::{Console, LibraryConfig, TransitionLogger};
use tracing::info;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Build the catalog from config and CLI overrides, then hand it to the console
fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => LibraryConfig::load(path)?,
        None => LibraryConfig::default(),
    };
    config.apply_overrides(cli.no_samples, cli.loan_days, cli.day_field_dates);

    let mut catalog = config.build_catalog().context("failed to build catalog")?;
    catalog.register_observer(Box::new(TransitionLogger));
    info!(books = catalog.len(), policy = ?catalog.policy(), "catalog ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(catalog, stdin.lock(), stdout.lock());
    console.run().context("console session failed")
}
