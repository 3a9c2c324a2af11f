//! ocplint CLI

use clap::Parser;
use miette::IntoDiagnostic;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ocplint::cli::Cli;

fn main() -> miette::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli.run().into_diagnostic()
}
