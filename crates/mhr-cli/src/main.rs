//! # mhr CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// MHR ownership engine CLI.
///
/// Validates ownership snapshots and transfer transactions against the
/// manufactured-home registry rules.
#[derive(Parser, Debug)]
#[command(name = "mhr", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a snapshot, optionally as a transfer against a baseline.
    Validate(mhr_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => mhr_cli::validate::run(args),
    }
}
