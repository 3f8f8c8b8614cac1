//! # Validate Subcommand
//!
//! Loads a snapshot JSON file (plus an optional pre-transfer baseline),
//! runs the full validator set, and reports the verdict. Exits nonzero
//! when the snapshot is not submittable.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::info;

use mhr_core::{TenancyType, TransferType};
use mhr_registry::Snapshot;
use mhr_validate::{tenancy, validation, ValidationState};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the current snapshot JSON.
    pub snapshot: PathBuf,

    /// Pre-transfer baseline snapshot JSON; enables transfer rules.
    #[arg(long)]
    pub previous: Option<PathBuf>,

    /// Active transfer type, e.g. SALE_OR_GIFT or TO_EXECUTOR_PROBATE_WILL.
    #[arg(long)]
    pub transfer_type: Option<TransferType>,

    /// Emit the full validation state as JSON instead of a text report.
    #[arg(long)]
    pub json: bool,
}

/// The machine-readable report shape for `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    valid: bool,
    tenancy: TenancyType,
    #[serde(flatten)]
    state: ValidationState,
}

/// Run the validate subcommand.
pub fn run(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let current = load_snapshot(&args.snapshot)?;
    let previous = args.previous.as_deref().map(load_snapshot).transpose()?;

    if args.transfer_type.is_some() && previous.is_none() {
        anyhow::bail!("--transfer-type requires --previous: transfer rules diff against a baseline");
    }

    info!(
        owners = current.owners().len(),
        groups = current.groups().len(),
        transfer = ?args.transfer_type,
        "validating snapshot"
    );

    let state = validation::aggregate(&current, previous.as_ref(), args.transfer_type);
    let report = Report {
        valid: state.is_valid(),
        tenancy: tenancy::classify_snapshot(&current),
        state,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_text(&report);
    }

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing snapshot {}", path.display()))
}

fn render_text(report: &Report) {
    println!("tenancy:    {}", report.tenancy);
    match report.state.allocation.total {
        Some(total) => println!("allocation: {} ({total})", report.state.allocation.status),
        None => println!("allocation: {}", report.state.allocation.status),
    }

    if !report.state.at_least_one_owner {
        println!("finding: at least one owner is required");
    }
    for (group, finding) in &report.state.structural {
        println!("finding: {group}: {finding:?}");
    }
    for (group, finding) in &report.state.role_mixture {
        println!("finding: {group}: {finding:?}");
    }
    for finding in &report.state.transfer {
        println!("finding: {finding:?}");
    }

    if report.valid {
        println!("result:     VALID");
    } else {
        println!("result:     INVALID");
    }
}
