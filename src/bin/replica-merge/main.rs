mod args;
mod config;

use std::{fs, path::Path, process::ExitCode};

use anyhow::{Context as _, Result};
use args::{Args, OutputFormat};
use clap::Parser;
use log::{info, warn};
use replica_merge::{ConvergenceOutcome, Operation, Reconciler, Reconciliation, RgaText};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(&args)?;

    let reconciler = Reconciler::new(config::load(&args)?);

    let base = read(&args.base)?;
    let left = read(&args.left)?;
    let right = read(&args.right)?;

    let Reconciliation {
        left_operations,
        right_operations,
        outcome,
    } = reconciler
        .reconcile_with_operations::<RgaText>(&base, &left, &right)
        .context("Failed to reconcile the edits")?;

    let operations = args.ops.then_some(SideOperations {
        left: left_operations,
        right: right_operations,
    });

    if outcome.is_converged() {
        info!("Both merge orders produced the same text");
    } else {
        warn!("The merge orders diverged");
    }

    match args.format {
        OutputFormat::Text => print_text(operations.as_ref(), &outcome),
        OutputFormat::Json => {
            let report = Report {
                operations,
                outcome: &outcome,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize the result")?
            );
        }
    }

    Ok(if outcome.is_converged() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "{}={}",
            env!("CARGO_CRATE_NAME"),
            args.verbose.log_level_filter()
        )
        .to_lowercase()
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(args.use_colors()),
        )
        .try_init()
        .context("Failed to initialise tracing")
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Error reading {}", path.display()))
}

#[derive(Debug, Serialize)]
struct SideOperations {
    left: Vec<Operation>,
    right: Vec<Operation>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    operations: Option<SideOperations>,
    outcome: &'a ConvergenceOutcome,
}

fn print_text(operations: Option<&SideOperations>, outcome: &ConvergenceOutcome) {
    if let Some(operations) = operations {
        for (side, operations) in [("left", &operations.left), ("right", &operations.right)] {
            eprintln!("{side} operations:");
            for operation in operations {
                eprintln!("  {operation}");
            }
        }
    }

    if let Some(text) = outcome.unified_text() {
        print!("{text}");
    } else {
        println!("--- left merged with right");
        println!("{}", outcome.result_a_to_b());
        println!("--- right merged with left");
        println!("{}", outcome.result_b_to_a());
    }
}
