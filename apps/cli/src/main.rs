//! # Tally CLI
//!
//! Cross-references a product price catalogue against recorded sales and
//! reports the validated total cost.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          tally <catalogue> <sales>                      │
//! │                                                                         │
//! │  load catalogue JSON ──► load sales JSON ──► Catalogue::build           │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                                            compute_report               │
//! │                                                   │                     │
//! │                      ┌────────────────────────────┴──────────┐          │
//! │                      ▼                                       ▼          │
//! │              console summary                     results file (+ one    │
//! │              + one warn! per error               line per error)        │
//! │                                                                         │
//! │  Fatal paths (exit 1): unreadable file, invalid JSON, catalogue error,  │
//! │  unwritable results file. Bad sale records are never fatal.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod error;
mod loader;
mod output;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tally_core::{compute_report, Catalogue};

/// Compute the validated total cost of recorded sales against a price
/// catalogue.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
struct Args {
    /// Path to the price catalogue JSON file
    catalogue: PathBuf,

    /// Path to the sales record JSON file
    sales: PathBuf,

    /// Where to write the results report
    #[arg(short, long, default_value = "SalesResults.txt")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(Args::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    info!(
        catalogue = %args.catalogue.display(),
        sales = %args.sales.display(),
        "loading input files"
    );

    let started = Instant::now();

    let entries = loader::load_catalogue(&args.catalogue)?;
    let records = loader::load_sales(&args.sales)?;

    let catalogue = Catalogue::build(&entries)?;
    info!(
        products = catalogue.len(),
        records = records.len(),
        "computing sales totals"
    );

    let report = compute_report(&catalogue, &records);
    let elapsed_secs = started.elapsed().as_secs_f64();

    for rejected in &report.errors {
        warn!("{rejected}");
    }

    print!("{}", output::render_console(&report, elapsed_secs));

    let rendered = output::render_file(&report, elapsed_secs, chrono::Utc::now());
    std::fs::write(&args.output, rendered)
        .with_context(|| format!("could not write results to '{}'", args.output.display()))?;
    info!(path = %args.output.display(), "results saved");

    Ok(())
}
