//! collatz-report - run the Collatz reduction batch and write the report
//!
//! Usage: collatz-report [bound]
//!
//! Configuration:
//! - positional bound argument, or HEXAD_BOUND (default 1000)
//! - HEXAD_PRECISION for the golden-ratio factor (default 50)
//! - HEXAD_REPORT_DIR for the output directory (default ".")
//! - RUST_LOG controls diagnostics on stderr
//!
//! Exit codes: 0 on success, 1 if any input hits the safety step cap or
//! the report cannot be written.

use hexad_collatz::{CollatzReport, DEFAULT_BOUND, DEFAULT_STEP_CAP};
use hexad_constants::DEFAULT_PRECISION;
use hexad_core::HexadError;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Bound from the first positional argument, then HEXAD_BOUND, then the
/// default
fn configured_bound() -> u64 {
    if let Some(arg) = env::args().nth(1) {
        if let Ok(b) = arg.parse() {
            return b;
        }
    }
    env::var("HEXAD_BOUND")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_BOUND)
}

fn configured_precision() -> u32 {
    env::var("HEXAD_PRECISION")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PRECISION)
}

fn report_dir() -> PathBuf {
    env::var("HEXAD_REPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

fn run() -> Result<(), HexadError> {
    let bound = configured_bound();
    let precision = configured_precision();
    info!(bound, precision, "running Collatz reduction batch");

    let report = CollatzReport::generate(bound, precision, DEFAULT_STEP_CAP)?;
    let path = report.write_to_dir(&report_dir())?;
    info!("report written to {}", path.display());

    println!("Collatz reduction report");
    println!("  tested inputs    {}", report.records.len());
    println!(
        "  avg reduction    {}%",
        report.summary.average_percent.as_decimal(4)
    );
    println!(
        "  reduction range  {}% - {}%",
        report.summary.min_percent.as_decimal(4),
        report.summary.max_percent.as_decimal(4)
    );
    println!(
        "  baselines        {} (2^60) vs {}",
        report.baselines.traditional.as_decimal(0),
        report.baselines.derived.as_decimal(4)
    );
    println!("  report           {}", path.display());
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
