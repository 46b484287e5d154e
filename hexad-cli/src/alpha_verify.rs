//! alpha-verify - derive α from the six constants and check it
//!
//! Usage: alpha-verify [precision]
//!
//! Configuration:
//! - positional precision argument, or HEXAD_PRECISION (default 50)
//! - RUST_LOG controls diagnostics on stderr
//!
//! Exit codes: 0 on success, 1 if any constant fails to converge.

use hexad_constants::{standard_registry, ConstantSet, DEFAULT_PRECISION};
use hexad_core::HexadError;
use hexad_verify::{codata_alpha, render, verify};
use std::env;
use std::process::ExitCode;
use tracing::{debug, error, info};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Precision from the first positional argument, then HEXAD_PRECISION,
/// then the default. Out-of-range values are clamped downstream.
fn configured_precision() -> u32 {
    if let Some(arg) = env::args().nth(1) {
        if let Ok(p) = arg.parse() {
            return p;
        }
    }
    env::var("HEXAD_PRECISION")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PRECISION)
}

fn run() -> Result<(), HexadError> {
    let precision = configured_precision();
    info!(precision, "computing constant set");

    for provider in standard_registry().providers() {
        let meta = provider.meta();
        debug!(symbol = meta.symbol, formula = meta.formula, source = meta.source, "constant");
    }

    let set = ConstantSet::compute(precision)?;
    let result = verify(&set, &codata_alpha())?;

    info!(
        "derived α with relative error {}",
        result.relative_error.as_sigfigs(3)
    );
    print!("{}", render(&result, &set));
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
