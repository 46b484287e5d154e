//! Collatz reduction reporter
//!
//! Computes classical Collatz step counts for every perfect square up to
//! a bound, applies the fixed golden-ratio reduction factor, aggregates
//! the percentage reductions, and emits a timestamped JSON report.
//! Independent of the α verification; the two utilities share only the
//! constant providers.

mod reduction;
mod report;
mod stats;
mod steps;

pub use reduction::{reduce, Reduction};
pub use report::{
    BaselineComparison, CollatzRecord, CollatzReport, ReductionSummary, DEFAULT_BOUND,
};
pub use steps::{collatz_steps, perfect_squares, DEFAULT_STEP_CAP};
