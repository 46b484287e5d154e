//! Structured Collatz reduction report
//!
//! One report per run: the tested perfect squares, per-value classical
//! and adjusted step counts, aggregate reduction statistics, the two
//! baseline comparison numbers, and the generation timestamp. Serialized
//! as JSON to a path that encodes the timestamp.

use crate::reduction::reduce;
use crate::stats;
use crate::steps::{collatz_steps, perfect_squares};
use hexad_constants::{clamp_precision, ConstantProvider, Phi, Psi};
use hexad_core::{HexadError, Number, Timestamp};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default upper bound for perfect-square enumeration
pub const DEFAULT_BOUND: u64 = 1000;

/// One tested integer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollatzRecord {
    /// The tested perfect square
    pub input: u64,
    /// Integer square root of the input
    pub root: u64,
    /// Classical Collatz step count
    pub classical_steps: u64,
    /// φ^(root mod 5)
    pub reduction_factor: Number,
    /// classical / reduction factor
    pub adjusted_steps: Number,
    /// (1 - 1/factor) · 100
    pub reduction_percent: Number,
}

/// Aggregate reduction statistics across all records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReductionSummary {
    pub average_percent: Number,
    pub min_percent: Number,
    pub max_percent: Number,
}

/// The two baseline comparison numbers the source material asserts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineComparison {
    /// 2⁶⁰, exact
    pub traditional: Number,
    /// (count · φ)^ψ where count is the number of tested squares
    pub derived: Number,
}

/// Complete report for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollatzReport {
    pub generated_at: Timestamp,
    pub bound: u64,
    pub precision: u32,
    pub step_cap: u64,
    pub inputs: Vec<u64>,
    pub records: Vec<CollatzRecord>,
    pub summary: ReductionSummary,
    pub baselines: BaselineComparison,
}

impl CollatzReport {
    /// Run the full batch: enumerate squares, count steps, reduce,
    /// aggregate. A step-cap hit on any input aborts the whole batch -
    /// skipping a value would corrupt the aggregates.
    pub fn generate(bound: u64, precision: u32, step_cap: u64) -> Result<Self, HexadError> {
        let precision = clamp_precision(precision);
        let phi = Phi.compute(precision)?;
        let psi = Psi.compute(precision)?;

        let inputs = perfect_squares(bound);
        if inputs.is_empty() {
            return Err(HexadError::domain_error(format!(
                "no perfect squares at or below {}",
                bound
            )));
        }

        let mut records = Vec::with_capacity(inputs.len());
        for (i, &input) in inputs.iter().enumerate() {
            let root = (i + 1) as u64;
            let classical_steps = collatz_steps(input, step_cap)?;
            let reduction = reduce(classical_steps, root, &phi)?;
            records.push(CollatzRecord {
                input,
                root,
                classical_steps,
                reduction_factor: reduction.factor,
                adjusted_steps: reduction.adjusted,
                reduction_percent: reduction.percent,
            });
        }

        let percents: Vec<Number> = records.iter().map(|r| r.reduction_percent.clone()).collect();
        let summary = ReductionSummary {
            average_percent: stats::mean(&percents)?,
            min_percent: stats::min(&percents)?,
            max_percent: stats::max(&percents)?,
        };

        let count = Number::from_i64(records.len() as i64);
        let baselines = BaselineComparison {
            traditional: Number::from_i64(2).pow(60),
            derived: count.mul(&phi).pow_real(&psi, precision),
        };

        Ok(Self {
            generated_at: Timestamp::now(),
            bound,
            precision,
            step_cap,
            inputs,
            records,
            summary,
            baselines,
        })
    }

    /// Filename encoding the generation timestamp
    pub fn filename(&self) -> String {
        format!("collatz_reduction_{}.json", self.generated_at.compact())
    }

    /// Write the report as pretty JSON into `dir`, returning the path
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, HexadError> {
        let path = dir.join(self.filename());
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| HexadError::internal(format!("report serialization failed: {}", e)))?;
        fs::write(&path, json)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::DEFAULT_STEP_CAP;

    fn default_report() -> CollatzReport {
        CollatzReport::generate(DEFAULT_BOUND, 50, DEFAULT_STEP_CAP).unwrap()
    }

    #[test]
    fn test_default_bound_yields_31_records() {
        let report = default_report();
        assert_eq!(report.inputs.len(), 31);
        assert_eq!(report.records.len(), 31);
        assert_eq!(report.records.first().unwrap().input, 1);
        assert_eq!(report.records.last().unwrap().input, 961);
    }

    #[test]
    fn test_roots_match_inputs() {
        let report = default_report();
        for record in &report.records {
            assert_eq!(record.root * record.root, record.input);
        }
    }

    #[test]
    fn test_classical_spot_checks() {
        let report = default_report();
        let by_input = |n: u64| {
            report
                .records
                .iter()
                .find(|r| r.input == n)
                .unwrap()
                .classical_steps
        };
        assert_eq!(by_input(1), 0);
        assert_eq!(by_input(4), 2);
        assert_eq!(by_input(16), 4);
        assert_eq!(by_input(9), 19);
        assert_eq!(by_input(25), 23);
    }

    #[test]
    fn test_adjusted_bounded_by_classical() {
        let report = default_report();
        for record in &report.records {
            let classical = Number::from_i64(record.classical_steps as i64);
            assert!(
                record.adjusted_steps <= classical,
                "adjusted > classical for input {}",
                record.input
            );
        }
    }

    #[test]
    fn test_identity_exactly_for_roots_divisible_by_five() {
        let report = default_report();
        for record in &report.records {
            let classical = Number::from_i64(record.classical_steps as i64);
            if record.root % 5 == 0 {
                assert_eq!(record.adjusted_steps, classical);
                assert!(record.reduction_percent.is_zero());
            } else {
                assert!(record.adjusted_steps < classical || record.classical_steps == 0);
            }
        }
    }

    #[test]
    fn test_summary_bounds() {
        let report = default_report();
        let zero = Number::from_i64(0);
        let hundred = Number::from_i64(100);
        assert!(report.summary.average_percent > zero);
        assert!(report.summary.average_percent < hundred);
        assert!(report.summary.min_percent.is_zero());
        assert!(report.summary.max_percent < Number::from_i64(86));
    }

    #[test]
    fn test_traditional_baseline_exact() {
        let report = default_report();
        assert_eq!(report.baselines.traditional.as_decimal(0), "1152921504606846976");
    }

    #[test]
    fn test_derived_baseline_digits() {
        // (31·φ)^ψ ≈ 178.8
        let report = default_report();
        let decimal = report.baselines.derived.as_decimal(1);
        assert!(decimal.starts_with("178."), "got: {}", decimal);
    }

    #[test]
    fn test_step_cap_aborts_batch() {
        let err = CollatzReport::generate(DEFAULT_BOUND, 50, 3).unwrap_err();
        assert_eq!(err.code, hexad_core::codes::STEP_CAP);
    }

    #[test]
    fn test_empty_bound_rejected() {
        assert!(CollatzReport::generate(0, 50, DEFAULT_STEP_CAP).is_err());
    }

    #[test]
    fn test_filename_encodes_timestamp() {
        let report = default_report();
        let name = report.filename();
        assert!(name.starts_with("collatz_reduction_"));
        assert!(name.ends_with(".json"));
        assert!(name.contains(&report.generated_at.compact()));
    }

    #[test]
    fn test_json_roundtrip() {
        let report = default_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: CollatzReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.records.len(), report.records.len());
        assert_eq!(back.generated_at, report.generated_at);
        assert_eq!(back.bound, report.bound);
    }

    #[test]
    fn test_write_to_dir() {
        let report = default_report();
        let dir = tempfile::tempdir().unwrap();
        let path = report.write_to_dir(dir.path()).unwrap();
        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"records\""));
        assert!(contents.contains("\"generated_at\""));
    }
}
