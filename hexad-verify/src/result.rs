//! Verification result

use crate::CLAIMED_TOLERANCE;
use hexad_core::Number;
use serde::Serialize;

/// Outcome of one verification run. Created once per invocation and
/// discarded after being reported.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    /// φ⁴ · Ω³ · ξ³ · λ · ζ³
    pub field_density: Number,
    /// 1 / field density
    pub derived: Number,
    /// Caller-supplied reference value
    pub reference: Number,
    /// |derived/reference - 1|
    pub relative_error: Number,
    /// Precision the constants were computed at
    pub precision: u32,
}

impl VerificationResult {
    /// Whether the relative error stays under the tolerance the source
    /// material claims. Informational only - does not affect exit codes.
    pub fn claim_holds(&self) -> bool {
        let tol = Number::from_str(CLAIMED_TOLERANCE).unwrap_or(Number::from_i64(0));
        self.relative_error < tol
    }
}
