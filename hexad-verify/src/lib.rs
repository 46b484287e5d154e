//! Fine-structure constant verification
//!
//! Evaluates the fixed closed form
//!
//!   α = 1 / (φ⁴ · Ω³ · ξ³ · λ · ζ³)
//!
//! over a computed `ConstantSet` and reports the relative error against a
//! caller-supplied reference value. The exponents are fixed literals from
//! the source material, reproduced exactly rather than derived. Pure
//! function evaluation: no iteration, no state.

mod render;
mod result;

pub use render::render;
pub use result::VerificationResult;

use hexad_constants::ConstantSet;
use hexad_core::{HexadError, Number};

/// CODATA 2018 fine-structure constant, used as the comparison literal
pub const CODATA_ALPHA_2018: &str = "0.0072973525693";

/// Relative error bound the source material claims for the derivation
pub const CLAIMED_TOLERANCE: &str = "1e-5";

/// The CODATA 2018 reference value as a Number
pub fn codata_alpha() -> Number {
    Number::from_str(CODATA_ALPHA_2018)
        .unwrap_or(Number::from_ratio(72973525693, 10_000_000_000_000))
}

/// Evaluate the derivation against a reference value
pub fn verify(set: &ConstantSet, reference: &Number) -> Result<VerificationResult, HexadError> {
    if reference.is_zero() {
        return Err(HexadError::div_zero().with_note("reference value is zero"));
    }

    let one = Number::from_i64(1);

    // field density = φ⁴ · Ω³ · ξ³ · λ · ζ³
    let field_density = set
        .phi
        .pow(4)
        .mul(&set.omega.pow(3))
        .mul(&set.xi.pow(3))
        .mul(&set.lambda)
        .mul(&set.zeta3.pow(3));

    let derived = one.checked_div(&field_density)?;

    // relative error = |derived/reference - 1|
    let ratio = derived.checked_div(reference)?;
    let relative_error = ratio.sub(&one).abs();

    Ok(VerificationResult {
        field_density,
        derived,
        reference: reference.clone(),
        relative_error,
        precision: set.precision,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexad_constants::DEFAULT_PRECISION;

    fn canonical_result() -> VerificationResult {
        let set = ConstantSet::compute(DEFAULT_PRECISION).unwrap();
        verify(&set, &codata_alpha()).unwrap()
    }

    #[test]
    fn test_field_density_near_137() {
        let result = canonical_result();
        let decimal = result.field_density.as_decimal(4);
        assert!(
            decimal.starts_with("137.03"),
            "field density should be ~137.03, got: {}",
            decimal
        );
    }

    #[test]
    fn test_derived_alpha_digits() {
        let result = canonical_result();
        let decimal = result.derived.as_decimal(9);
        assert!(
            decimal.starts_with("0.0072973"),
            "derived α should be ~0.0072973, got: {}",
            decimal
        );
    }

    #[test]
    fn test_relative_error_matches_known_value() {
        // The canonical constants give a relative error of ~6.18e-6
        let result = canonical_result();
        let err = result.relative_error.to_f64().unwrap();
        assert!(
            (err - 6.18e-6).abs() < 5e-8,
            "relative error should be ~6.18e-6, got: {:e}",
            err
        );
    }

    #[test]
    fn test_claim_holds_at_default_precision() {
        let result = canonical_result();
        assert!(result.claim_holds());
    }

    #[test]
    fn test_determinism() {
        let set = ConstantSet::compute(DEFAULT_PRECISION).unwrap();
        let reference = codata_alpha();
        let a = verify(&set, &reference).unwrap();
        let b = verify(&set, &reference).unwrap();
        assert_eq!(a.derived, b.derived);
        assert_eq!(a.derived.to_string(), b.derived.to_string());
        assert_eq!(a.relative_error, b.relative_error);
    }

    #[test]
    fn test_zero_reference_rejected() {
        let set = ConstantSet::compute(DEFAULT_PRECISION).unwrap();
        assert!(verify(&set, &Number::from_i64(0)).is_err());
    }

    #[test]
    fn test_result_serializes() {
        let result = canonical_result();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("field_density"));
        assert!(json.contains("relative_error"));
    }
}
