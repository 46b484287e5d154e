//! Shared numeric helpers for the constant providers

use hexad_core::Number;

/// Extra digits carried through iterative computations so rounding noise
/// stays below the requested tolerance
pub(crate) const GUARD_DIGITS: u32 = 10;

/// Convergence tolerance 10^-precision
pub(crate) fn tolerance(precision: u32) -> Number {
    Number::from_str(&format!("1e-{}", precision)).unwrap_or(Number::from_i64(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_magnitude() {
        let tol = tolerance(15);
        assert!(tol < Number::from_str("1e-14").unwrap());
        assert!(tol > Number::from_str("1e-16").unwrap());
    }
}
