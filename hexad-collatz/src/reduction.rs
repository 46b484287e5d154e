//! Golden-ratio step reduction
//!
//! The source material asserts a per-value reduction factor φ^(√n mod 5)
//! without derivation; it is reproduced here as a fixed literal formula.
//! The adjusted count divides by the factor, so adjusted ≤ classical on
//! the whole domain. √n ≡ 0 (mod 5) gives factor 1 and a 0% reduction -
//! a boundary case, still included in the aggregates.

use hexad_core::{HexadError, Number};

/// One value's reduction outcome
#[derive(Debug, Clone)]
pub struct Reduction {
    /// φ^(√n mod 5)
    pub factor: Number,
    /// classical / factor
    pub adjusted: Number,
    /// (1 - 1/factor) · 100
    pub percent: Number,
}

/// Apply the reduction factor to a classical step count.
/// `root` is the integer square root of the input (inputs are perfect
/// squares, so it is exact).
pub fn reduce(classical: u64, root: u64, phi: &Number) -> Result<Reduction, HexadError> {
    let exponent = (root % 5) as i32;
    let factor = phi.pow(exponent);

    let classical_n = Number::from_i64(classical as i64);
    let adjusted = classical_n.checked_div(&factor)?;

    let one = Number::from_i64(1);
    let inverse = one.checked_div(&factor)?;
    let percent = one.sub(&inverse).mul(&Number::from_i64(100));

    Ok(Reduction {
        factor,
        adjusted,
        percent,
    })
}
