//! Newton-Raphson root finding for ψ and Ω
//!
//! Two of the six constants have no closed form over the operations the
//! core exposes and are pinned down as roots of simple real functions:
//! ψ is the unique real root of x³ - x - 1 and Ω the unique real root of
//! x·eˣ - 1. Both functions are smooth and monotone near the root, so
//! Newton iteration from a literature seed converges quadratically.
//! Non-convergence is fatal: every downstream result is meaningless
//! without exact constants.

use crate::helpers::{tolerance, GUARD_DIGITS};
use hexad_core::{HexadError, Number};

/// Iteration cap for the Newton solvers. Quadratic convergence reaches
/// 50 digits in under ten steps; hitting this cap means the iteration is
/// cycling or diverging.
pub const MAX_ITERATIONS: u32 = 200;

/// Generic Newton-Raphson iteration.
///
/// `f` and `df` evaluate the function and its derivative at the given
/// working precision. Stops when successive iterates differ by less than
/// 10^-precision; fails with `NO_CONVERGE` naming `symbol` if the cap is
/// reached first.
pub(crate) fn newton<F, D>(
    f: F,
    df: D,
    seed: Number,
    precision: u32,
    max_iter: u32,
    symbol: &str,
) -> Result<Number, HexadError>
where
    F: Fn(&Number, u32) -> Result<Number, HexadError>,
    D: Fn(&Number, u32) -> Result<Number, HexadError>,
{
    let work = precision + GUARD_DIGITS;
    let tol = tolerance(precision);
    let mut x = seed;

    for _ in 0..max_iter {
        let fx = f(&x, work)?;
        let dfx = df(&x, work)?;
        let delta = fx.checked_div(&dfx).map_err(HexadError::from)?;
        let next = x.sub(&delta);

        if delta.abs() < tol {
            return Ok(next);
        }
        x = next;
    }

    Err(HexadError::no_convergence(symbol, max_iter))
}

/// ψ: the plastic number, unique real root of x³ - x - 1 = 0
pub fn plastic_root(precision: u32, max_iter: u32) -> Result<Number, HexadError> {
    let one = Number::from_i64(1);
    let three = Number::from_i64(3);

    // f(x) = x³ - x - 1, f'(x) = 3x² - 1
    newton(
        |x, _work| Ok(x.pow(3).sub(x).sub(&one)),
        |x, _work| Ok(three.mul(&x.pow(2)).sub(&one)),
        Number::from_str("1.3").map_err(HexadError::from)?,
        precision,
        max_iter,
        "ψ",
    )
}

/// Ω: the omega constant, unique real root of x·eˣ - 1 = 0
pub fn omega_root(precision: u32, max_iter: u32) -> Result<Number, HexadError> {
    let one = Number::from_i64(1);

    // f(x) = x·eˣ - 1, f'(x) = eˣ·(1 + x)
    newton(
        |x, work| Ok(x.mul(&x.exp(work)).sub(&one)),
        |x, work| Ok(x.exp(work).mul(&one.add(x))),
        Number::from_str("0.5").map_err(HexadError::from)?,
        precision,
        max_iter,
        "Ω",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plastic_root_digits() {
        let psi = plastic_root(50, MAX_ITERATIONS).unwrap();
        let decimal = psi.as_decimal(15);
        assert!(
            decimal.starts_with("1.32471795724474"),
            "ψ should be ~1.3247179572, got: {}",
            decimal
        );
    }

    #[test]
    fn test_plastic_root_satisfies_equation() {
        let psi = plastic_root(50, MAX_ITERATIONS).unwrap();
        let one = Number::from_i64(1);
        let residual = psi.pow(3).sub(&psi).sub(&one).abs();
        assert!(
            residual < Number::from_str("1e-15").unwrap(),
            "ψ³ - ψ - 1 residual too large: {}",
            residual.as_sigfigs(3)
        );
    }

    #[test]
    fn test_omega_root_digits() {
        let omega = omega_root(50, MAX_ITERATIONS).unwrap();
        let decimal = omega.as_decimal(15);
        assert!(
            decimal.starts_with("0.56714329040978"),
            "Ω should be ~0.5671432904, got: {}",
            decimal
        );
    }

    #[test]
    fn test_omega_root_satisfies_equation() {
        let omega = omega_root(50, MAX_ITERATIONS).unwrap();
        let one = Number::from_i64(1);
        let residual = omega.mul(&omega.exp(60)).sub(&one).abs();
        assert!(
            residual < Number::from_str("1e-15").unwrap(),
            "Ω·e^Ω - 1 residual too large: {}",
            residual.as_sigfigs(3)
        );
    }

    #[test]
    fn test_newton_cap_reports_no_convergence() {
        // A one-iteration budget cannot reach 50 digits from the seed
        let err = omega_root(50, 1).unwrap_err();
        assert_eq!(err.code, hexad_core::codes::NO_CONVERGE);
        assert!(err.message.contains("Ω"));
    }

    #[test]
    fn test_determinism() {
        let a = plastic_root(50, MAX_ITERATIONS).unwrap();
        let b = plastic_root(50, MAX_ITERATIONS).unwrap();
        assert_eq!(a, b);
    }
}
