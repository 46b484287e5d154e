//! The six hexad constants
//!
//! φ and λ come from closed forms, ξ from exp(1), ψ and Ω from Newton
//! iteration, ζ from the accelerated Apéry series. Each provider clamps
//! nothing itself; precision policy lives in `ConstantSet`.

use crate::provider::{ConstantMeta, ConstantProvider};
use crate::roots;
use crate::zeta;
use hexad_core::{HexadError, Number};

// ============ φ - Golden Ratio ============

pub struct Phi;

static PHI_META: ConstantMeta = ConstantMeta {
    symbol: "φ",
    ascii: "phi",
    description: "golden ratio",
    formula: "(1 + sqrt(5)) / 2",
    source: "https://oeis.org/A001622",
    category: "algebraic",
};

impl ConstantProvider for Phi {
    fn meta(&self) -> ConstantMeta {
        PHI_META
    }

    fn compute(&self, precision: u32) -> Result<Number, HexadError> {
        Ok(Number::phi(precision))
    }
}

// ============ ψ - Plastic Number ============

pub struct Psi;

static PSI_META: ConstantMeta = ConstantMeta {
    symbol: "ψ",
    ascii: "psi",
    description: "plastic number",
    formula: "real root of x^3 - x - 1 = 0",
    source: "https://oeis.org/A060006",
    category: "algebraic",
};

impl ConstantProvider for Psi {
    fn meta(&self) -> ConstantMeta {
        PSI_META
    }

    fn compute(&self, precision: u32) -> Result<Number, HexadError> {
        roots::plastic_root(precision, roots::MAX_ITERATIONS)
    }
}

// ============ Ω - Omega Constant ============

pub struct Omega;

static OMEGA_META: ConstantMeta = ConstantMeta {
    symbol: "Ω",
    ascii: "omega",
    description: "omega constant",
    formula: "real root of x * e^x - 1 = 0",
    source: "https://oeis.org/A030178",
    category: "transcendental",
};

impl ConstantProvider for Omega {
    fn meta(&self) -> ConstantMeta {
        OMEGA_META
    }

    fn compute(&self, precision: u32) -> Result<Number, HexadError> {
        roots::omega_root(precision, roots::MAX_ITERATIONS)
    }
}

// ============ ξ - Euler's Number ============

pub struct Xi;

static XI_META: ConstantMeta = ConstantMeta {
    symbol: "ξ",
    ascii: "xi",
    description: "Euler's number",
    formula: "exp(1)",
    source: "https://oeis.org/A001113",
    category: "transcendental",
};

impl ConstantProvider for Xi {
    fn meta(&self) -> ConstantMeta {
        XI_META
    }

    fn compute(&self, precision: u32) -> Result<Number, HexadError> {
        Ok(Number::e(precision))
    }
}

// ============ λ - Pi ============

pub struct Lambda;

static LAMBDA_META: ConstantMeta = ConstantMeta {
    symbol: "λ",
    ascii: "lambda",
    description: "pi",
    formula: "pi",
    source: "https://oeis.org/A000796",
    category: "transcendental",
};

impl ConstantProvider for Lambda {
    fn meta(&self) -> ConstantMeta {
        LAMBDA_META
    }

    fn compute(&self, precision: u32) -> Result<Number, HexadError> {
        Ok(Number::pi(precision))
    }
}

// ============ ζ - Apéry's Constant ============

pub struct ZetaThree;

static ZETA_META: ConstantMeta = ConstantMeta {
    symbol: "ζ",
    ascii: "zeta3",
    description: "Apéry's constant",
    formula: "zeta(3)",
    source: "https://oeis.org/A002117",
    category: "special",
};

impl ConstantProvider for ZetaThree {
    fn meta(&self) -> ConstantMeta {
        ZETA_META
    }

    fn compute(&self, precision: u32) -> Result<Number, HexadError> {
        zeta::zeta3(precision, zeta::MAX_TERMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phi_value() {
        let phi = Phi.compute(50).unwrap();
        assert!(phi.as_decimal(15).starts_with("1.6180339887"));
    }

    #[test]
    fn test_xi_value() {
        let xi = Xi.compute(50).unwrap();
        assert!(xi.as_decimal(15).starts_with("2.7182818284"));
    }

    #[test]
    fn test_lambda_value() {
        let lambda = Lambda.compute(50).unwrap();
        assert!(lambda.as_decimal(15).starts_with("3.1415926535"));
    }

    #[test]
    fn test_meta_symbols_distinct() {
        let metas = [
            Phi.meta(),
            Psi.meta(),
            Omega.meta(),
            Xi.meta(),
            Lambda.meta(),
            ZetaThree.meta(),
        ];
        for (i, a) in metas.iter().enumerate() {
            for b in metas.iter().skip(i + 1) {
                assert_ne!(a.symbol, b.symbol);
                assert_ne!(a.ascii, b.ascii);
            }
        }
    }
}
