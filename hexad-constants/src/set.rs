//! The computed constant set
//!
//! A `ConstantSet` is computed once per invocation and read-only after
//! that. Requested precision is clamped to [MIN_PRECISION, MAX_PRECISION]:
//! below 15 digits the α comparison loses meaning, and the core's working
//! precision bounds what the arithmetic can honestly deliver.

use crate::provider::{ConstantMeta, ConstantProvider};
use crate::providers::{Lambda, Omega, Phi, Psi, Xi, ZetaThree};
use hexad_core::{HexadError, Number};
use serde::Serialize;

/// Minimum significant digits for a meaningful α comparison
pub const MIN_PRECISION: u32 = 15;

/// Maximum precision the core arithmetic delivers
pub const MAX_PRECISION: u32 = hexad_core::WORK_PRECISION as u32;

/// Default precision for all computations
pub const DEFAULT_PRECISION: u32 = MAX_PRECISION;

/// Clamp a requested precision into the supported range
pub fn clamp_precision(precision: u32) -> u32 {
    precision.clamp(MIN_PRECISION, MAX_PRECISION)
}

/// The six constants, computed once at a fixed precision
#[derive(Debug, Clone, Serialize)]
pub struct ConstantSet {
    pub phi: Number,
    pub psi: Number,
    pub omega: Number,
    pub xi: Number,
    pub lambda: Number,
    pub zeta3: Number,
    pub precision: u32,
}

impl ConstantSet {
    /// Compute all six constants. Fails fatally if ψ, Ω or ζ(3) cannot
    /// converge - every downstream result depends on exact constants.
    pub fn compute(precision: u32) -> Result<Self, HexadError> {
        let precision = clamp_precision(precision);
        Ok(Self {
            phi: Phi.compute(precision)?,
            psi: Psi.compute(precision)?,
            omega: Omega.compute(precision)?,
            xi: Xi.compute(precision)?,
            lambda: Lambda.compute(precision)?,
            zeta3: ZetaThree.compute(precision)?,
            precision,
        })
    }

    /// The six values zipped with their metadata, in canonical order
    pub fn entries(&self) -> Vec<(ConstantMeta, &Number)> {
        vec![
            (Phi.meta(), &self.phi),
            (Psi.meta(), &self.psi),
            (Omega.meta(), &self.omega),
            (Xi.meta(), &self.xi),
            (Lambda.meta(), &self.lambda),
            (ZetaThree.meta(), &self.zeta3),
        ]
    }
}
