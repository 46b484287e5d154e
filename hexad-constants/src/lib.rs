//! Hexad constant providers
//!
//! Supplies the six named constants (φ, ψ, Ω, ξ, λ, ζ) at configurable
//! precision: closed forms where the core exposes them, Newton iteration
//! for ψ and Ω, and the accelerated Apéry series for ζ(3).

mod helpers;
mod provider;
mod providers;
mod roots;
mod set;
mod zeta;

pub use provider::{ConstantMeta, ConstantProvider, ConstantRegistry};
pub use providers::{Lambda, Omega, Phi, Psi, Xi, ZetaThree};
pub use roots::{omega_root, plastic_root, MAX_ITERATIONS};
pub use set::{clamp_precision, ConstantSet, DEFAULT_PRECISION, MAX_PRECISION, MIN_PRECISION};
pub use zeta::{zeta3, MAX_TERMS};

/// Registry with the six standard constants
pub fn standard_registry() -> ConstantRegistry {
    ConstantRegistry::new()
        .with_provider(Phi)
        .with_provider(Psi)
        .with_provider(Omega)
        .with_provider(Xi)
        .with_provider(Lambda)
        .with_provider(ZetaThree)
}
