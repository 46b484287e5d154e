//! Constant provider trait and registry

use hexad_core::{HexadError, Number};
use serde::Serialize;
use std::sync::Arc;

/// Metadata about a constant
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConstantMeta {
    /// Unicode symbol, e.g. "φ"
    pub symbol: &'static str,
    /// ASCII name, e.g. "phi"
    pub ascii: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Defining formula or equation
    pub formula: &'static str,
    /// Source citation (OEIS, CODATA, defining equation)
    pub source: &'static str,
    /// Category: algebraic, transcendental, special
    pub category: &'static str,
}

/// A named constant that can be computed at a requested precision
pub trait ConstantProvider: Send + Sync {
    fn meta(&self) -> ConstantMeta;
    fn compute(&self, precision: u32) -> Result<Number, HexadError>;
}

/// Registry of constant providers
pub struct ConstantRegistry {
    providers: Vec<Arc<dyn ConstantProvider>>,
}

impl ConstantRegistry {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn with_provider<P: ConstantProvider + 'static>(mut self, p: P) -> Self {
        self.providers.push(Arc::new(p));
        self
    }

    /// Look up a provider by Unicode symbol or ASCII name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&dyn ConstantProvider> {
        let lower = name.to_lowercase();
        self.providers
            .iter()
            .find(|p| {
                let meta = p.meta();
                meta.symbol == name || meta.ascii.to_lowercase() == lower
            })
            .map(|p| p.as_ref())
    }

    /// Iterate providers in registration order
    pub fn providers(&self) -> impl Iterator<Item = &dyn ConstantProvider> {
        self.providers.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Compute every registered constant at the given precision.
    /// Fails on the first provider that cannot converge.
    pub fn compute_all(&self, precision: u32) -> Result<Vec<(ConstantMeta, Number)>, HexadError> {
        let mut values = Vec::with_capacity(self.providers.len());
        for p in &self.providers {
            values.push((p.meta(), p.compute(precision)?));
        }
        Ok(values)
    }
}

impl Default for ConstantRegistry {
    fn default() -> Self {
        Self::new()
    }
}
