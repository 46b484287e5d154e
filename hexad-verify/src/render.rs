//! Human-readable rendering of a verification run

use crate::VerificationResult;
use hexad_constants::ConstantSet;

/// Render the constants and verification outcome as plain text
pub fn render(result: &VerificationResult, set: &ConstantSet) -> String {
    let mut out = String::new();

    out.push_str("Fine-structure constant derivation\n");
    out.push_str("hypothesis: α = 1 / (φ⁴ · Ω³ · ξ³ · λ · ζ³)\n\n");

    out.push_str(&format!("constants ({} digit working precision)\n", result.precision));
    for (meta, value) in set.entries() {
        out.push_str(&format!(
            "  {}  {:<16} {}\n",
            meta.symbol,
            meta.description,
            value.as_decimal(15)
        ));
    }

    out.push_str("\nresults\n");
    out.push_str(&format!(
        "  field density   {}\n",
        result.field_density.as_decimal(12)
    ));
    out.push_str(&format!("  derived α       {}\n", result.derived.as_decimal(15)));
    out.push_str(&format!(
        "  reference α     {} (CODATA 2018)\n",
        result.reference.as_decimal(13)
    ));
    out.push_str(&format!(
        "  relative error  {}\n",
        result.relative_error.as_sigfigs(3)
    ));

    let verdict = if result.claim_holds() { "holds" } else { "fails" };
    out.push_str(&format!(
        "\nclaimed bound (relative error < {}): {}\n",
        crate::CLAIMED_TOLERANCE,
        verdict
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codata_alpha, verify};
    use hexad_constants::DEFAULT_PRECISION;

    #[test]
    fn test_render_lists_all_constants() {
        let set = ConstantSet::compute(DEFAULT_PRECISION).unwrap();
        let result = verify(&set, &codata_alpha()).unwrap();
        let text = render(&result, &set);

        for symbol in ["φ", "ψ", "Ω", "ξ", "λ", "ζ"] {
            assert!(text.contains(symbol), "missing {} in:\n{}", symbol, text);
        }
        assert!(text.contains("field density"));
        assert!(text.contains("relative error"));
        assert!(text.contains("CODATA 2018"));
    }

    #[test]
    fn test_render_scientific_error() {
        let set = ConstantSet::compute(DEFAULT_PRECISION).unwrap();
        let result = verify(&set, &codata_alpha()).unwrap();
        let text = render(&result, &set);
        assert!(text.contains("e-6"), "relative error should render in e-notation:\n{}", text);
    }
}
