//! Equation rendering
//!
//! Builds the textual linear equation from a model's significant
//! coefficients. Formatting is structural: the intercept is identified
//! by its record flag, never by name matching, and each joiner's sign
//! is chosen from the coefficient it precedes, so "+ -" can never be
//! produced. Variable names render verbatim.

use crate::base::Coefficient;

/// Render `response = c0 + c1*name1 - c2*name2 ...` to 4 decimals.
///
/// An empty coefficient set renders the canonical empty-model string
/// `response = 0`.
pub fn render(response: &str, terms: &[Coefficient]) -> String {
    if terms.is_empty() {
        return format!("{} = 0", response);
    }

    let mut out = format!("{} = ", response);

    for (i, coef) in terms.iter().enumerate() {
        let negative = coef.estimate < 0.0;

        if i == 0 {
            if negative {
                out.push('-');
            }
        } else if negative {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }

        out.push_str(&format_term(coef));
    }

    out
}

/// One unsigned term: a bare constant for the intercept, otherwise
/// `coefficient*name`
fn format_term(coef: &Coefficient) -> String {
    let magnitude = coef.estimate.abs();

    if coef.is_intercept {
        format!("{:.4}", magnitude)
    } else {
        format!("{:.4}*{}", magnitude, coef.name)
    }
}
