//! Flat-text report rendering
//!
//! The rendered blocks are persisted artifacts, so the format is
//! fixed-width and stable: same inputs, same bytes.

use indexmap::IndexMap;

use crate::lm::diagnostics::BreuschPagan;
use crate::lm::sensitivity::Sensitivity;

/// One block per model listing each coefficient's elasticity and delta
pub fn sensitivity_report(sensitivities: &IndexMap<String, Vec<Sensitivity>>) -> String {
    let mut out = String::new();

    for (response, records) in sensitivities {
        out.push_str(&format!("== {} ==\n", response));
        out.push_str(&format!(
            "{:<20} {:>12} {:>12}\n",
            "Term", "Elasticity", "Delta %"
        ));

        for record in records {
            match record.delta {
                Some(delta) => out.push_str(&format!(
                    "{:<20} {:>12.4} {:>12.4}\n",
                    record.name, record.elasticity, delta
                )),
                None => out.push_str(&format!(
                    "{:<20} {:>12.4} {:>12}\n",
                    record.name, record.elasticity, "undefined"
                )),
            }
        }

        out.push('\n');
    }

    out
}

/// Heteroscedasticity table: one row per tested model
pub fn heteroscedasticity_table(diagnostics: &IndexMap<String, BreuschPagan>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<20} {:>12} {:>6} {:>12}  {}\n",
        "Model", "LM stat", "df", "p-value", "Classification"
    ));

    for (response, result) in diagnostics {
        let classification = if result.homoscedastic {
            "homoscedastic"
        } else {
            "heteroscedastic"
        };

        out.push_str(&format!(
            "{:<20} {:>12.4} {:>6} {:>12.4}  {}\n",
            response, result.statistic, result.df, result.p_value, classification
        ));
    }

    out
}
