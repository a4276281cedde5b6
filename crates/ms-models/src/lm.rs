//! Linear model estimation and per-model analysis
//!
//! Ordinary least squares is the only estimator: the screening
//! pipeline fits one OLS model per response against a fixed predictor
//! set. This module owns the estimator, the fitted-model record, the
//! Breusch-Pagan heteroscedasticity diagnostic, and the
//! elasticity/delta sensitivity analyzer.

pub mod diagnostics;
pub mod ols;
pub mod result;
pub mod sensitivity;


// Re-exports
pub use diagnostics::{breusch_pagan, BreuschPagan};
pub use ols::{fit, Matrix, Vector};
pub use result::LinearFit;
pub use sensitivity::{analyze, Sensitivity};

use crate::base::Result;
use ms_core::data::NumericFrame;

/// Convenience function: fit one response against a predictor set
pub fn lm<S: AsRef<str>>(
    frame: &NumericFrame,
    response: &str,
    predictors: &[S],
) -> Result<LinearFit> {
    ols::fit(frame, response, predictors)
}
