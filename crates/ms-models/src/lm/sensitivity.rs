//! Coefficient sensitivity metrics
//!
//! For homoscedastic models only: per-coefficient elasticity
//! (responsiveness of the predicted outcome to the predictor,
//! evaluated at sample means) and delta (standard error as a
//! percentage of the estimate). The analyzer consumes the model's
//! full coefficient set, not the significance-filtered subset.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::base::Result;
use crate::error::ModelError;
use crate::lm::result::LinearFit;

/// Sensitivity metrics for one coefficient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensitivity {
    /// Coefficient name
    pub name: String,
    /// β̂ · mean(x) / mean(ŷ); exactly 0 for a zero estimate
    pub elasticity: f64,
    /// 100 · se / β̂; `None` is the sentinel for a zero estimate
    pub delta: Option<f64>,
}

/// Compute sensitivity records for every coefficient of a fit.
///
/// A zero estimate makes delta undefined; the record carries `None`
/// so one degenerate coefficient cannot abort the batch.
pub fn analyze(fit: &LinearFit) -> Vec<Sensitivity> {
    let mean_fitted = fit.fitted_values.mean().unwrap_or(0.0);

    fit.to_coefficients()
        .into_iter()
        .enumerate()
        .map(|(j, coef)| {
            // Intercept column is ones, so its mean is 1
            let mean_x = fit.x.column(j).mean().unwrap_or(0.0);

            let delta = match delta(coef.estimate, coef.std_error) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(
                        response = %fit.response,
                        term = %coef.name,
                        error = %err,
                        "delta undefined"
                    );
                    None
                }
            };

            Sensitivity {
                elasticity: elasticity(coef.estimate, mean_x, mean_fitted),
                delta,
                name: coef.name,
            }
        })
        .collect()
}

/// Elasticity of the prediction with respect to one term, at means
pub fn elasticity(estimate: f64, mean_x: f64, mean_fitted: f64) -> f64 {
    if estimate == 0.0 {
        return 0.0;
    }
    estimate * mean_x / mean_fitted
}

/// Standard error as a percentage of the estimate
pub fn delta(estimate: f64, std_error: f64) -> Result<f64> {
    if estimate == 0.0 {
        return Err(ModelError::DivisionByZero {
            context: "delta: zero coefficient estimate".to_string(),
        });
    }
    Ok(100.0 * std_error / estimate)
}
