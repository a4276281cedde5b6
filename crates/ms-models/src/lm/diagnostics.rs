//! Heteroscedasticity diagnostics
//!
//! Breusch-Pagan test: an auxiliary regression of the squared
//! residuals on the original design classifies each fitted model as
//! homoscedastic or not. Diagnostic only, never fatal; every model is
//! tested regardless of its significance-filter status.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use tracing::warn;

use crate::base::Result;
use crate::error::ModelError;
use crate::lm::ols::solve_normal_equations;
use crate::lm::result::LinearFit;

/// Breusch-Pagan test result
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BreuschPagan {
    /// LM statistic, n · R²_aux
    pub statistic: f64,
    /// Degrees of freedom (predictors, intercept excluded)
    pub df: usize,
    /// Chi-square p-value
    pub p_value: f64,
    /// Failure to reject constant variance at the configured level
    pub homoscedastic: bool,
}

/// Run the Breusch-Pagan test on a fitted model.
///
/// A numeric failure in the auxiliary regression is logged and
/// classified as not homoscedastic with a NaN statistic; the caller
/// always gets a result.
pub fn breusch_pagan(fit: &LinearFit, alpha: f64) -> BreuschPagan {
    match try_breusch_pagan(fit, alpha) {
        Ok(result) => result,
        Err(err) => {
            warn!(
                response = %fit.response,
                error = %err,
                "Breusch-Pagan auxiliary regression failed"
            );
            BreuschPagan {
                statistic: f64::NAN,
                df: fit.predictors.len(),
                p_value: f64::NAN,
                homoscedastic: false,
            }
        }
    }
}

fn try_breusch_pagan(fit: &LinearFit, alpha: f64) -> Result<BreuschPagan> {
    let n = fit.n_obs() as f64;
    let df = fit.predictors.len();

    // An (effectively) exact fit leaves only rounding dust in the
    // residuals; there is no variance structure to test
    if fit.rss() <= fit.tss() * 1e-20 {
        return Ok(BreuschPagan {
            statistic: 0.0,
            df,
            p_value: 1.0,
            homoscedastic: true,
        });
    }

    // Auxiliary regression: squared residuals on the original design
    let squared = fit.residuals.mapv(|e| e * e);
    let (beta_aux, _) = solve_normal_equations(&fit.x, &squared)?;
    let fitted_aux = fit.x.dot(&beta_aux);

    let rss_aux = squared
        .iter()
        .zip(fitted_aux.iter())
        .map(|(&s, &f)| (s - f).powi(2))
        .sum::<f64>();
    let mean = squared.mean().unwrap_or(0.0);
    let tss_aux = squared.iter().map(|&s| (s - mean).powi(2)).sum::<f64>();

    // Squared residuals that are constant up to rounding carry no
    // heteroscedasticity signal; below this floor the auxiliary R²
    // would measure float dust, not variance structure
    let noise_floor = n * (mean.abs() * 1e-8).powi(2);
    if tss_aux <= noise_floor {
        return Ok(BreuschPagan {
            statistic: 0.0,
            df,
            p_value: 1.0,
            homoscedastic: true,
        });
    }

    let r_squared_aux = 1.0 - rss_aux / tss_aux;
    let statistic = (n * r_squared_aux).max(0.0);

    let chi = ChiSquared::new(df as f64).map_err(|e| ModelError::NumericalError {
        message: format!("failed to create chi-square distribution: {}", e),
        operation: "breusch_pagan".to_string(),
    })?;
    let p_value = (1.0 - chi.cdf(statistic)).clamp(0.0, 1.0);

    Ok(BreuschPagan {
        statistic,
        df,
        p_value,
        homoscedastic: p_value >= alpha,
    })
}
