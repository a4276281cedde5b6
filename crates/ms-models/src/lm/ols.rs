//! Ordinary Least Squares (OLS) estimation
//!
//! Fits one linear model per (response, predictor set) pair on the
//! complete-case rows of the source table. Pure function of its
//! inputs; all inference statistics are computed at fit time.

use ndarray::{Array1, Array2};
use ndarray_linalg::Inverse;
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};
use tracing::debug;

use crate::base::{ModelStatistics, Result};
use crate::error::ModelError;
use crate::lm::result::LinearFit;
use ms_core::data::{DataError, NumericFrame};

/// Matrix type alias for 2D arrays
pub type Matrix = Array2<f64>;

/// Vector type alias for 1D arrays
pub type Vector = Array1<f64>;

/// Fit an OLS model for `response` against `predictors`.
///
/// The design matrix carries an intercept column of ones prepended to
/// the predictor columns, restricted to rows where every used column
/// is non-missing. Fails with [`ModelError::InsufficientData`] when
/// the complete rows leave no residual degrees of freedom and with
/// [`ModelError::SingularDesign`] when the normal equations have no
/// unique solution.
pub fn fit<S: AsRef<str>>(
    frame: &NumericFrame,
    response: &str,
    predictors: &[S],
) -> Result<LinearFit> {
    if predictors.is_empty() {
        return Err(ModelError::Data(DataError::EmptySelection));
    }

    let names: Vec<String> = predictors
        .iter()
        .map(|s| s.as_ref().to_string())
        .collect();

    let mut used: Vec<&str> = vec![response];
    used.extend(names.iter().map(String::as_str));
    let rows = frame.complete_rows(&used)?;

    let n = rows.len();
    let p = names.len() + 1;

    if n <= p {
        return Err(ModelError::InsufficientData {
            n_samples: n,
            n_params: p,
        });
    }

    // Design matrix: intercept ones, then predictors in declared order
    let mut x = Matrix::ones((n, p));
    for (j, name) in names.iter().enumerate() {
        x.column_mut(j + 1).assign(&frame.gather(name, &rows)?);
    }
    let y = frame.gather(response, &rows)?;

    let (coefficients, xtx_inv) = solve_normal_equations(&x, &y)?;

    let fitted_values = x.dot(&coefficients);
    let residuals = &y - &fitted_values;

    let rss = residuals.mapv(|r| r * r).sum();
    let y_mean = y.mean().unwrap_or(0.0);
    let tss = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum::<f64>();

    if tss <= 0.0 {
        return Err(ModelError::NumericalError {
            message: format!("response '{}' has zero variance", response),
            operation: "fit".to_string(),
        });
    }

    let r_squared = 1.0 - rss / tss;
    let adj_r_squared = 1.0 - (1.0 - r_squared) * ((n as f64 - 1.0) / (n as f64 - p as f64));

    // σ̂² = RSS / (n - p); coefficient covariance = σ̂² (X'X)⁻¹
    let sigma2 = rss / (n as f64 - p as f64);
    let standard_errors = (&xtx_inv * sigma2)
        .diag()
        .mapv(|v| v.sqrt().max(1e-10));

    let (t_statistics, p_values) = inference(&coefficients, &standard_errors, n - p)?;
    let (f_statistic, f_p_value) = f_test(rss, tss, n, p)?;

    debug!(
        response,
        n_obs = n,
        n_params = p,
        r_squared,
        "fitted linear model"
    );

    Ok(LinearFit {
        response: response.to_string(),
        predictors: names,
        coefficients,
        standard_errors,
        t_statistics,
        p_values,
        fitted_values,
        residuals,
        x,
        y,
        statistics: ModelStatistics {
            r_squared,
            adj_r_squared,
            residual_std_error: sigma2.sqrt(),
            f_statistic,
            f_p_value,
            df_residual: n - p,
            df_model: p - 1,
        },
    })
}

/// Solve β = (X'X)⁻¹ X'y, returning β and (X'X)⁻¹.
///
/// Shared with the Breusch-Pagan auxiliary regression.
pub(crate) fn solve_normal_equations(x: &Matrix, y: &Vector) -> Result<(Vector, Matrix)> {
    let xtx = x.t().dot(x);
    let xtx_inv = xtx.inv().map_err(|e| ModelError::SingularDesign {
        message: format!("failed to invert X'X: {}", e),
    })?;

    let xty = x.t().dot(y);
    Ok((xtx_inv.dot(&xty), xtx_inv))
}

/// t-statistics and two-sided Student-t p-values
fn inference(
    coefficients: &Vector,
    std_errors: &Vector,
    df_residual: usize,
) -> Result<(Vector, Vector)> {
    let t_dist = StudentsT::new(0.0, 1.0, df_residual as f64).map_err(|e| {
        ModelError::NumericalError {
            message: format!("failed to create t-distribution: {}", e),
            operation: "inference".to_string(),
        }
    })?;

    let t_statistics: Vector = coefficients
        .iter()
        .zip(std_errors.iter())
        .map(|(&coef, &se)| coef / se)
        .collect();

    let p_values: Vector = t_statistics
        .iter()
        .map(|&t| (2.0 * (1.0 - t_dist.cdf(t.abs()))).clamp(0.0, 1.0))
        .collect();

    Ok((t_statistics, p_values))
}

/// Overall F-statistic and its p-value
fn f_test(rss: f64, tss: f64, n: usize, p: usize) -> Result<(f64, f64)> {
    // A perfect fit has no residual variance to test against
    if rss <= 0.0 {
        return Ok((f64::INFINITY, 0.0));
    }

    let df_model = (p - 1) as f64;
    let df_residual = (n - p) as f64;

    // tss - rss can round below zero when the model explains nothing
    let f_statistic = (((tss - rss) / df_model) / (rss / df_residual)).max(0.0);

    let f_dist = FisherSnedecor::new(df_model, df_residual).map_err(|e| {
        ModelError::NumericalError {
            message: format!("failed to create F-distribution: {}", e),
            operation: "f_test".to_string(),
        }
    })?;

    let f_p_value = (1.0 - f_dist.cdf(f_statistic)).clamp(0.0, 1.0);

    Ok((f_statistic, f_p_value))
}
