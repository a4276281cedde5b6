//! Fitted-model record
//!
//! [`LinearFit`] owns everything the downstream stages need: the
//! per-term vectors, the retained design matrix and response, and the
//! whole-model statistics. It is immutable once created, one per
//! response. The extractor ([`LinearFit::summary`]) is pure field
//! extraction; coefficient records carry their names so later stages
//! never join positionally.

use crate::base::{Coefficient, ModelStatistics, ModelSummary};
use crate::lm::ols::{Matrix, Vector};

/// Name given to the intercept term in coefficient records
pub const INTERCEPT_NAME: &str = "(Intercept)";

/// One fitted OLS model
#[derive(Debug, Clone)]
pub struct LinearFit {
    /// Response variable name
    pub response: String,
    /// Predictor names in design order (intercept excluded)
    pub predictors: Vec<String>,
    /// Coefficients (β), intercept first
    pub coefficients: Vector,
    /// Standard errors of coefficients
    pub standard_errors: Vector,
    /// t-statistics for coefficients
    pub t_statistics: Vector,
    /// p-values for coefficients
    pub p_values: Vector,
    /// Fitted values (ŷ)
    pub fitted_values: Vector,
    /// Residuals (y - ŷ)
    pub residuals: Vector,
    /// Design matrix (X), intercept column first
    pub x: Matrix,
    /// Response vector (y), complete-case rows only
    pub y: Vector,
    /// Whole-model statistics
    pub statistics: ModelStatistics,
}

impl LinearFit {
    /// Number of observations retained for the fit
    pub fn n_obs(&self) -> usize {
        self.y.len()
    }

    /// Number of parameters (intercept included)
    pub fn n_params(&self) -> usize {
        self.coefficients.len()
    }

    /// Residual sum of squares
    pub fn rss(&self) -> f64 {
        self.residuals.mapv(|r| r * r).sum()
    }

    /// Total sum of squares of y about its mean
    pub fn tss(&self) -> f64 {
        let y_mean = self.y.mean().unwrap_or(0.0);
        self.y.iter().map(|&yi| (yi - y_mean).powi(2)).sum::<f64>()
    }

    /// Term names in design order: intercept, then predictors
    pub fn term_names(&self) -> Vec<String> {
        std::iter::once(INTERCEPT_NAME.to_string())
            .chain(self.predictors.iter().cloned())
            .collect()
    }

    /// Extract named coefficient records in design order
    pub fn to_coefficients(&self) -> Vec<Coefficient> {
        let names = self.term_names();

        self.coefficients
            .iter()
            .zip(self.standard_errors.iter())
            .zip(self.t_statistics.iter())
            .zip(self.p_values.iter())
            .enumerate()
            .map(|(i, (((&coef, &se), &t), &p))| {
                let record = Coefficient::new(names[i].clone(), coef, se, t, p);
                if i == 0 {
                    record.as_intercept()
                } else {
                    record
                }
            })
            .collect()
    }

    /// Flatten into a [`ModelSummary`]; field extraction only
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            response: self.response.clone(),
            n_obs: self.n_obs(),
            n_params: self.n_params(),
            coefficients: self.to_coefficients(),
            statistics: self.statistics,
        }
    }
}
