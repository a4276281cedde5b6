//! Model summary structures

use serde::{Deserialize, Serialize};
use std::fmt;

use super::coefficient::Coefficient;
use super::statistics::ModelStatistics;

/// Flattened view of one fitted model, keyed by its response name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Response variable name
    pub response: String,
    /// Number of observations retained for the fit
    pub n_obs: usize,
    /// Number of parameters (intercept included)
    pub n_params: usize,
    /// Coefficients table, intercept first, then predictor order
    pub coefficients: Vec<Coefficient>,
    /// Whole-model statistics
    pub statistics: ModelStatistics,
}

impl ModelSummary {
    /// Overall F-test significant at level `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.statistics.f_p_value <= alpha
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model: {}", self.response)?;
        writeln!(f, "Observations: {}", self.n_obs)?;
        writeln!(f, "Parameters: {}", self.n_params)?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<20} {:>12} {:>12} {:>12} {:>12}",
            "Term", "Estimate", "Std Error", "t-value", "p-value"
        )?;
        writeln!(
            f,
            "{:-<20} {:-<12} {:-<12} {:-<12} {:-<12}",
            "", "", "", "", ""
        )?;

        for coeff in &self.coefficients {
            writeln!(
                f,
                "{:<20} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                coeff.name, coeff.estimate, coeff.std_error, coeff.t_stat, coeff.p_value
            )?;
        }
        writeln!(f)?;

        writeln!(f, "R-squared:          {:.4}", self.statistics.r_squared)?;
        writeln!(f, "Adjusted R-squared: {:.4}", self.statistics.adj_r_squared)?;
        writeln!(f, "F-statistic:        {:.4}", self.statistics.f_statistic)?;
        writeln!(f, "F p-value:          {:.4}", self.statistics.f_p_value)?;
        writeln!(
            f,
            "Residual Std Error: {:.4} on {} degrees of freedom",
            self.statistics.residual_std_error, self.statistics.df_residual
        )?;

        Ok(())
    }
}
