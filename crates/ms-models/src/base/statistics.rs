//! Statistical structures for model results

use serde::{Deserialize, Serialize};

/// Whole-model fit statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelStatistics {
    /// R-squared
    pub r_squared: f64,
    /// Adjusted R-squared
    pub adj_r_squared: f64,
    /// Residual standard error
    pub residual_std_error: f64,
    /// F-statistic for overall significance
    pub f_statistic: f64,
    /// F-test p-value
    pub f_p_value: f64,
    /// Residual degrees of freedom (n - p)
    pub df_residual: usize,
    /// Model degrees of freedom (p - 1)
    pub df_model: usize,
}
