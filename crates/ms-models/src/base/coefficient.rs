//! Coefficient definition

use serde::{Deserialize, Serialize};

/// Coefficient estimate with inference statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coefficient {
    /// Coefficient name
    pub name: String,
    /// Point estimate
    pub estimate: f64,
    /// Standard error
    pub std_error: f64,
    /// t-statistic
    pub t_stat: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Is this the intercept?
    pub is_intercept: bool,
}

impl Coefficient {
    /// Create a new coefficient record
    pub fn new(
        name: impl Into<String>,
        estimate: f64,
        std_error: f64,
        t_stat: f64,
        p_value: f64,
    ) -> Self {
        Self {
            name: name.into(),
            estimate,
            std_error,
            t_stat,
            p_value,
            is_intercept: false,
        }
    }

    /// Mark as intercept
    pub fn as_intercept(mut self) -> Self {
        self.is_intercept = true;
        self
    }

    /// Individually significant at level `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value <= alpha
    }
}
