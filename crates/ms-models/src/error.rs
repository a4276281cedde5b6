//! Model-related error types

use thiserror::Error;

use ms_core::data::DataError;

/// Model-related errors
#[derive(Debug, Error)]
pub enum ModelError {
    /// Data-related error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Too few complete observations for the requested design
    #[error("Not enough data: {n_samples} complete observations for {n_params} parameters")]
    InsufficientData {
        /// Number of complete observations
        n_samples: usize,
        /// Number of parameters (intercept included)
        n_params: usize,
    },

    /// Collinear or duplicate predictors preventing a unique estimate
    #[error("Singular design matrix: {message}")]
    SingularDesign {
        /// What failed
        message: String,
    },

    /// Zero denominator in a derived ratio
    #[error("Division by zero in {context}")]
    DivisionByZero {
        /// Which ratio was requested
        context: String,
    },

    /// Numerical computation error
    #[error("Numerical error: {message} (operation: {operation})")]
    NumericalError {
        /// Error message
        message: String,
        /// Operation that failed
        operation: String,
    },
}
