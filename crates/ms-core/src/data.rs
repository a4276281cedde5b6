//! Numeric table types for ModelSweep
//!
//! The screening pipeline consumes a pre-validated numeric table:
//! every column is `f64`, missing values are NaN, and column order is
//! the declared order of the source data. Observations with a missing
//! value are dropped per fit, not globally, so row selection is always
//! relative to a variable subset.

mod frame;

#[cfg(test)]
mod tests;

// Re-exports
pub use frame::{NumericFrame, NumericFrameBuilder};

// Type aliases for common use cases
pub type FloatArray = ndarray::Array1<f64>;
pub type Matrix = ndarray::Array2<f64>;

/// Error types specific to data operations
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Length mismatch: expected {expected} rows, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Index out of bounds: index {index}, length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("No columns selected")]
    EmptySelection,
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
