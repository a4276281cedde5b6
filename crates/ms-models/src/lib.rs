//! Statistical models for ModelSweep
//!
//! Automated multi-response linear regression screening: one OLS fit
//! per response over a fixed predictor set, significance filtering of
//! models and coefficients, equation rendering, Breusch-Pagan
//! heteroscedasticity testing, and elasticity/delta sensitivity for
//! the homoscedastic fits.
//!
//! ```
//! use ms_core::data::NumericFrame;
//! use ms_models::screen::Screen;
//!
//! let frame = NumericFrame::from_columns(vec![
//!     ("x", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
//!     ("y", vec![3.0, 5.0, 7.0, 9.0, 11.0]),
//! ])
//! .unwrap();
//!
//! let report = Screen::new(vec!["x"], vec!["y"]).run(&frame);
//! assert!(report.failures.is_empty());
//! assert_eq!(report.equations["y"], "y = 1.0000 + 2.0000*x");
//! ```

pub mod base;
pub mod error;
pub mod lm;
pub mod screen;

// Re-exports
pub use base::{Coefficient, ModelStatistics, ModelSummary, Result};
pub use error::ModelError;
pub use lm::{BreuschPagan, LinearFit, Sensitivity};
pub use screen::{Screen, ScreenConfig, ScreenReport};
