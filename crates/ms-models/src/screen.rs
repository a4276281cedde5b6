//! Multi-response screening pipeline
//!
//! Fits one OLS model per response over a fixed predictor set, then
//! drives the downstream stages: summary extraction, model and
//! coefficient significance filtering, equation rendering,
//! heteroscedasticity testing, and sensitivity analysis for the
//! homoscedastic fits. Fits are independent and run in parallel; all
//! outputs are keyed by response name and assembled in the declared
//! response order, never by completion order.

pub mod equation;
pub mod filter;
pub mod report;


use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::base::ModelSummary;
use crate::error::ModelError;
use crate::lm::diagnostics::{breusch_pagan, BreuschPagan};
use crate::lm::sensitivity::{analyze, Sensitivity};
use crate::lm::{self, LinearFit};
use ms_core::data::NumericFrame;

/// Default significance level for every filtering stage
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Screening configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Significance level shared by the model filter, the coefficient
    /// filter, and the heteroscedasticity classification
    pub alpha: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Multi-response screening over a fixed predictor set
#[derive(Debug, Clone)]
pub struct Screen {
    predictors: Vec<String>,
    responses: Vec<String>,
    config: ScreenConfig,
}

impl Screen {
    /// Create a screen for the given predictor and response sets
    pub fn new<S: Into<String>>(predictors: Vec<S>, responses: Vec<S>) -> Self {
        Self {
            predictors: predictors.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
            config: ScreenConfig::default(),
        }
    }

    /// Set configuration
    pub fn config(mut self, config: ScreenConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the full pipeline over a numeric table.
    ///
    /// A failing fit is recorded against its response name and the
    /// remaining responses proceed; nothing aborts the batch.
    pub fn run(&self, frame: &NumericFrame) -> ScreenReport {
        let alpha = self.config.alpha;

        // Independent fits; the indexed collect restores declared order
        let outcomes: Vec<(String, crate::base::Result<LinearFit>)> = self
            .responses
            .par_iter()
            .map(|response| {
                (
                    response.clone(),
                    lm::fit(frame, response, &self.predictors),
                )
            })
            .collect();

        let mut fits: IndexMap<String, LinearFit> = IndexMap::new();
        let mut failures: IndexMap<String, ModelError> = IndexMap::new();

        for (response, outcome) in outcomes {
            match outcome {
                Ok(fit) => {
                    fits.insert(response, fit);
                }
                Err(err) => {
                    warn!(response = %response, error = %err, "model fit failed");
                    failures.insert(response, err);
                }
            }
        }

        let summaries: IndexMap<String, ModelSummary> = fits
            .iter()
            .map(|(response, fit)| (response.clone(), fit.summary()))
            .collect();

        let significant = filter::significant_models(summaries.values(), alpha);

        let equations: IndexMap<String, String> = summaries
            .iter()
            .map(|(response, summary)| {
                let terms = filter::significant_coefficients(summary, alpha);
                (response.clone(), equation::render(response, &terms))
            })
            .collect();

        let diagnostics: IndexMap<String, BreuschPagan> = fits
            .iter()
            .map(|(response, fit)| (response.clone(), breusch_pagan(fit, alpha)))
            .collect();

        let sensitivities: IndexMap<String, Vec<Sensitivity>> = fits
            .iter()
            .filter(|(response, _)| diagnostics[response.as_str()].homoscedastic)
            .map(|(response, fit)| (response.clone(), analyze(fit)))
            .collect();

        info!(
            fitted = fits.len(),
            failed = failures.len(),
            significant = significant.len(),
            homoscedastic = sensitivities.len(),
            "screen complete"
        );

        ScreenReport {
            fits,
            summaries,
            failures,
            significant,
            equations,
            diagnostics,
            sensitivities,
        }
    }
}

/// Everything the screen produces, keyed by response name in the
/// declared response order
#[derive(Debug)]
pub struct ScreenReport {
    /// Successful fits
    pub fits: IndexMap<String, LinearFit>,
    /// One summary per successful fit
    pub summaries: IndexMap<String, ModelSummary>,
    /// Per-response fit failures
    pub failures: IndexMap<String, ModelError>,
    /// Significant models ranked by descending adjusted R²
    pub significant: Vec<ModelSummary>,
    /// One rendered equation per successful fit
    pub equations: IndexMap<String, String>,
    /// Breusch-Pagan result per successful fit
    pub diagnostics: IndexMap<String, BreuschPagan>,
    /// Sensitivity records for the homoscedastic fits only
    pub sensitivities: IndexMap<String, Vec<Sensitivity>>,
}
