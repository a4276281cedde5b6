//! Significance filters
//!
//! Both filters are derivations over immutable inputs: the model
//! filter selects and ranks summaries whose overall F-test is
//! significant; the coefficient filter selects a summary's
//! individually significant coefficients. Empty outputs are legal.

use std::cmp::Ordering;

use crate::base::{Coefficient, ModelSummary};

/// Summaries with F-test p ≤ `alpha`, sorted by descending adjusted
/// R². The sort is stable, so ties keep their input order.
pub fn significant_models<'a, I>(summaries: I, alpha: f64) -> Vec<ModelSummary>
where
    I: IntoIterator<Item = &'a ModelSummary>,
{
    let mut kept: Vec<ModelSummary> = summaries
        .into_iter()
        .filter(|summary| summary.is_significant(alpha))
        .cloned()
        .collect();

    kept.sort_by(|a, b| {
        b.statistics
            .adj_r_squared
            .partial_cmp(&a.statistics.adj_r_squared)
            .unwrap_or(Ordering::Equal)
    });

    kept
}

/// Coefficients with p ≤ `alpha`, in the summary's original order.
///
/// The intercept is retained if significant and dropped otherwise;
/// refiltering an already filtered set is a no-op.
pub fn significant_coefficients(summary: &ModelSummary, alpha: f64) -> Vec<Coefficient> {
    summary
        .coefficients
        .iter()
        .filter(|coef| coef.is_significant(alpha))
        .cloned()
        .collect()
}
