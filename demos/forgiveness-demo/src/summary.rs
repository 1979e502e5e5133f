//! Facet summaries recorded alongside a confession.

use serde::Serialize;
use triadic_types::BoundedState;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FacetSummary {
    /// Product of the three bounded facets.
    pub coherence: f64,
    /// Population standard deviation of the three bounded facets.
    pub divergence: f64,
}

impl FacetSummary {
    pub fn from_bounded(bounded: &BoundedState) -> Self {
        let facets = bounded.facets();
        Self {
            coherence: coherence(&facets),
            divergence: divergence(&facets),
        }
    }
}

pub fn coherence(facets: &[f64]) -> f64 {
    facets.iter().product()
}

pub fn divergence(facets: &[f64]) -> f64 {
    if facets.is_empty() {
        return 0.0;
    }
    let n = facets.len() as f64;
    let mean = facets.iter().sum::<f64>() / n;
    let variance = facets.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
