//! Composite resume score.
//!
//! S(d) = Σ(w_i × n_i) over the five normalised feature columns.

use serde::{Deserialize, Serialize};

use crate::matrix::{FeatureVector, NormalizedMatrix};
use crate::weights::WeightTable;

/// Per-document result with the features that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub id: String,
    pub raw: FeatureVector,
    pub normalized: FeatureVector,
    pub score: f64,
}

/// Weighted sum of one document's normalised features.
pub fn compute_composite_score(normed: &FeatureVector, weights: &WeightTable) -> f64 {
    normed
        .as_array()
        .iter()
        .zip(weights.as_array().iter())
        .map(|(n, w)| n * w)
        .sum()
}

/// Composite score for every row, in row order.
pub fn aggregate(matrix: &NormalizedMatrix, weights: &WeightTable) -> Vec<f64> {
    matrix
        .rows()
        .iter()
        .map(|row| compute_composite_score(row, weights))
        .collect()
}
