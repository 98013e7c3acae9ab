//! Corpus similarity: how typical a resume is relative to the rest of the batch.
//!
//! By default the mean includes the document's own similarity (1.0 for any
//! document with vocabulary), which lifts every score by the same amount.
//! `include_self = false` averages over the other documents only.

use super::{FeatureExtractor, FeatureKind, ScoringContext};
use crate::tfidf::SimilarityMatrix;

#[derive(Debug, Clone)]
pub struct CorpusSimilarityScorer {
    include_self: bool,
}

impl CorpusSimilarityScorer {
    pub fn new(include_self: bool) -> Self {
        Self { include_self }
    }

    /// Mean similarity per row of a precomputed matrix.
    pub fn score_rows(&self, matrix: &SimilarityMatrix) -> Vec<f64> {
        let n = matrix.len();
        (0..n)
            .map(|i| {
                let row = matrix.row(i);
                if self.include_self {
                    row.iter().sum::<f64>() / n as f64
                } else if n > 1 {
                    (row.iter().sum::<f64>() - row[i]) / (n - 1) as f64
                } else {
                    // A lone document has no peers to compare against.
                    0.0
                }
            })
            .collect()
    }
}

impl Default for CorpusSimilarityScorer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FeatureExtractor for CorpusSimilarityScorer {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Similarity
    }

    fn compute(&self, ctx: &ScoringContext<'_>) -> Vec<f64> {
        self.score_rows(ctx.similarity())
    }
}
