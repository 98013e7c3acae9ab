//! Duplicate detector: 1 for a unique resume, 0 when another resume in the
//! batch is nearly identical to it.

use super::{FeatureExtractor, FeatureKind, ScoringContext};
use crate::tfidf::SimilarityMatrix;

pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 0.9;

#[derive(Debug, Clone)]
pub struct UniquenessScorer {
    threshold: f64,
}

impl UniquenessScorer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// 0 where the best match among the *other* rows exceeds the threshold, else 1.
    pub fn score_rows(&self, matrix: &SimilarityMatrix) -> Vec<f64> {
        (0..matrix.len())
            .map(|i| {
                let nearest = matrix
                    .row(i)
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &s)| s)
                    .fold(f64::NEG_INFINITY, f64::max);
                if nearest > self.threshold { 0.0 } else { 1.0 }
            })
            .collect()
    }
}

impl Default for UniquenessScorer {
    fn default() -> Self {
        Self::new(DEFAULT_DUPLICATE_THRESHOLD)
    }
}

impl FeatureExtractor for UniquenessScorer {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Uniqueness
    }

    fn compute(&self, ctx: &ScoringContext<'_>) -> Vec<f64> {
        self.score_rows(ctx.similarity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumerank_common::{Lexicon, TextCorpus};

    fn matrix(rows: Vec<Vec<f64>>) -> SimilarityMatrix {
        SimilarityMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_self_similarity_is_ignored() {
        let m = matrix(vec![vec![1.0, 0.3], vec![0.3, 1.0]]);
        assert_eq!(UniquenessScorer::default().score_rows(&m), vec![1.0, 1.0]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let m = matrix(vec![
            vec![1.0, 0.9, 0.0],
            vec![0.9, 1.0, 0.95],
            vec![0.0, 0.95, 1.0],
        ]);
        assert_eq!(UniquenessScorer::default().score_rows(&m), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_single_document_is_unique() {
        let m = matrix(vec![vec![1.0]]);
        assert_eq!(UniquenessScorer::default().score_rows(&m), vec![1.0]);
    }

    #[test]
    fn test_identical_texts_flagged() {
        let corpus = TextCorpus::from_pairs([
            ("a", "rust engineer building search engines"),
            ("b", "rust engineer building search engines"),
            ("c", "pastry chef with bakery experience"),
        ]);
        let lexicon = Lexicon::default();
        let ctx = ScoringContext::new(&corpus, &lexicon.stop_words);
        assert_eq!(UniquenessScorer::default().compute(&ctx), vec![0.0, 0.0, 1.0]);
    }
}
