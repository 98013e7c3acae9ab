//! Repetition penalty: punishes keyword stuffing by the count of the most
//! frequent whitespace-delimited token.

use std::collections::HashMap;

use super::{FeatureExtractor, FeatureKind, ScoringContext};

pub const DEFAULT_REPETITION_STEP: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct RepetitionPenaltyScorer {
    step: f64,
}

impl RepetitionPenaltyScorer {
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    /// `-step × max token frequency`, or 0 when the text has no tokens.
    pub fn score(&self, text: &str) -> f64 {
        let mut freq: HashMap<String, u32> = HashMap::new();
        for token in text.split_whitespace() {
            *freq.entry(token.to_lowercase()).or_insert(0) += 1;
        }
        match freq.values().max() {
            Some(&max) => -self.step * max as f64,
            None => 0.0,
        }
    }
}

impl Default for RepetitionPenaltyScorer {
    fn default() -> Self {
        Self::new(DEFAULT_REPETITION_STEP)
    }
}

impl FeatureExtractor for RepetitionPenaltyScorer {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Repetition
    }

    fn compute(&self, ctx: &ScoringContext<'_>) -> Vec<f64> {
        ctx.corpus().texts().map(|t| self.score(t)).collect()
    }
}
