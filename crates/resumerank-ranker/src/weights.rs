//! Weight table for the composite resume score.
//!
//! This is the single tunable constant of the system. Nothing is learned;
//! the values below are a fixed expert prior.

use resumerank_common::{RankError, Result};
use serde::{Deserialize, Serialize};

use crate::features::FeatureKind;

/// The 5-component weight vector.
/// Weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    /// Strong vs. vague wording
    pub lexical: f64,
    /// Mean TF-IDF similarity to the rest of the corpus
    pub similarity: f64,
    /// Repetition penalty (keyword stuffing)
    pub penalty: f64,
    /// Skill claims backed by evidence terms
    pub consistency: f64,
    /// Not a near-duplicate of another resume
    pub uniqueness: f64,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            lexical:     0.20,
            similarity:  0.25,
            penalty:     0.15,
            consistency: 0.20,
            uniqueness:  0.20,
        }
    }
}

impl WeightTable {
    pub fn sum(&self) -> f64 {
        self.lexical + self.similarity + self.penalty + self.consistency + self.uniqueness
    }

    /// Check that all weights are finite, non-negative, and sum to ~1.0
    pub fn validate(&self) -> Result<()> {
        if self.as_array().iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(RankError::InvalidWeights(format!(
                "weights must be finite and non-negative: {self:?}"
            )));
        }
        let sum = self.sum();
        if (sum - 1.0).abs() >= 1e-6 {
            return Err(RankError::InvalidWeights(format!(
                "weights sum to {sum}, expected 1.0"
            )));
        }
        Ok(())
    }

    /// Renormalise weights so they sum to 1.0
    pub fn normalise(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            self.lexical     /= sum;
            self.similarity  /= sum;
            self.penalty     /= sum;
            self.consistency /= sum;
            self.uniqueness  /= sum;
        }
    }

    /// Weight applied to one feature column.
    pub fn weight(&self, kind: FeatureKind) -> f64 {
        match kind {
            FeatureKind::Lexical => self.lexical,
            FeatureKind::Repetition => self.penalty,
            FeatureKind::SkillEvidence => self.consistency,
            FeatureKind::Similarity => self.similarity,
            FeatureKind::Uniqueness => self.uniqueness,
        }
    }

    /// Weights in feature column order (see `FeatureKind::ALL`).
    pub fn as_array(&self) -> [f64; FeatureKind::COUNT] {
        FeatureKind::ALL.map(|kind| self.weight(kind))
    }
}
