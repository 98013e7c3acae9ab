//! Lexical strength: rewards confident wording, gives partial credit for hedging.
//!
//! Matching is plain substring containment on the lower-cased text, so terms
//! also match inside longer words ("experienced" inside "inexperienced",
//! "web" inside "cobweb"). Each term counts at most once per document.

use resumerank_common::Lexicon;

use super::{FeatureExtractor, FeatureKind, ScoringContext};

#[derive(Debug, Clone)]
pub struct LexicalStrengthScorer {
    vague_terms: Vec<String>,
    vague_weight: f64,
    strong_terms: Vec<String>,
    strong_weight: f64,
}

impl LexicalStrengthScorer {
    /// Terms are expected lower-case (see `Lexicon::lowercased`).
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self {
            vague_terms: lexicon.vague_terms.clone(),
            vague_weight: lexicon.vague_weight,
            strong_terms: lexicon.strong_terms.clone(),
            strong_weight: lexicon.strong_weight,
        }
    }

    pub fn score(&self, text: &str) -> f64 {
        let text = text.to_lowercase();
        let hits = |terms: &[String]| terms.iter().filter(|t| text.contains(t.as_str())).count() as f64;
        hits(&self.vague_terms) * self.vague_weight + hits(&self.strong_terms) * self.strong_weight
    }
}

impl Default for LexicalStrengthScorer {
    fn default() -> Self {
        Self::from_lexicon(&Lexicon::default())
    }
}

impl FeatureExtractor for LexicalStrengthScorer {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Lexical
    }

    fn compute(&self, ctx: &ScoringContext<'_>) -> Vec<f64> {
        ctx.corpus().texts().map(|t| self.score(t)).collect()
    }
}
