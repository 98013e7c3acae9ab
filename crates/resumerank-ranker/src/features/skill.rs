//! Skill evidence: counts skills whose supporting evidence term also appears.

use resumerank_common::{Lexicon, SkillPair};

use super::{FeatureExtractor, FeatureKind, ScoringContext};

#[derive(Debug, Clone)]
pub struct SkillEvidenceScorer {
    pairs: Vec<SkillPair>,
}

impl SkillEvidenceScorer {
    /// Pair terms are expected lower-case.
    pub fn new(pairs: Vec<SkillPair>) -> Self {
        Self { pairs }
    }

    /// Number of pairs with both terms present anywhere in the text.
    pub fn score(&self, text: &str) -> f64 {
        let text = text.to_lowercase();
        self.pairs
            .iter()
            .filter(|p| text.contains(p.skill.as_str()) && text.contains(p.evidence.as_str()))
            .count() as f64
    }
}

impl Default for SkillEvidenceScorer {
    fn default() -> Self {
        Self::new(Lexicon::default().skill_pairs)
    }
}

impl FeatureExtractor for SkillEvidenceScorer {
    fn kind(&self) -> FeatureKind {
        FeatureKind::SkillEvidence
    }

    fn compute(&self, ctx: &ScoringContext<'_>) -> Vec<f64> {
        ctx.corpus().texts().map(|t| self.score(t)).collect()
    }
}
