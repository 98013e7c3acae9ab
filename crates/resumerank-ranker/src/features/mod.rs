//! Feature extractors: each maps the whole corpus to one scalar per document.
//!
//! Three extractors look at one document at a time; the similarity and
//! uniqueness extractors need corpus-wide TF-IDF statistics and read them
//! from the shared `ScoringContext`.

pub mod lexical;
pub mod repetition;
pub mod similarity;
pub mod skill;
pub mod uniqueness;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use resumerank_common::TextCorpus;
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::tfidf::{SimilarityMatrix, TfidfModel};

pub use lexical::LexicalStrengthScorer;
pub use repetition::RepetitionPenaltyScorer;
pub use similarity::CorpusSimilarityScorer;
pub use skill::SkillEvidenceScorer;
pub use uniqueness::UniquenessScorer;

/// One column of the feature matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Lexical,
    Repetition,
    SkillEvidence,
    Similarity,
    Uniqueness,
}

impl FeatureKind {
    pub const COUNT: usize = 5;

    /// Fixed column order of every feature vector and matrix.
    pub const ALL: [FeatureKind; Self::COUNT] = [
        FeatureKind::Lexical,
        FeatureKind::Repetition,
        FeatureKind::SkillEvidence,
        FeatureKind::Similarity,
        FeatureKind::Uniqueness,
    ];

    pub fn column(self) -> usize {
        match self {
            FeatureKind::Lexical => 0,
            FeatureKind::Repetition => 1,
            FeatureKind::SkillEvidence => 2,
            FeatureKind::Similarity => 3,
            FeatureKind::Uniqueness => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FeatureKind::Lexical => "lexical",
            FeatureKind::Repetition => "repetition",
            FeatureKind::SkillEvidence => "skill_evidence",
            FeatureKind::Similarity => "similarity",
            FeatureKind::Uniqueness => "uniqueness",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-run view of the corpus handed to every extractor.
///
/// The similarity matrix is built on first use and shared by every
/// extractor that asks for it, including across rayon workers.
pub struct ScoringContext<'a> {
    corpus: &'a TextCorpus,
    stop_words: &'a [String],
    similarity: OnceLock<SimilarityMatrix>,
    fits: AtomicUsize,
}

impl<'a> ScoringContext<'a> {
    pub fn new(corpus: &'a TextCorpus, stop_words: &'a [String]) -> Self {
        Self { corpus, stop_words, similarity: OnceLock::new(), fits: AtomicUsize::new(0) }
    }

    /// Context with a precomputed similarity matrix; no TF-IDF fit happens.
    pub fn with_similarity(corpus: &'a TextCorpus, matrix: SimilarityMatrix) -> Self {
        let similarity = OnceLock::new();
        let _ = similarity.set(matrix);
        Self { corpus, stop_words: &[], similarity, fits: AtomicUsize::new(0) }
    }

    pub fn corpus(&self) -> &'a TextCorpus {
        self.corpus
    }

    /// Number of TF-IDF fits this context has performed (0 or 1).
    pub fn similarity_fits(&self) -> usize {
        self.fits.load(Ordering::Relaxed)
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        self.similarity.get_or_init(|| {
            self.fits.fetch_add(1, Ordering::Relaxed);
            TfidfModel::fit(self.corpus.texts(), self.stop_words).similarity()
        })
    }
}

/// A feature extractor: corpus in, one value per document out (corpus order).
///
/// Implementations must return exactly `ctx.corpus().len()` values and
/// emit a defined default instead of skipping a document.
pub trait FeatureExtractor: Send + Sync {
    fn kind(&self) -> FeatureKind;

    fn compute(&self, ctx: &ScoringContext<'_>) -> Vec<f64>;
}

/// The five extractors in column order, configured from `config`.
pub fn default_extractors(config: &ScoringConfig) -> Vec<Box<dyn FeatureExtractor>> {
    let lexicon = config.lexicon.clone().lowercased();
    vec![
        Box::new(LexicalStrengthScorer::from_lexicon(&lexicon)),
        Box::new(RepetitionPenaltyScorer::new(config.repetition_step)),
        Box::new(SkillEvidenceScorer::new(lexicon.skill_pairs)),
        Box::new(CorpusSimilarityScorer::new(config.include_self_similarity)),
        Box::new(UniquenessScorer::new(config.duplicate_threshold)),
    ]
}
