//! Orchestrator for one ranking run.
//!
//! corpus → extractors → feature matrix → min-max per column → weighted sum → stable sort.
//! Every run builds a fresh `ScoringContext`; nothing is carried between runs.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use resumerank_common::{Result, TextCorpus};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, Span};
use uuid::Uuid;

use crate::config::ScoringConfig;
use crate::features::{default_extractors, FeatureExtractor, FeatureKind, ScoringContext};
use crate::matrix::FeatureMatrix;
use crate::normalise::normalise_matrix;
use crate::ranking::{rank, RankedResult};
use crate::scorer::{aggregate, ScoredDocument};

/// Full outcome of a run: the ranking plus the per-document breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub corpus_size: usize,
    /// Inputs dropped before scoring for lack of text
    pub skipped: usize,
    pub ranking: RankedResult,
    /// Scored documents in corpus order
    pub breakdown: Vec<ScoredDocument>,
}

pub struct RankingPipeline {
    config: ScoringConfig,
    extractors: Vec<Box<dyn FeatureExtractor>>,
}

impl RankingPipeline {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Every term the pipeline matches (stop words included) is held lower-case.
    fn from_valid(config: ScoringConfig) -> Self {
        let config = ScoringConfig { lexicon: config.lexicon.lowercased(), ..config };
        let extractors = default_extractors(&config);
        Self { config, extractors }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Raw feature matrix for `corpus`.
    pub fn extract(&self, corpus: &TextCorpus) -> FeatureMatrix {
        let ctx = ScoringContext::new(corpus, &self.config.lexicon.stop_words);
        self.extract_with(&ctx)
    }

    /// Raw feature matrix from a prepared context (e.g. with an injected
    /// similarity matrix).
    pub fn extract_with(&self, ctx: &ScoringContext<'_>) -> FeatureMatrix {
        let n = ctx.corpus().len();
        if n == 0 {
            return FeatureMatrix::default();
        }

        // Rayon workers do not inherit the caller's span.
        let span = Span::current();
        let run = |e: &Box<dyn FeatureExtractor>| -> (FeatureKind, Vec<f64>) {
            let _entered = span.enter();
            let column = e.compute(ctx);
            debug!(feature = %e.kind(), documents = column.len(), "Feature column computed");
            (e.kind(), column)
        };
        let columns: Vec<(FeatureKind, Vec<f64>)> = if self.config.parallel {
            self.extractors.par_iter().map(run).collect()
        } else {
            self.extractors.iter().map(run).collect()
        };

        FeatureMatrix::from_columns(n, &columns)
    }

    /// Score every document; results stay in corpus order.
    pub fn score(&self, corpus: &TextCorpus) -> Vec<ScoredDocument> {
        let ctx = ScoringContext::new(corpus, &self.config.lexicon.stop_words);
        self.score_with(&ctx)
    }

    pub fn score_with(&self, ctx: &ScoringContext<'_>) -> Vec<ScoredDocument> {
        let raw = self.extract_with(ctx);
        let normed = normalise_matrix(&raw);
        let scores = aggregate(&normed, &self.config.weights);

        ctx.corpus()
            .ids()
            .zip(raw.rows())
            .zip(normed.rows())
            .zip(scores)
            .map(|(((id, raw), normalized), score)| ScoredDocument {
                id: id.to_string(),
                raw: *raw,
                normalized: *normalized,
                score,
            })
            .collect()
    }

    /// Ranked `(id, score)` list, best first.
    pub fn rank(&self, corpus: &TextCorpus) -> RankedResult {
        rank(self.score(corpus).into_iter().map(|d| (d.id, d.score)))
    }

    /// Rank `corpus` and keep the breakdown, tagged with a run id and timestamp.
    pub fn report(&self, corpus: &TextCorpus) -> RankingReport {
        let run_id = Uuid::new_v4();
        let span = info_span!("ranking_run", %run_id);
        let _guard = span.enter();

        info!(documents = corpus.len(), skipped = corpus.skipped(), "Starting ranking run");

        let breakdown = self.score(corpus);
        let ranking = rank(breakdown.iter().map(|d| (d.id.clone(), d.score)));

        if let Some(best) = ranking.entries().first() {
            info!(top = %best.id, score = best.score, "Ranking complete");
        } else {
            info!("Ranking complete: no documents with extractable text");
        }

        RankingReport {
            run_id,
            generated_at: Utc::now(),
            corpus_size: corpus.len(),
            skipped: corpus.skipped(),
            ranking,
            breakdown,
        }
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::from_valid(ScoringConfig::default())
    }
}
