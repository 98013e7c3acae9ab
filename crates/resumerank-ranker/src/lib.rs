//! resumerank-ranker — Composite resume scoring and ranking engine.
//!
//! Five feature extractors → feature matrix → per-column min-max
//! normalisation → weighted sum → stable descending sort.

pub mod config;
pub mod features;
pub mod matrix;
pub mod normalise;
pub mod pipeline;
pub mod ranking;
pub mod scorer;
pub mod tfidf;
pub mod weights;

pub use config::ScoringConfig;
pub use features::{FeatureExtractor, FeatureKind, ScoringContext};
pub use matrix::{FeatureMatrix, FeatureVector, NormalizedMatrix};
pub use pipeline::{RankingPipeline, RankingReport};
pub use ranking::{RankedEntry, RankedResult};
pub use scorer::ScoredDocument;
pub use tfidf::{SimilarityMatrix, TfidfModel};
pub use weights::WeightTable;
