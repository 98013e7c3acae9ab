//! resumerank-common — Shared document model, vocabularies, and errors used across resumerank crates.

pub mod error;
pub mod document;
pub mod lexicon;

// Re-export commonly used types
pub use document::{Document, RawDocument, TextCorpus};
pub use error::{RankError, Result};
pub use lexicon::{Lexicon, SkillPair};
