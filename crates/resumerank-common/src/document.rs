//! Document model for a single scoring run.
//!
//! Text arrives from an external extraction step (PDF → plain text) as
//! `RawDocument`s. Inputs with missing, empty, or whitespace-only text are
//! dropped when the `TextCorpus` is built; nothing downstream ever sees them.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A document as handed over by the text extraction step.
/// `text` is `None` when extraction produced nothing at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, text: Option<String>) -> Self {
        Self { id: id.into(), text }
    }
}

/// One scorable document: an identifier (usually the source filename)
/// and its extracted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

/// Ordered collection of documents for one scoring run.
///
/// Order matters only as the tie-break for equal scores.
#[derive(Debug, Clone, Default)]
pub struct TextCorpus {
    documents: Vec<Document>,
    skipped: usize,
}

impl TextCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from raw extraction output, skipping documents with
    /// no usable text.
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = RawDocument>,
    {
        let mut corpus = Self::new();
        for doc in raw {
            match doc.text {
                Some(text) => corpus.push(Document::new(doc.id, text)),
                None => {
                    debug!(id = %doc.id, "Skipping document with missing text");
                    corpus.skipped += 1;
                }
            }
        }
        if corpus.skipped > 0 {
            warn!(
                skipped = corpus.skipped,
                kept = corpus.len(),
                "Documents without extractable text were excluded from the corpus"
            );
        }
        corpus
    }

    /// Build a corpus from `(id, text)` pairs, skipping blank texts.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_raw(
            pairs
                .into_iter()
                .map(|(id, text)| RawDocument::new(id, Some(text.into()))),
        )
    }

    /// Append a document. Blank text counts as skipped.
    pub fn push(&mut self, doc: Document) {
        if doc.text.trim().is_empty() {
            debug!(id = %doc.id, "Skipping document with blank text");
            self.skipped += 1;
            return;
        }
        self.documents.push(doc);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of inputs rejected while building this corpus.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.documents.iter().map(|d| d.id.as_str())
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.documents.iter().map(|d| d.text.as_str())
    }
}

impl<'a> IntoIterator for &'a TextCorpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

impl FromIterator<Document> for TextCorpus {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        let mut corpus = Self::new();
        for doc in iter {
            corpus.push(doc);
        }
        corpus
    }
}
