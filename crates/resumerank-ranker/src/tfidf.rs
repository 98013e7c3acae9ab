//! TF-IDF document vectors and pairwise cosine similarity.
//!
//! Weighting follows the usual vectorizer defaults:
//! - tokens are runs of two or more word characters, lower-cased
//! - stop words are dropped before counting
//! - tf = raw count, idf = ln((1 + n) / (1 + df)) + 1
//! - each document vector is L2-normalised, so cosine similarity is a dot product
//!
//! A document with no surviving tokens has a zero vector and similarity 0 to
//! every document, itself included.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

fn token_pattern() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"(?u)\b\w\w+\b").expect("token pattern is valid"))
}

/// Split text into lower-cased vocabulary tokens, skipping stop words.
pub fn tokenize<'a>(text: &'a str, stop_words: &'a HashSet<&'a str>) -> impl Iterator<Item = String> + 'a {
    token_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(move |t| !stop_words.contains(t.as_str()))
}

/// Sparse, L2-normalised TF-IDF vector: `(term_index, weight)` sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

/// TF-IDF representation fit on one corpus.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

impl TfidfModel {
    /// Fit vocabulary and idf on `texts` and vectorise each of them.
    pub fn fit<'t, I>(texts: I, stop_words: &[String]) -> Self
    where
        I: IntoIterator<Item = &'t str>,
    {
        let stop: HashSet<&str> = stop_words.iter().map(String::as_str).collect();

        let counts: Vec<HashMap<String, u32>> = texts
            .into_iter()
            .map(|text| {
                let mut tf: HashMap<String, u32> = HashMap::new();
                for token in tokenize(text, &stop) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        // Sorted vocabulary gives stable term indices across runs.
        let mut doc_freq: BTreeMap<String, u32> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let n = counts.len() as f64;
        let vocabulary: BTreeMap<String, usize> = doc_freq
            .keys()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        let idf: Vec<f64> = doc_freq
            .values()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors = counts
            .iter()
            .map(|tf| {
                let mut v: SparseVector = tf
                    .iter()
                    .map(|(term, &count)| {
                        let idx = vocabulary[term];
                        (idx, count as f64 * idf[idx])
                    })
                    .collect();
                v.sort_unstable_by_key(|&(idx, _)| idx);
                l2_normalise(&mut v);
                v
            })
            .collect();

        debug!(documents = counts.len(), vocabulary = vocabulary.len(), "Fitted TF-IDF model");

        Self { vocabulary, idf, vectors }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&i| self.idf[i])
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    /// Full pairwise cosine similarity matrix.
    pub fn similarity(&self) -> SimilarityMatrix {
        let n = self.vectors.len();
        let mut matrix = SimilarityMatrix::zeros(n);
        for i in 0..n {
            for j in i..n {
                let s = sparse_dot(&self.vectors[i], &self.vectors[j]).clamp(0.0, 1.0);
                matrix.set(i, j, s);
                matrix.set(j, i, s);
            }
        }
        matrix
    }
}

fn l2_normalise(v: &mut SparseVector) {
    let norm = v.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        v.iter_mut().for_each(|(_, w)| *w /= norm);
    }
}

fn sparse_dot(a: &SparseVector, b: &SparseVector) -> f64 {
    let (mut i, mut j, mut dot) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}

/// Square, symmetric document-to-document similarity matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn zeros(n: usize) -> Self {
        Self { n, values: vec![0.0; n * n] }
    }

    /// Build from explicit rows. Returns `None` unless the rows form a square matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|r| r.len() != n) {
            return None;
        }
        Some(Self { n, values: rows.into_iter().flatten().collect() })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.n + j] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumerank_common::Lexicon;

    fn fit(texts: &[&str]) -> TfidfModel {
        TfidfModel::fit(texts.iter().copied(), &Lexicon::default().stop_words)
    }

    #[test]
    fn test_tokenize_drops_stop_words_and_single_chars() {
        let lex = Lexicon::default();
        let stop: HashSet<&str> = lex.stop_words.iter().map(String::as_str).collect();
        let tokens: Vec<String> = tokenize("I built a Rust CLI, with x tests", &stop).collect();
        assert_eq!(tokens, vec!["built", "rust", "cli", "tests"]);
    }

    #[test]
    fn test_smoothed_idf() {
        let model = fit(&["rust python", "rust java"]);
        // df(rust) = 2, n = 2 → ln(3/3) + 1 = 1
        assert!((model.idf("rust").unwrap() - 1.0).abs() < 1e-12);
        // df(java) = 1 → ln(3/2) + 1
        assert!((model.idf("java").unwrap() - (1.5f64.ln() + 1.0)).abs() < 1e-12);
        assert!(model.idf("the").is_none());
    }

    #[test]
    fn test_identical_documents_have_similarity_one() {
        let sim = fit(&["senior rust engineer", "senior rust engineer", "pastry chef"]).similarity();
        assert!((sim.get(0, 1) - 1.0).abs() < 1e-9);
        assert!((sim.get(0, 0) - 1.0).abs() < 1e-9);
        assert!(sim.get(0, 2).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let sim = fit(&["rust tokio axum", "rust serde", "serde json yaml"]).similarity();
        for i in 0..3 {
            for j in 0..3 {
                assert!((sim.get(i, j) - sim.get(j, i)).abs() < 1e-12);
            }
        }
        assert!(sim.get(0, 1) > 0.0 && sim.get(0, 1) < 1.0);
    }

    #[test]
    fn test_stop_word_only_document_is_zero_row() {
        let sim = fit(&["the and of", "rust developer"]).similarity();
        assert_eq!(sim.row(0), &[0.0, 0.0]);
        assert!((sim.get(1, 1) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_vocabulary_corpus() {
        let model = fit(&["a the", "of"]);
        assert_eq!(model.vocabulary_size(), 0);
        assert_eq!(model.similarity(), SimilarityMatrix::zeros(2));
    }

    #[test]
    fn test_empty_corpus() {
        let sim = fit(&[]).similarity();
        assert!(sim.is_empty());
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5]]).is_none());
        let m = SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5, 1.0]]).unwrap();
        assert_eq!(m.row(1), &[0.5, 1.0]);
    }
}
