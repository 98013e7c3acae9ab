//! Final ordering of scored documents.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One line of the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub id: String,
    pub score: f64,
}

/// Documents in descending score order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult {
    entries: Vec<RankedEntry>,
}

impl RankedResult {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    /// `[(id, score), ...]` in rank order, the plain wire shape.
    pub fn to_pairs(&self) -> Vec<(String, f64)> {
        self.entries.iter().map(|e| (e.id.clone(), e.score)).collect()
    }

    /// Keep only the first `n` entries; `0` keeps everything.
    pub fn top(mut self, n: usize) -> Self {
        if n > 0 {
            self.entries.truncate(n);
        }
        self
    }
}

impl IntoIterator for RankedResult {
    type Item = RankedEntry;
    type IntoIter = std::vec::IntoIter<RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Sort `(id, score)` pairs by descending score.
///
/// The sort is stable: equal scores keep their input order. Incomparable
/// scores (NaN) are treated as equal.
pub fn rank<I>(scored: I) -> RankedResult
where
    I: IntoIterator<Item = (String, f64)>,
{
    let mut scored: Vec<(String, f64)> = scored.into_iter().collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let entries = scored
        .into_iter()
        .enumerate()
        .map(|(i, (id, score))| RankedEntry { rank: i + 1, id, score })
        .collect();
    RankedResult { entries }
}
