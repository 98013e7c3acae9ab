//! Feature vectors and the per-corpus feature matrix.

use serde::{Deserialize, Serialize};

use crate::features::FeatureKind;

/// Five feature values for one document, one per `FeatureKind`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub lexical: f64,
    pub repetition: f64,
    pub skill_evidence: f64,
    pub similarity: f64,
    pub uniqueness: f64,
}

impl FeatureVector {
    pub fn from_array(values: [f64; FeatureKind::COUNT]) -> Self {
        let [lexical, repetition, skill_evidence, similarity, uniqueness] = values;
        Self { lexical, repetition, skill_evidence, similarity, uniqueness }
    }

    pub fn as_array(&self) -> [f64; FeatureKind::COUNT] {
        [
            self.lexical,
            self.repetition,
            self.skill_evidence,
            self.similarity,
            self.uniqueness,
        ]
    }

    pub fn get(&self, kind: FeatureKind) -> f64 {
        self.as_array()[kind.column()]
    }
}

/// Raw (pre-normalisation) features, one row per document in corpus order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMatrix {
    rows: Vec<FeatureVector>,
}

impl FeatureMatrix {
    /// Assemble from per-feature columns.
    ///
    /// Every column must have `n_rows` values. A missing column (or a short
    /// one) is filled with 0 so the matrix never has holes.
    pub fn from_columns(n_rows: usize, columns: &[(FeatureKind, Vec<f64>)]) -> Self {
        let mut rows = vec![[0.0; FeatureKind::COUNT]; n_rows];
        for (kind, values) in columns {
            if values.len() != n_rows {
                tracing::warn!(
                    feature = %kind,
                    expected = n_rows,
                    got = values.len(),
                    "Feature column length mismatch; missing cells default to 0"
                );
            }
            for (row, &v) in rows.iter_mut().zip(values) {
                row[kind.column()] = v;
            }
        }
        Self { rows: rows.into_iter().map(FeatureVector::from_array).collect() }
    }

    pub fn from_rows(rows: Vec<FeatureVector>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[FeatureVector] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, kind: FeatureKind) -> Vec<f64> {
        self.rows.iter().map(|r| r.get(kind)).collect()
    }
}

/// Feature matrix with every column rescaled to [0, 1].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedMatrix {
    rows: Vec<FeatureVector>,
}

impl NormalizedMatrix {
    pub(crate) fn new(rows: Vec<FeatureVector>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[FeatureVector] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, kind: FeatureKind) -> Vec<f64> {
        self.rows.iter().map(|r| r.get(kind)).collect()
    }

    /// Multiply every cell by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|r| FeatureVector::from_array(r.as_array().map(|v| v * factor)))
            .collect();
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_columns_places_values() {
        let m = FeatureMatrix::from_columns(
            2,
            &[
                (FeatureKind::Uniqueness, vec![1.0, 0.0]),
                (FeatureKind::Lexical, vec![2.3, 0.6]),
            ],
        );
        assert_eq!(m.rows()[0], FeatureVector { lexical: 2.3, uniqueness: 1.0, ..Default::default() });
        assert_eq!(m.column(FeatureKind::Uniqueness), vec![1.0, 0.0]);
        assert_eq!(m.column(FeatureKind::Repetition), vec![0.0, 0.0]);
    }

    #[test]
    fn test_short_column_defaults_to_zero() {
        let m = FeatureMatrix::from_columns(3, &[(FeatureKind::Lexical, vec![1.0])]);
        assert_eq!(m.len(), 3);
        assert_eq!(m.column(FeatureKind::Lexical), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_array_round_trip_order() {
        let v = FeatureVector::from_array([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(v.get(FeatureKind::SkillEvidence), 3.0);
        assert_eq!(v.similarity, 4.0);
    }
}
