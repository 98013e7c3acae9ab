//! Score normalisation functions.
//! Min-max per feature column, fit on the corpus being scored.

use crate::features::FeatureKind;
use crate::matrix::{FeatureMatrix, FeatureVector, NormalizedMatrix};

/// Spread below which a column counts as constant.
const DEGENERATE_SPREAD: f64 = 1e-12;

/// Min-max normalisation within a given range [min_val, max_val].
/// A degenerate range maps everything to 0.
pub fn minmax_normalise(value: f64, min_val: f64, max_val: f64) -> f64 {
    if (max_val - min_val).abs() < DEGENERATE_SPREAD {
        return 0.0;
    }
    ((value - min_val) / (max_val - min_val)).clamp(0.0, 1.0)
}

/// Rescale one column so its minimum maps to 0 and its maximum to 1.
/// A constant column (all documents tie) becomes all zeros.
pub fn normalise_column(values: &[f64]) -> Vec<f64> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    values.iter().map(|&v| minmax_normalise(v, min, max)).collect()
}

/// Normalise every column of the matrix independently.
pub fn normalise_matrix(matrix: &FeatureMatrix) -> NormalizedMatrix {
    let mut rows = vec![[0.0; FeatureKind::COUNT]; matrix.len()];
    for kind in FeatureKind::ALL {
        let column = normalise_column(&matrix.column(kind));
        for (row, v) in rows.iter_mut().zip(column) {
            row[kind.column()] = v;
        }
    }
    NormalizedMatrix::new(rows.into_iter().map(FeatureVector::from_array).collect())
}
