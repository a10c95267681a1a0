//! Fuzzy-set combinators for weight distributions

use ndarray::Array2;
use num_traits::Float;

/// Fuzzy AND of two distributions as a relation table
///
/// Entry `[i, j]` is `min(rows[i], cols[j])`.
pub fn min_relation<T: Float>(rows: &[T], cols: &[T]) -> Array2<T> {
    Array2::from_shape_fn((rows.len(), cols.len()), |(i, j)| {
        match (rows.get(i), cols.get(j)) {
            (Some(&a), Some(&b)) => a.min(b),
            _ => T::zero(),
        }
    })
}

/// Index of the largest value, keeping the first index on ties
///
/// A later value replaces the current best only when strictly greater, so
/// `NaN` entries never win. Returns `None` for an empty input.
pub fn first_argmax<T: Float>(values: impl IntoIterator<Item = T>) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (index, value) in values.into_iter().enumerate() {
        if best.is_none_or(|(_, current)| current < value) {
            best = Some((index, value));
        }
    }
    best.map(|(index, _)| index)
}
