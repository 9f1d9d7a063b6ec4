//! Elementary vector operations over `f64` slices.
//!
//! Typically fed with [`crate::types::DataSet::numeric_values`], e.g. two price columns.

use crate::error::{StatsError, StatsResult};

/// Absolute tolerance on the dot product used by [`is_orthogonal`].
pub const ORTHOGONALITY_TOLERANCE: f64 = 1e-9;

/// Inner product of `a` and `b`.
pub fn dot(a: &[f64], b: &[f64]) -> StatsResult<f64> {
    check_pair(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean length. `0.0` for a zero (or empty) vector.
pub fn norm(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Angle between `a` and `b`, in radians (`0..=π`).
///
/// Fails with [`StatsError::DegenerateVector`] when either vector has zero length.
pub fn angle(a: &[f64], b: &[f64]) -> StatsResult<f64> {
    let d = dot(a, b)?;
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        return Err(StatsError::DegenerateVector);
    }
    // Rounding can push the cosine just outside [-1, 1].
    Ok((d / denom).clamp(-1.0, 1.0).acos())
}

/// Whether `dot(a, b)` is within [`ORTHOGONALITY_TOLERANCE`] of zero.
pub fn is_orthogonal(a: &[f64], b: &[f64]) -> StatsResult<bool> {
    Ok(dot(a, b)?.abs() <= ORTHOGONALITY_TOLERANCE)
}

fn check_pair(a: &[f64], b: &[f64]) -> StatsResult<()> {
    if a.len() != b.len() {
        return Err(StatsError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(StatsError::EmptyInput {
            context: "vectors have no components".to_string(),
        });
    }
    Ok(())
}
