//! Cosine similarity between two embeddings.

use crate::error::{JournalError, Result};

/// Cosine similarity of `a` and `b`: their dot product over the product of
/// their Euclidean norms.
///
/// Fails with [`JournalError::DimensionMismatch`] if the lengths differ, with
/// [`JournalError::NonFiniteEmbedding`] if any component is NaN or infinite,
/// and with [`JournalError::ZeroVector`] if either norm is exactly zero. The
/// result is not clamped, so rounding may put it marginally outside `[-1, 1]`.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(JournalError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let scale_a = max_abs(a)?;
    let scale_b = max_abs(b)?;
    if scale_a == 0.0 || scale_b == 0.0 {
        return Err(JournalError::ZeroVector);
    }

    // Each vector is divided by its largest magnitude so the sums stay finite
    // for any finite input; cosine similarity is scale-invariant.
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (x / scale_a, y / scale_b);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

fn max_abs(v: &[f64]) -> Result<f64> {
    v.iter().try_fold(0.0f64, |max, &x| {
        if x.is_finite() {
            Ok(max.max(x.abs()))
        } else {
            Err(JournalError::NonFiniteEmbedding)
        }
    })
}
