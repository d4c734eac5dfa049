// Cosine similarity between word vectors.
//
//   cos(u, v) = u·v / (‖u‖₂ ‖v‖₂)
//
// Unlike a topic-overlap score this keeps the full [-1, 1] range: opposite
// directions matter when comparing embedding differences. A zero-norm input
// has no direction and is reported as an error instead of yielding NaN.

use crate::error::{AnalogyError, Result};

/// Dot product of two equal-length slices.
pub fn dot(u: &[f64], v: &[f64]) -> f64 {
    u.iter().zip(v.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean (L2) norm.
pub fn l2_norm(u: &[f64]) -> f64 {
    u.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Elementwise `u - v`. Callers are expected to pass equal lengths.
pub fn difference(u: &[f64], v: &[f64]) -> Vec<f64> {
    u.iter().zip(v.iter()).map(|(x, y)| x - y).collect()
}

/// Cosine similarity between `u` and `v`.
///
/// Returns a value in [-1.0, 1.0]. Fails with `LengthMismatch` when the
/// slices differ in length and `UndefinedSimilarity` when either has zero
/// norm (or the norms overflow).
pub fn cosine_similarity(u: &[f64], v: &[f64]) -> Result<f64> {
    if u.len() != v.len() {
        return Err(AnalogyError::LengthMismatch {
            left: u.len(),
            right: v.len(),
        });
    }

    let denom = l2_norm(u) * l2_norm(v);
    if denom == 0.0 || !denom.is_finite() {
        return Err(AnalogyError::UndefinedSimilarity);
    }

    let sim = dot(u, v) / denom;
    if sim.is_nan() {
        return Err(AnalogyError::UndefinedSimilarity);
    }
    Ok(sim.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        let sim = cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]).unwrap();
        assert!((sim - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_orthogonal() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(sim.abs() < 1e-10);
    }

    #[test]
    fn test_opposite_is_negative_one() {
        let sim = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).unwrap();
        assert!((sim + 1.0).abs() < 1e-10, "got {sim}");
    }

    #[test]
    fn test_magnitude_does_not_matter() {
        let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert!((sim - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_vector_is_undefined() {
        let err = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, AnalogyError::UndefinedSimilarity));
        let err = cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, AnalogyError::UndefinedSimilarity));
    }

    #[test]
    fn test_empty_is_undefined() {
        let err = cosine_similarity(&[], &[]).unwrap_err();
        assert!(matches!(err, AnalogyError::UndefinedSimilarity));
    }

    #[test]
    fn test_length_mismatch() {
        let err = cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            AnalogyError::LengthMismatch { left: 2, right: 3 }
        ));
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&[3.0, 1.0], &[1.0, 1.0]), vec![2.0, 0.0]);
    }

    #[test]
    fn test_norm() {
        assert!((l2_norm(&[3.0, 4.0]) - 5.0).abs() < f64::EPSILON);
    }
}
