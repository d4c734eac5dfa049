// Unit tests for cosine similarity: reference values, symmetry, and the
// zero-norm and length-mismatch edge cases.

use analogy::embeddings::EmbeddingTable;
use analogy::similarity::{cosine_similarity, difference, dot, l2_norm};
use analogy::AnalogyError;

// ============================================================
// Reference values
// ============================================================

#[test]
fn reference_values() {
    let same = cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]).unwrap();
    let orth = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
    let opp = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).unwrap();
    assert!((same - 1.0).abs() < 1e-10, "got {same}");
    assert!(orth.abs() < 1e-10, "got {orth}");
    assert!((opp + 1.0).abs() < 1e-10, "got {opp}");
}

#[test]
fn forty_five_degrees() {
    let sim = cosine_similarity(&[1.0, 0.0], &[1.0, 1.0]).unwrap();
    assert!((sim - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-10);
}

#[test]
fn symmetric_for_assorted_pairs() {
    let pairs: Vec<(Vec<f64>, Vec<f64>)> = vec![
        (vec![1.0, 3.0, -2.0, 0.5], vec![2.0, -1.0, 4.0, 0.0]),
        (vec![0.418, 0.24968, -0.41242], vec![0.013441, 0.23682, -0.16899]),
        (vec![1e-8, 1e8], vec![-3.0, 7.0]),
        (vec![-1.0, -1.0], vec![-1.0, -1.0]),
    ];
    for (u, v) in &pairs {
        let uv = cosine_similarity(u, v).unwrap();
        let vu = cosine_similarity(v, u).unwrap();
        assert_eq!(uv, vu, "cosine must be symmetric for {u:?} / {v:?}");
    }
}

#[test]
fn always_within_unit_range() {
    // Nearly parallel vectors can round past 1.0 without clamping
    let u = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
    let v: Vec<f64> = u.iter().map(|x| x * 3.000000001).collect();
    let sim = cosine_similarity(&u, &v).unwrap();
    assert!((-1.0..=1.0).contains(&sim), "got {sim}");
}

// ============================================================
// Edge cases
// ============================================================

#[test]
fn zero_vector_from_table_is_undefined() {
    let table = EmbeddingTable::from_entries(vec![
        ("cat", vec![1.0, 0.0]),
        ("void", vec![0.0, 0.0]),
    ])
    .unwrap();
    let err = cosine_similarity(table.get("cat").unwrap(), table.get("void").unwrap()).unwrap_err();
    assert!(matches!(err, AnalogyError::UndefinedSimilarity));
}

#[test]
fn both_zero_is_undefined() {
    let err = cosine_similarity(&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]).unwrap_err();
    assert!(matches!(err, AnalogyError::UndefinedSimilarity));
}

#[test]
fn overflowing_norm_is_undefined_not_nan() {
    let big = [f64::MAX, f64::MAX];
    let result = cosine_similarity(&big, &big);
    assert!(matches!(result, Err(AnalogyError::UndefinedSimilarity)));
}

#[test]
fn length_mismatch_is_reported() {
    let err = cosine_similarity(&[1.0], &[1.0, 0.0]).unwrap_err();
    assert!(matches!(err, AnalogyError::LengthMismatch { left: 1, right: 2 }));
}

// ============================================================
// Helpers
// ============================================================

#[test]
fn helpers_agree_with_hand_computation() {
    assert!((dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]) - 32.0).abs() < f64::EPSILON);
    assert!((l2_norm(&[1.0, 2.0, 2.0]) - 3.0).abs() < f64::EPSILON);
    assert_eq!(difference(&[1.0, 1.0], &[0.5, 2.0]), vec![0.5, -1.0]);
}
