//! Unit tests for embedding vectors

use bookmatch_domain::value_objects::EmbeddingVector;

#[test]
fn test_magnitude_of_3_4_is_5() {
    let v = EmbeddingVector::new(vec![3.0, 4.0]);
    assert!((v.magnitude() - 5.0).abs() < 1e-9);
}

#[test]
fn test_zero_vector_has_zero_magnitude() {
    let v = EmbeddingVector::new(vec![0.0, 0.0, 0.0]);
    assert_eq!(v.magnitude(), 0.0);
}

#[test]
fn test_dot_product() {
    let a = EmbeddingVector::new(vec![1.0, 2.0, 3.0]);
    let b = EmbeddingVector::new(vec![4.0, 5.0, 6.0]);
    assert_eq!(a.dot(&b), Some(32.0));
}

#[test]
fn test_dot_product_dimension_mismatch() {
    let a = EmbeddingVector::new(vec![1.0, 0.0]);
    let b = EmbeddingVector::new(vec![1.0, 0.0, 0.0]);
    assert_eq!(a.dot(&b), None);
}

#[test]
fn test_serializes_as_plain_array() {
    let v = EmbeddingVector::new(vec![0.5, 0.25]);
    assert_eq!(serde_json::to_string(&v).unwrap(), "[0.5,0.25]");
}
