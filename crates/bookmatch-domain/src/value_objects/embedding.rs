//! Semantic Embedding Value Objects
//!
//! Value objects representing content embeddings of catalog items and the
//! taste profiles derived from them.

use serde::{Deserialize, Serialize};

/// Value Object: Content Embedding
///
/// Fixed-length vector describing an item's semantic content. The
/// dimensionality is fixed per deployment by the embedding model; a user
/// profile has the same dimensionality as the item vectors it averages.
///
/// ## Example
///
/// ```rust
/// use bookmatch_domain::value_objects::EmbeddingVector;
///
/// let v = EmbeddingVector::new(vec![3.0, 4.0]);
/// assert_eq!(v.dimensions(), 2);
/// assert!((v.magnitude() - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct EmbeddingVector(Vec<f32>);

impl EmbeddingVector {
    /// Wrap raw vector values
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// Number of coordinates
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// True when the vector has no coordinates
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the coordinates
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Consume into the raw coordinates
    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    /// Euclidean norm, accumulated in `f64`
    pub fn magnitude(&self) -> f64 {
        self.0
            .iter()
            .map(|x| f64::from(*x) * f64::from(*x))
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product with another vector of the same dimensionality
    ///
    /// Returns `None` when dimensions differ.
    pub fn dot(&self, other: &Self) -> Option<f64> {
        if self.dimensions() != other.dimensions() {
            return None;
        }
        Some(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(a, b)| f64::from(*a) * f64::from(*b))
                .sum(),
        )
    }
}

impl From<Vec<f32>> for EmbeddingVector {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}
