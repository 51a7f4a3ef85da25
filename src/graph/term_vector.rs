//! Sparse term vectors for sentences
//!
//! Each distinct term of a sentence gets weight `1 + boost * count`, a
//! sentence-local term-frequency boost. Vectors are stored unit-normalized so
//! cosine similarity reduces to a dot product.

use rustc_hash::FxHashMap;

/// A sparse unit vector over terms
#[derive(Debug, Clone, Default)]
pub struct TermVector {
    /// Non-zero dimensions: term -> normalized weight
    pub dimensions: FxHashMap<String, f64>,
    /// L2 norm of the vector before normalization
    pub norm: f64,
}

impl TermVector {
    /// Create a new empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector from a term sequence, weighting each distinct term by
    /// `1 + tf_boost * count`
    pub fn from_terms<'a>(terms: impl IntoIterator<Item = &'a str>, tf_boost: f64) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for term in terms {
            *counts.entry(term.to_string()).or_insert(0) += 1;
        }
        let dimensions = counts
            .into_iter()
            .map(|(term, count)| (term, 1.0 + tf_boost * count as f64))
            .collect();
        Self::from_dimensions(dimensions)
    }

    /// Create from a map of dimensions
    pub fn from_dimensions(mut dimensions: FxHashMap<String, f64>) -> Self {
        let norm = Self::compute_norm(&dimensions);
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        } else {
            dimensions.clear();
        }
        Self { dimensions, norm }
    }

    fn compute_norm(dimensions: &FxHashMap<String, f64>) -> f64 {
        dimensions.values().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Cosine similarity, in [0, 1] for these non-negative vectors
    ///
    /// An empty vector is at maximal distance from everything, so the
    /// similarity is 0.0.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut dot = 0.0;
        for (key, value) in &small.dimensions {
            if let Some(other_value) = large.dimensions.get(key) {
                dot += value * other_value;
            }
        }
        dot.clamp(0.0, 1.0)
    }

    /// `1 - cosine_similarity`
    pub fn cosine_distance(&self, other: &TermVector) -> f64 {
        1.0 - self.cosine_similarity(other)
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_frequency_weights() {
        let v = TermVector::from_terms(["data", "data", "model"], 0.3);
        // data: 1 + 0.3 * 2 = 1.6, model: 1.3
        let expected_norm = (1.6f64 * 1.6 + 1.3 * 1.3).sqrt();
        assert!((v.norm - expected_norm).abs() < 1e-12);
        assert!((v.dimensions["data"] - 1.6 / expected_norm).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_identical() {
        let v1 = TermVector::from_terms(["a", "b", "b"], 0.3);
        let v2 = TermVector::from_terms(["b", "a", "b"], 0.3);

        let sim = v1.cosine_similarity(&v2);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let v1 = TermVector::from_terms(["a"], 0.3);
        let v2 = TermVector::from_terms(["b"], 0.3);

        assert!(v1.cosine_similarity(&v2).abs() < 1e-12);
        assert!((v1.cosine_distance(&v2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_overlap_matches_dense_cosine() {
        let v1 = TermVector::from_terms(["ai", "helps", "doctors"], 0.3);
        let v2 = TermVector::from_terms(["doctors", "optimistic"], 0.3);
        // every weight is 1.3, one shared term out of 3 and 2
        let expected = (1.3 * 1.3) / ((3.0f64 * 1.69).sqrt() * (2.0f64 * 1.69).sqrt());
        assert!((v1.cosine_similarity(&v2) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_vectors_have_zero_similarity() {
        let empty = TermVector::new();
        let other = TermVector::from_terms(["a"], 0.3);

        assert!(empty.is_empty());
        assert_eq!(empty.cosine_similarity(&other), 0.0);
        assert_eq!(empty.cosine_similarity(&TermVector::new()), 0.0);
        assert_eq!(empty.cosine_distance(&TermVector::new()), 1.0);
    }

    #[test]
    fn test_unit_normalization() {
        let mut dims = FxHashMap::default();
        dims.insert("a".to_string(), 3.0);
        dims.insert("b".to_string(), 4.0);

        let v = TermVector::from_dimensions(dims);

        let actual_norm: f64 = v.dimensions.values().map(|x| x * x).sum::<f64>().sqrt();
        assert!((actual_norm - 1.0).abs() < 1e-6);
        assert!((v.norm - 5.0).abs() < 1e-12);
    }
}
