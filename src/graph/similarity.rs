//! Sentence similarity graph
//!
//! Builds a dense, symmetric similarity matrix over sentences. Each pair is
//! compared by cosine similarity of stopword-filtered term vectors; pairs
//! where either sentence contains a discourse connective are multiplied by
//! the connective boost. The diagonal is always zero.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::term_vector::TermVector;
use crate::nlp::model::LinguisticModel;
use crate::types::{Sentence, SummarizerConfig};

/// Square, symmetric, non-negative matrix indexed by sentence position
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// An all-zero `size x size` matrix
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Set both `(i, j)` and `(j, i)`; writes to the diagonal are ignored
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        if i == j {
            return;
        }
        self.values[i * self.size + j] = value;
        self.values[j * self.size + i] = value;
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Whether every entry is zero (an edgeless graph)
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Number of non-zero off-diagonal pairs, each counted once
    pub fn edge_count(&self) -> usize {
        (0..self.size)
            .map(|i| self.row(i)[i + 1..].iter().filter(|&&v| v > 0.0).count())
            .sum()
    }
}

/// Builds [`SimilarityMatrix`] values from sentences
#[derive(Debug, Clone, Copy)]
pub struct SimilarityGraphBuilder<'m> {
    model: &'m LinguisticModel,
    remove_stopwords: bool,
    term_frequency_boost: f64,
    connective_boost: f64,
    clamp: bool,
    parallel_threshold: usize,
}

impl<'m> SimilarityGraphBuilder<'m> {
    /// Create a builder with default settings
    pub fn new(model: &'m LinguisticModel) -> Self {
        Self::from_config(model, &SummarizerConfig::default())
    }

    /// Create a builder from the summarizer configuration
    pub fn from_config(model: &'m LinguisticModel, config: &SummarizerConfig) -> Self {
        Self {
            model,
            remove_stopwords: config.remove_stopwords,
            term_frequency_boost: config.term_frequency_boost,
            connective_boost: config.connective_boost,
            clamp: config.clamp_similarity,
            parallel_threshold: config.parallel_threshold,
        }
    }

    pub fn with_connective_boost(mut self, boost: f64) -> Self {
        self.connective_boost = boost;
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Term vector of a sentence, stopwords dropped unless disabled
    pub fn term_vector(&self, sentence: &Sentence) -> TermVector {
        let terms = sentence
            .tokens(self.model)
            .iter()
            .filter(|t| !(self.remove_stopwords && t.is_stopword))
            .map(|t| t.norm.as_str());
        TermVector::from_terms(terms, self.term_frequency_boost)
    }

    /// Whether any word of the sentence is a connective
    pub fn has_connective(&self, sentence: &Sentence) -> bool {
        sentence
            .tokens(self.model)
            .iter()
            .any(|t| self.model.is_connective(&t.norm))
    }

    /// Similarity of two vectors, with the connective boost and clamping applied
    pub fn pair_similarity(&self, a: &TermVector, b: &TermVector, connective: bool) -> f64 {
        let mut sim = a.cosine_similarity(b);
        if connective {
            sim *= self.connective_boost;
        }
        if self.clamp {
            sim = sim.min(1.0);
        }
        sim
    }

    /// Build the similarity matrix for `sentences`
    pub fn build(&self, sentences: &[Sentence]) -> SimilarityMatrix {
        let n = sentences.len();
        let vectors: Vec<TermVector> = sentences.iter().map(|s| self.term_vector(s)).collect();
        let connective: Vec<bool> = sentences.iter().map(|s| self.has_connective(s)).collect();

        let upper_row = |i: usize| -> Vec<f64> {
            ((i + 1)..n)
                .map(|j| {
                    self.pair_similarity(&vectors[i], &vectors[j], connective[i] || connective[j])
                })
                .collect()
        };

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<f64>> = if n >= self.parallel_threshold {
            (0..n).into_par_iter().map(upper_row).collect()
        } else {
            (0..n).map(upper_row).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<f64>> = (0..n).map(upper_row).collect();

        let mut matrix = SimilarityMatrix::zeros(n);
        for (i, row) in rows.into_iter().enumerate() {
            for (offset, value) in row.into_iter().enumerate() {
                matrix.set_symmetric(i, i + 1 + offset, value);
            }
        }
        matrix
    }
}
