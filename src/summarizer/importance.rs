//! Standalone sentence importance
//!
//! Scores each sentence on its own lexical signal: the number of
//! content-bearing words (nouns, proper nouns, verbs, adjectives) plus the
//! number of non-stopword words, scaled down when the sentence falls outside
//! the preferred token band.

use crate::nlp::model::LinguisticModel;
use crate::types::{ScoreMap, Sentence, SummarizerConfig};

/// Lexical importance scorer
#[derive(Debug, Clone, Copy)]
pub struct ImportanceScorer<'m> {
    model: &'m LinguisticModel,
    remove_stopwords: bool,
    min_tokens: usize,
    max_tokens: usize,
    length_penalty: f64,
}

impl<'m> ImportanceScorer<'m> {
    pub fn new(model: &'m LinguisticModel) -> Self {
        Self::from_config(model, &SummarizerConfig::default())
    }

    pub fn from_config(model: &'m LinguisticModel, config: &SummarizerConfig) -> Self {
        Self {
            model,
            remove_stopwords: config.remove_stopwords,
            min_tokens: config.min_tokens,
            max_tokens: config.max_tokens,
            length_penalty: config.length_penalty,
        }
    }

    /// Multiplier for a sentence of `token_count` words
    pub fn length_factor(&self, token_count: usize) -> f64 {
        if (self.min_tokens..=self.max_tokens).contains(&token_count) {
            1.0
        } else {
            self.length_penalty
        }
    }

    /// Importance of a single sentence, always `>= 0`
    ///
    /// With stopword removal disabled every word counts as a non-stopword.
    pub fn score(&self, sentence: &Sentence) -> f64 {
        let tokens = sentence.tokens(self.model);
        let content = tokens.iter().filter(|t| t.pos.is_content()).count();
        let informative = tokens
            .iter()
            .filter(|t| !(self.remove_stopwords && t.is_stopword))
            .count();

        (content + informative) as f64 * self.length_factor(tokens.len())
    }

    /// Importance of every sentence, indexed by position
    pub fn score_all(&self, sentences: &[Sentence]) -> ScoreMap {
        ScoreMap::new(sentences.iter().map(|s| self.score(s)).collect())
    }
}
