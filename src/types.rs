//! Core data types shared across the summarizer

use std::cell::OnceCell;

use serde::{Deserialize, Serialize};

use crate::nlp::model::{Language, LinguisticModel};

/// Coarse part-of-speech classes produced by the tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
    Other,
}

impl PosTag {
    /// Whether this tag marks a content-bearing word (noun, verb or adjective)
    pub fn is_content(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::ProperNoun | PosTag::Verb | PosTag::Adjective
        )
    }
}

/// A word token inside a sentence
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface form as it appears in the text
    pub text: String,
    /// Lowercased form used for matching
    pub norm: String,
    /// Part-of-speech class
    pub pos: PosTag,
    /// Byte offset of the token start within its sentence
    pub start: usize,
    /// Byte offset of the token end within its sentence
    pub end: usize,
    /// Whether the normalized form is in the stopword set
    pub is_stopword: bool,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        norm: impl Into<String>,
        pos: PosTag,
        start: usize,
        end: usize,
        is_stopword: bool,
    ) -> Self {
        Self {
            text: text.into(),
            norm: norm.into(),
            pos,
            start,
            end,
            is_stopword,
        }
    }
}

/// A retained sentence of the document
///
/// `index` is the position in the filtered sentence sequence, not the raw
/// split index. Tokens are derived on first use and cached.
#[derive(Debug, Clone)]
pub struct Sentence {
    /// Sentence text, trimmed
    pub text: String,
    /// Zero-based position among retained sentences
    pub index: usize,
    /// Byte offset of the sentence start in the normalized text
    pub start: usize,
    /// Byte offset of the sentence end in the normalized text
    pub end: usize,
    tokens: OnceCell<Vec<Token>>,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            index,
            start,
            end,
            tokens: OnceCell::new(),
        }
    }

    /// Analyzed tokens, computed with `model` on first access
    pub fn tokens(&self, model: &LinguisticModel) -> &[Token] {
        self.tokens.get_or_init(|| model.analyze(&self.text))
    }

    /// Number of characters (not bytes) in the sentence
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Per-sentence scores indexed by sentence position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreMap {
    pub scores: Vec<f64>,
}

impl ScoreMap {
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Score for a sentence, 0.0 when out of range
    pub fn get(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.scores.iter().sum()
    }

    pub fn max(&self) -> f64 {
        self.scores.iter().copied().fold(0.0, f64::max)
    }

    /// Divide every score by the maximum so the largest becomes 1.0
    ///
    /// All-zero maps are returned unchanged.
    pub fn normalized_by_max(&self) -> ScoreMap {
        let max = self.max();
        if max > 0.0 {
            ScoreMap::new(self.scores.iter().map(|s| s / max).collect())
        } else {
            self.clone()
        }
    }

    /// Indices sorted by descending score, ties broken by ascending index
    pub fn ranked_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.scores.len()).collect();
        indices.sort_by(|&a, &b| {
            self.scores[b]
                .total_cmp(&self.scores[a])
                .then_with(|| a.cmp(&b))
        });
        indices
    }
}

/// What to do when a document exceeds `max_sentences`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OversizePolicy {
    /// Fail with [`crate::SummarizerError::DocumentTooLarge`]
    #[default]
    Reject,
    /// Keep only the first `max_sentences` sentences
    Truncate,
}

/// Tunable heuristics of the summarizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Language of the linguistic resources (stopwords, connectives, tagger)
    pub language: Language,
    /// Sentences must be strictly longer than this many characters
    pub min_sentence_chars: usize,
    /// Drop stopwords before scoring and similarity
    pub remove_stopwords: bool,
    /// Lower bound (inclusive) of the unpenalized token band
    pub min_tokens: usize,
    /// Upper bound (inclusive) of the unpenalized token band
    pub max_tokens: usize,
    /// Importance multiplier for sentences outside the token band
    pub length_penalty: f64,
    /// Per-occurrence boost in the similarity vectors (`1 + boost * count`)
    pub term_frequency_boost: f64,
    /// Similarity multiplier for pairs involving a connective sentence
    pub connective_boost: f64,
    /// Clamp boosted similarities to 1.0
    pub clamp_similarity: bool,
    /// PageRank damping factor
    pub damping: f64,
    /// PageRank iteration cap
    pub max_iterations: usize,
    /// PageRank L1 convergence threshold
    pub convergence_threshold: f64,
    /// Blend weight of graph centrality
    pub centrality_weight: f64,
    /// Blend weight of standalone importance
    pub importance_weight: f64,
    /// Scale both score maps to [0, 1] before blending
    pub normalize_scores: bool,
    /// Maximum number of qualifying sentences processed per call
    ///
    /// The similarity matrix is dense, so a document of `N` sentences holds
    /// `8 * N * N` bytes of scores (8 MB at the default of 1000).
    pub max_sentences: Option<usize>,
    /// Behavior when `max_sentences` is exceeded
    pub oversize_policy: OversizePolicy,
    /// Documents with at least this many sentences build the similarity
    /// matrix in parallel (requires the `parallel` feature)
    pub parallel_threshold: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            min_sentence_chars: 10,
            remove_stopwords: true,
            min_tokens: 5,
            max_tokens: 25,
            length_penalty: 0.7,
            term_frequency_boost: 0.3,
            connective_boost: 1.2,
            clamp_similarity: true,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            centrality_weight: 0.7,
            importance_weight: 0.3,
            normalize_scores: true,
            max_sentences: Some(1000),
            oversize_policy: OversizePolicy::Reject,
            parallel_threshold: 256,
        }
    }
}

impl SummarizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_min_sentence_chars(mut self, chars: usize) -> Self {
        self.min_sentence_chars = chars;
        self
    }

    pub fn with_remove_stopwords(mut self, remove: bool) -> Self {
        self.remove_stopwords = remove;
        self
    }

    pub fn with_token_band(mut self, min_tokens: usize, max_tokens: usize) -> Self {
        self.min_tokens = min_tokens;
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_length_penalty(mut self, penalty: f64) -> Self {
        self.length_penalty = penalty;
        self
    }

    pub fn with_term_frequency_boost(mut self, boost: f64) -> Self {
        self.term_frequency_boost = boost;
        self
    }

    pub fn with_connective_boost(mut self, boost: f64) -> Self {
        self.connective_boost = boost;
        self
    }

    pub fn with_clamp_similarity(mut self, clamp: bool) -> Self {
        self.clamp_similarity = clamp;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Set the centrality / importance blend weights
    pub fn with_blend_weights(mut self, centrality: f64, importance: f64) -> Self {
        self.centrality_weight = centrality;
        self.importance_weight = importance;
        self
    }

    pub fn with_normalize_scores(mut self, normalize: bool) -> Self {
        self.normalize_scores = normalize;
        self
    }

    pub fn with_max_sentences(mut self, max_sentences: Option<usize>) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    pub fn with_oversize_policy(mut self, policy: OversizePolicy) -> Self {
        self.oversize_policy = policy;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    /// Position among retained sentences
    pub index: usize,
    pub text: String,
    /// Blended score the sentence was ranked by
    pub score: f64,
}

/// Length statistics of a summary relative to its source
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Whitespace-delimited words in the raw document
    pub original_words: usize,
    /// Whitespace-delimited words in the summary
    pub summary_words: usize,
    /// Qualifying sentences found in the document
    pub original_sentences: usize,
    /// Sentences kept in the summary
    pub summary_sentences: usize,
    /// `1 - summary_words / original_words`, 0.0 for empty documents
    pub compression: f64,
}

impl SummaryStats {
    pub fn compute(
        original: &str,
        summary: &str,
        original_sentences: usize,
        summary_sentences: usize,
    ) -> Self {
        let original_words = original.split_whitespace().count();
        let summary_words = summary.split_whitespace().count();
        let compression = if original_words > 0 {
            1.0 - summary_words as f64 / original_words as f64
        } else {
            0.0
        };
        Self {
            original_words,
            summary_words,
            original_sentences,
            summary_sentences,
            compression,
        }
    }
}

/// Full result of a summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined with single spaces
    pub text: String,
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    pub stats: SummaryStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_tags() {
        assert!(PosTag::Noun.is_content());
        assert!(PosTag::ProperNoun.is_content());
        assert!(PosTag::Verb.is_content());
        assert!(PosTag::Adjective.is_content());
        assert!(!PosTag::Determiner.is_content());
        assert!(!PosTag::Adverb.is_content());
    }

    #[test]
    fn test_ranked_indices_tie_break_by_position() {
        let map = ScoreMap::new(vec![0.5, 0.9, 0.5, 0.1]);
        assert_eq!(map.ranked_indices(), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_normalized_by_max() {
        let map = ScoreMap::new(vec![2.0, 4.0, 1.0]);
        let norm = map.normalized_by_max();
        assert_eq!(norm.scores, vec![0.5, 1.0, 0.25]);

        let zeros = ScoreMap::new(vec![0.0, 0.0]);
        assert_eq!(zeros.normalized_by_max(), zeros);
    }

    #[test]
    fn test_score_map_get_out_of_range() {
        let map = ScoreMap::new(vec![0.3]);
        assert_eq!(map.get(0), 0.3);
        assert_eq!(map.get(5), 0.0);
    }

    #[test]
    fn test_config_defaults() {
        let cfg = SummarizerConfig::default();
        assert_eq!(cfg.min_sentence_chars, 10);
        assert_eq!((cfg.min_tokens, cfg.max_tokens), (5, 25));
        assert!((cfg.connective_boost - 1.2).abs() < 1e-12);
        assert!((cfg.centrality_weight + cfg.importance_weight - 1.0).abs() < 1e-12);
        assert_eq!(cfg.oversize_policy, OversizePolicy::Reject);
        assert_eq!(cfg.max_sentences, Some(1000));
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let cfg: SummarizerConfig =
            serde_json::from_str(r#"{ "damping": 0.9, "language": "tr" }"#).unwrap();
        assert!((cfg.damping - 0.9).abs() < 1e-12);
        assert_eq!(cfg.language, Language::Turkish);
        assert_eq!(cfg.max_iterations, 100);
    }

    #[test]
    fn test_stats_compression() {
        let stats = SummaryStats::compute("one two three four", "one two", 4, 2);
        assert_eq!(stats.original_words, 4);
        assert_eq!(stats.summary_words, 2);
        assert!((stats.compression - 0.5).abs() < 1e-12);

        let empty = SummaryStats::compute("", "", 0, 0);
        assert_eq!(empty.compression, 0.0);
    }
}
