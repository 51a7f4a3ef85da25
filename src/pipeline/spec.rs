//! Summarizer specification types.
//!
//! A [`SummarySpec`] is the versioned JSON form of
//! [`SummarizerConfig`]: every field is optional and falls back to the
//! config default. Specs are checked by the
//! [`super::validation::ValidationEngine`] before they are turned into a
//! config.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "language": "en",
//!   "segmenter": { "min_chars": 10 },
//!   "scoring": { "remove_stopwords": true, "min_tokens": 5, "max_tokens": 25, "length_penalty": 0.7 },
//!   "graph": { "term_frequency_boost": 0.3, "connective_boost": 1.2, "clamp_similarity": true },
//!   "rank": { "damping": 0.85, "max_iterations": 100, "convergence_threshold": 1e-6,
//!             "centrality_weight": 0.7, "importance_weight": 0.3, "normalize_scores": true },
//!   "runtime": { "max_sentences": 1000, "oversize_policy": "reject", "parallel_threshold": 256 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::nlp::model::Language;
use crate::types::{OversizePolicy, SummarizerConfig};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Top-level summarizer specification (v1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Language code or English name (e.g. `"en"`, `"turkish"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub segmenter: SegmenterSpec,

    #[serde(default)]
    pub scoring: ScoringSpec,

    #[serde(default)]
    pub graph: GraphSpec,

    #[serde(default)]
    pub rank: RankSpec,

    /// Runtime execution limits.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Sentence segmentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmenterSpec {
    /// Sentences must be longer than this many characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_chars: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Standalone importance settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_stopwords: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_tokens: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_penalty: Option<f64>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Similarity graph settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_frequency_boost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connective_boost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clamp_similarity: Option<bool>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// PageRank and blending settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convergence_threshold: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centrality_weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance_weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalize_scores: Option<bool>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum number of qualifying sentences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sentences: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oversize_policy: Option<OversizePolicy>,

    /// Sentence count at which similarity rows are computed in parallel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_threshold: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl SummarySpec {
    /// Parse a spec from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The parsed language, or `None` when it is set but unsupported.
    pub fn language(&self) -> Option<Language> {
        match &self.language {
            Some(value) => Language::parse(value),
            None => Some(Language::default()),
        }
    }

    /// Overlay the spec onto the default configuration.
    ///
    /// Does not validate; an unsupported language falls back to the default.
    pub fn to_config(&self) -> SummarizerConfig {
        let mut cfg = SummarizerConfig::default();
        cfg.language = self.language().unwrap_or_default();

        if let Some(v) = self.segmenter.min_chars {
            cfg.min_sentence_chars = v;
        }

        let scoring = &self.scoring;
        if let Some(v) = scoring.remove_stopwords {
            cfg.remove_stopwords = v;
        }
        if let Some(v) = scoring.min_tokens {
            cfg.min_tokens = v;
        }
        if let Some(v) = scoring.max_tokens {
            cfg.max_tokens = v;
        }
        if let Some(v) = scoring.length_penalty {
            cfg.length_penalty = v;
        }

        let graph = &self.graph;
        if let Some(v) = graph.term_frequency_boost {
            cfg.term_frequency_boost = v;
        }
        if let Some(v) = graph.connective_boost {
            cfg.connective_boost = v;
        }
        if let Some(v) = graph.clamp_similarity {
            cfg.clamp_similarity = v;
        }

        let rank = &self.rank;
        if let Some(v) = rank.damping {
            cfg.damping = v;
        }
        if let Some(v) = rank.max_iterations {
            cfg.max_iterations = v;
        }
        if let Some(v) = rank.convergence_threshold {
            cfg.convergence_threshold = v;
        }
        if let Some(v) = rank.centrality_weight {
            cfg.centrality_weight = v;
        }
        if let Some(v) = rank.importance_weight {
            cfg.importance_weight = v;
        }
        if let Some(v) = rank.normalize_scores {
            cfg.normalize_scores = v;
        }

        let runtime = &self.runtime;
        if runtime.max_sentences.is_some() {
            cfg.max_sentences = runtime.max_sentences;
        }
        if let Some(v) = runtime.oversize_policy {
            cfg.oversize_policy = v;
        }
        if let Some(v) = runtime.parallel_threshold {
            cfg.parallel_threshold = v;
        }

        cfg
    }
}

impl From<&SummarizerConfig> for SummarySpec {
    fn from(cfg: &SummarizerConfig) -> Self {
        Self {
            v: SPEC_VERSION,
            language: Some(cfg.language.code().to_string()),
            segmenter: SegmenterSpec {
                min_chars: Some(cfg.min_sentence_chars),
                ..Default::default()
            },
            scoring: ScoringSpec {
                remove_stopwords: Some(cfg.remove_stopwords),
                min_tokens: Some(cfg.min_tokens),
                max_tokens: Some(cfg.max_tokens),
                length_penalty: Some(cfg.length_penalty),
                ..Default::default()
            },
            graph: GraphSpec {
                term_frequency_boost: Some(cfg.term_frequency_boost),
                connective_boost: Some(cfg.connective_boost),
                clamp_similarity: Some(cfg.clamp_similarity),
                ..Default::default()
            },
            rank: RankSpec {
                damping: Some(cfg.damping),
                max_iterations: Some(cfg.max_iterations),
                convergence_threshold: Some(cfg.convergence_threshold),
                centrality_weight: Some(cfg.centrality_weight),
                importance_weight: Some(cfg.importance_weight),
                normalize_scores: Some(cfg.normalize_scores),
                ..Default::default()
            },
            runtime: RuntimeSpec {
                max_sentences: cfg.max_sentences,
                oversize_policy: Some(cfg.oversize_policy),
                parallel_threshold: Some(cfg.parallel_threshold),
                ..Default::default()
            },
            strict: true,
            unknown_fields: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec = SummarySpec::from_json(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(spec.v, 1);
        assert!(spec.language.is_none());
        assert!(spec.rank.damping.is_none());
        assert!(!spec.strict);
        assert_eq!(spec.to_config(), SummarizerConfig::default());
    }

    #[test]
    fn test_deserialize_full_spec() {
        let json = r#"{
            "v": 1,
            "language": "turkish",
            "segmenter": { "min_chars": 20 },
            "scoring": { "remove_stopwords": false, "min_tokens": 3, "max_tokens": 30, "length_penalty": 0.5 },
            "graph": { "term_frequency_boost": 0.1, "connective_boost": 1.5, "clamp_similarity": false },
            "rank": { "damping": 0.9, "max_iterations": 50, "convergence_threshold": 1e-4,
                      "centrality_weight": 0.6, "importance_weight": 0.4, "normalize_scores": false },
            "runtime": { "max_sentences": 100, "oversize_policy": "truncate", "parallel_threshold": 64 },
            "strict": true
        }"#;
        let cfg = SummarySpec::from_json(json).unwrap().to_config();

        assert_eq!(cfg.language, Language::Turkish);
        assert_eq!(cfg.min_sentence_chars, 20);
        assert!(!cfg.remove_stopwords);
        assert_eq!((cfg.min_tokens, cfg.max_tokens), (3, 30));
        assert_eq!(cfg.length_penalty, 0.5);
        assert_eq!(cfg.connective_boost, 1.5);
        assert!(!cfg.clamp_similarity);
        assert_eq!(cfg.damping, 0.9);
        assert_eq!(cfg.max_iterations, 50);
        assert_eq!(cfg.centrality_weight, 0.6);
        assert!(!cfg.normalize_scores);
        assert_eq!(cfg.max_sentences, Some(100));
        assert_eq!(cfg.oversize_policy, OversizePolicy::Truncate);
        assert_eq!(cfg.parallel_threshold, 64);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{
            "v": 1,
            "bogus_top_level": 42,
            "rank": { "damping": 0.85, "bogus_rank": "xyz" },
            "runtime": { "max_nodes": 10 }
        }"#;
        let spec = SummarySpec::from_json(json).unwrap();
        assert!(spec.unknown_fields.contains_key("bogus_top_level"));
        assert!(spec.rank.unknown_fields.contains_key("bogus_rank"));
        assert!(spec.runtime.unknown_fields.contains_key("max_nodes"));
    }

    #[test]
    fn test_unsupported_language() {
        let spec = SummarySpec::from_json(r#"{ "v": 1, "language": "klingon" }"#).unwrap();
        assert_eq!(spec.language(), None);
        assert_eq!(spec.to_config().language, Language::English);
    }

    #[test]
    fn test_from_config_roundtrip() {
        let cfg = SummarizerConfig::default()
            .with_language(Language::German)
            .with_damping(0.8)
            .with_max_sentences(Some(42));
        let spec = SummarySpec::from(&cfg);
        assert_eq!(spec.language.as_deref(), Some("de"));
        assert_eq!(spec.to_config(), cfg);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SummarySpec::from_json(r#"{ "v": "one" }"#).unwrap_err();
        assert!(matches!(err, crate::errors::SummarizerError::SpecParse(_)));
    }
}
