//! # rapid_summarizer
//!
//! Extractive text summarization over a sentence similarity graph.
//!
//! Given a document and a compression ratio, the summarizer keeps the most
//! salient sentences verbatim and returns them in their original order.
//! Sentences are ranked by a blend of PageRank centrality in a pairwise
//! similarity graph and a standalone lexical importance score.
//!
//! ## Features
//!
//! - **Deterministic**: identical input and configuration give identical output
//! - **Configurable**: every heuristic is a field of [`SummarizerConfig`], also
//!   loadable from a validated JSON [`SummarySpec`](pipeline::spec::SummarySpec)
//! - **Multilingual resources**: stopwords, connectives and abbreviations for
//!   several languages, loaded once per process
//! - **Observable**: stage spans with the `tracing` feature, and
//!   [`PipelineObserver`](pipeline::observer::PipelineObserver) hooks
//!
//! ```rust
//! let text = "AI helps doctors. However, it needs more data. \
//!             The results were promising. Doctors are optimistic.";
//! let summary = rapid_summarizer::summarize(text, 0.5).unwrap();
//! assert!(!summary.is_empty());
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{
    OversizePolicy, PosTag, ScoreMap, SelectedSentence, Sentence, Summary, SummarizerConfig,
    SummaryStats, Token,
};

// Re-export main functionality
pub use graph::{
    csr::CsrGraph,
    similarity::{SimilarityGraphBuilder, SimilarityMatrix},
    term_vector::TermVector,
};
pub use nlp::{
    model::{Language, LinguisticModel},
    normalizer::TextNormalizer,
    segmenter::SentenceSegmenter,
    stopwords::StopwordFilter,
    tokenizer::Tokenizer,
};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::runner::Summarizer;
pub use summarizer::{
    importance::ImportanceScorer, ranker::CentralityRanker, selector::SentenceSelector,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` with the default English configuration.
///
/// `ratio` is the fraction of sentences to keep and must be in `(0, 1]`.
pub fn summarize(text: &str, ratio: f64) -> Result<String> {
    Summarizer::default().summarize(text, ratio)
}
