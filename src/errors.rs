//! Error types
//!
//! The summarizer is a pure computation, so the taxonomy is narrow: caller
//! contract violations, size guards, and configuration problems. Degenerate
//! inputs (no qualifying sentences, an edgeless graph) are handled where they
//! occur and never show up here.

use thiserror::Error;

use crate::pipeline::errors::SpecError;

/// Errors returned by the summarizer
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// Compression ratio outside `(0, 1]`
    #[error("compression ratio must be in (0, 1], got {ratio}")]
    InvalidRatio { ratio: f64 },

    /// The document has more qualifying sentences than the configured limit
    #[error("document has {sentences} sentences, exceeding the limit of {limit}")]
    DocumentTooLarge { sentences: usize, limit: usize },

    /// The configuration failed validation
    #[error("invalid summarizer configuration: {}", join_messages(.0))]
    InvalidSpec(Vec<SpecError>),

    /// The JSON spec could not be parsed
    #[error("failed to parse summarizer spec: {0}")]
    SpecParse(#[from] serde_json::Error),
}

fn join_messages(errors: &[SpecError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SummarizerError>;
