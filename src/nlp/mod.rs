//! Natural Language Processing components
//!
//! This module provides normalization, sentence segmentation, tokenization,
//! tagging and stopword filtering, plus the shared linguistic model tying the
//! language resources together.

pub mod locale;
pub mod model;
pub mod normalizer;
pub mod segmenter;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
