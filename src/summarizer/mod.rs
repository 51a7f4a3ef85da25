//! Summarization components
//!
//! Standalone importance scoring, centrality ranking with score blending,
//! and top-k selection in document order.

pub mod importance;
pub mod ranker;
pub mod selector;
