//! Graph construction and representation
//!
//! This module provides sentence term vectors, the dense similarity matrix
//! built from them, and the CSR form used by PageRank.

pub mod csr;
pub mod similarity;
pub mod term_vector;
