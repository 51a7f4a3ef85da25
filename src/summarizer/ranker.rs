//! Graph centrality and score blending
//!
//! Runs PageRank over the sentence similarity graph and mixes the resulting
//! centrality with standalone importance into the score the selector ranks by.

use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityMatrix;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::types::{ScoreMap, SummarizerConfig};

/// Centrality ranker and blender
#[derive(Debug, Clone)]
pub struct CentralityRanker {
    pagerank: StandardPageRank,
    centrality_weight: f64,
    importance_weight: f64,
    normalize: bool,
}

impl Default for CentralityRanker {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl CentralityRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            pagerank: StandardPageRank::from_config(config),
            centrality_weight: config.centrality_weight,
            importance_weight: config.importance_weight,
            normalize: config.normalize_scores,
        }
    }

    /// Set the centrality and importance blend weights
    pub fn with_weights(mut self, centrality: f64, importance: f64) -> Self {
        self.centrality_weight = centrality;
        self.importance_weight = importance;
        self
    }

    /// Toggle divide-by-max normalization before blending
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Full PageRank result over `matrix`, including convergence details
    pub fn pagerank(&self, matrix: &SimilarityMatrix) -> PageRankResult {
        let graph = CsrGraph::from_matrix(matrix);
        let result = self.pagerank.run(&graph);

        #[cfg(feature = "tracing")]
        if !result.converged && graph.num_nodes > 0 {
            tracing::warn!(
                iterations = result.iterations,
                delta = result.delta,
                "pagerank stopped at the iteration cap before converging"
            );
        }

        result
    }

    /// Centrality of every sentence; scores sum to 1 for a non-empty matrix
    pub fn rank(&self, matrix: &SimilarityMatrix) -> ScoreMap {
        self.pagerank(matrix).into_score_map()
    }

    /// `centrality_weight * centrality + importance_weight * importance`
    ///
    /// When normalization is on, both maps are first divided by their maximum.
    pub fn blend(&self, centrality: &ScoreMap, importance: &ScoreMap) -> ScoreMap {
        let (centrality, importance) = if self.normalize {
            (centrality.normalized_by_max(), importance.normalized_by_max())
        } else {
            (centrality.clone(), importance.clone())
        };

        let n = centrality.len().max(importance.len());
        ScoreMap::new(
            (0..n)
                .map(|i| {
                    self.centrality_weight * centrality.get(i)
                        + self.importance_weight * importance.get(i)
                })
                .collect(),
        )
    }
}
