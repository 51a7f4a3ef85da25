//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts (sentences, similarity matrix, score maps) for debugging, and
//! emitting structured telemetry.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::graph::similarity::SimilarityMatrix;
use crate::types::{ScoreMap, Sentence};

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// All stages in execution order.
pub const STAGES: [&str; 6] = [
    STAGE_NORMALIZE,
    STAGE_SEGMENT,
    STAGE_SCORE,
    STAGE_GRAPH,
    STAGE_RANK,
    STAGE_SELECT,
];

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage did, reported when it ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Items produced (characters, sentences, scores, selected sentences).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<usize>,
    /// Non-zero similarity pairs (graph stage).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<usize>,
    /// PageRank iterations (rank stage).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converged: Option<bool>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Default::default()
        }
    }
}

/// Fluent construction of a [`StageReport`].
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn edges(mut self, edges: usize) -> Self {
        self.report.edges = Some(edges);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.report.iterations = Some(iterations);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Receives callbacks as a summarization call moves through its stages.
///
/// Every method has a no-op default, so implementors override only what
/// they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Qualifying sentences after segmentation (and truncation, if any).
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// Standalone importance per sentence.
    fn on_importance(&mut self, _scores: &ScoreMap) {}

    fn on_similarity(&mut self, _matrix: &SimilarityMatrix) {}

    /// PageRank centrality per sentence.
    fn on_centrality(&mut self, _scores: &ScoreMap) {}

    /// Blended scores the selector ranks by.
    fn on_blended(&mut self, _scores: &ScoreMap) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records every stage report in order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(stage, report)` pairs in the order stages finished.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report of the named stage, if it ran.
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
