//! Summarizer runner: orchestrates stage execution and artifact flow.
//!
//! [`Summarizer`] holds a validated configuration and a borrowed
//! [`LinguisticModel`]. Each call runs the stages in order:
//!
//! 1. Normalize the raw text
//! 2. Segment into qualifying sentences (and apply the size bound)
//! 3. Score standalone importance
//! 4. Build the similarity graph
//! 5. Rank by PageRank centrality and blend with importance
//! 6. Select the top sentences and restore document order
//!
//! An optional [`PipelineObserver`] is notified at every stage boundary.
//! The summarizer holds no mutable state, so one instance can serve
//! concurrent calls.

use crate::errors::{Result, SummarizerError};
use crate::graph::similarity::SimilarityGraphBuilder;
use crate::nlp::model::LinguisticModel;
use crate::nlp::normalizer::TextNormalizer;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_GRAPH,
    STAGE_NORMALIZE, STAGE_RANK, STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT,
};
use crate::pipeline::spec::SummarySpec;
use crate::pipeline::validation::ValidationEngine;
use crate::summarizer::importance::ImportanceScorer;
use crate::summarizer::ranker::CentralityRanker;
use crate::summarizer::selector::{validate_ratio, SentenceSelector};
use crate::types::{
    OversizePolicy, SelectedSentence, Sentence, Summary, SummarizerConfig, SummaryStats,
};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

/// Extractive summarizer bound to a linguistic model.
#[derive(Debug, Clone)]
pub struct Summarizer<'m> {
    config: SummarizerConfig,
    model: &'m LinguisticModel,
    normalizer: TextNormalizer,
}

impl Summarizer<'static> {
    /// Validate `config` and bind the shared model for its language.
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        let model = LinguisticModel::shared(config.language);
        Summarizer::with_model(config, model)
    }

    /// Build from a parsed spec, rejecting it when validation finds errors.
    pub fn from_spec(spec: &SummarySpec) -> Result<Self> {
        ValidationEngine::with_defaults()
            .validate(spec)
            .into_result()?;
        Self::new(spec.to_config())
    }

    /// Parse, validate and build from a JSON spec.
    pub fn from_spec_json(json: &str) -> Result<Self> {
        Self::from_spec(&SummarySpec::from_json(json)?)
    }
}

impl Default for Summarizer<'static> {
    fn default() -> Self {
        let config = SummarizerConfig::default();
        Self {
            model: LinguisticModel::shared(config.language),
            config,
            normalizer: TextNormalizer::default(),
        }
    }
}

impl<'m> Summarizer<'m> {
    /// Validate `config` and use a caller-supplied model.
    pub fn with_model(config: SummarizerConfig, model: &'m LinguisticModel) -> Result<Self> {
        ValidationEngine::with_defaults()
            .validate_config(&config)
            .into_result()?;
        Ok(Self {
            config,
            model,
            normalizer: TextNormalizer::default(),
        })
    }

    /// Replace the text normalizer.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn model(&self) -> &'m LinguisticModel {
        self.model
    }

    /// Summarize `text`, keeping roughly `ratio` of its sentences.
    pub fn summarize(&self, text: &str, ratio: f64) -> Result<String> {
        Ok(self.summarize_detailed(text, ratio)?.text)
    }

    /// Summarize `text` and return the selected sentences and statistics.
    pub fn summarize_detailed(&self, text: &str, ratio: f64) -> Result<Summary> {
        self.summarize_with_observer(text, ratio, &mut NoopObserver)
    }

    /// Summarize `text`, notifying `observer` at every stage boundary.
    ///
    /// Fails with [`SummarizerError::InvalidRatio`] unless `ratio` is in
    /// `(0, 1]`, and with [`SummarizerError::DocumentTooLarge`] when the
    /// sentence limit is exceeded under [`OversizePolicy::Reject`].
    pub fn summarize_with_observer(
        &self,
        text: &str,
        ratio: f64,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        validate_ratio(ratio)?;
        let cfg = &self.config;

        // Stage 1: Normalize
        let normalized = {
            trace_stage!(STAGE_NORMALIZE);
            observer.on_stage_start(STAGE_NORMALIZE);
            let clock = StageClock::start();
            let normalized = self.normalizer.normalize(text);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(normalized.chars().count())
                .build();
            observer.on_stage_end(STAGE_NORMALIZE, &report);
            normalized
        };

        // Stage 2: Segment
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = SentenceSegmenter::new(self.model)
                .with_min_chars(cfg.min_sentence_chars)
                .segment(&normalized);
            let sentences = self.apply_size_bound(sentences)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .items(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            observer.on_sentences(&sentences);
            sentences
        };

        if sentences.len() <= 1 {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                sentences = sentences.len(),
                "too few sentences to rank, returning normalized text"
            );
            let selected: Vec<_> = sentences
                .iter()
                .map(|s| SelectedSentence {
                    index: s.index,
                    text: s.text.clone(),
                    score: 1.0,
                })
                .collect();
            let n = selected.len();
            let stats = SummaryStats::compute(text, &normalized, n, n);
            return Ok(Summary {
                text: normalized,
                sentences: selected,
                stats,
            });
        }

        // Stage 3: Standalone importance
        let importance = {
            trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let importance = ImportanceScorer::from_config(self.model, cfg).score_all(&sentences);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(importance.len())
                .build();
            observer.on_stage_end(STAGE_SCORE, &report);
            observer.on_importance(&importance);
            importance
        };

        // Stage 4: Similarity graph
        let matrix = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();
            let matrix = SimilarityGraphBuilder::from_config(self.model, cfg).build(&sentences);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(matrix.size())
                .edges(matrix.edge_count())
                .build();
            observer.on_stage_end(STAGE_GRAPH, &report);
            observer.on_similarity(&matrix);
            matrix
        };

        // Stage 5: Rank and blend
        let blended = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranker = CentralityRanker::from_config(cfg);
            let result = ranker.pagerank(&matrix);
            let (iterations, converged) = (result.iterations, result.converged);
            let centrality = result.into_score_map();
            let blended = ranker.blend(&centrality, &importance);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(blended.len())
                .iterations(iterations)
                .converged(converged)
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            observer.on_centrality(&centrality);
            observer.on_blended(&blended);
            blended
        };

        // Stage 6: Select and assemble
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selector = SentenceSelector::new();
        let selected = selector.select(&sentences, &blended, ratio)?;
        let summary_text = selector.assemble(&selected);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(selected.len())
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);

        let stats = SummaryStats::compute(text, &summary_text, sentences.len(), selected.len());
        Ok(Summary {
            text: summary_text,
            sentences: selected,
            stats,
        })
    }

    fn apply_size_bound(&self, mut sentences: Vec<Sentence>) -> Result<Vec<Sentence>> {
        let Some(limit) = self.config.max_sentences else {
            return Ok(sentences);
        };
        if sentences.len() <= limit {
            return Ok(sentences);
        }
        match self.config.oversize_policy {
            OversizePolicy::Reject => Err(SummarizerError::DocumentTooLarge {
                sentences: sentences.len(),
                limit,
            }),
            OversizePolicy::Truncate => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    sentences = sentences.len(),
                    limit,
                    "truncating document to the sentence limit"
                );
                sentences.truncate(limit);
                Ok(sentences)
            }
        }
    }
}
