//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`SummaryPipeline::run`] executes the stages in order, threading the
//! sentence list, score map and selected lines between them and notifying a
//! [`PipelineObserver`] at each boundary.
//!
//! # Static dispatch
//!
//! `SummaryPipeline` is generic over its [`SimilarityMeasure`], so the
//! default [`WordOverlap`] measure is a zero-sized type and adds no runtime
//! cost.

use crate::centrality::rank_sentences;
use crate::nlp::segmenter::{sentences, split_paragraphs};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_FORMAT, STAGE_RANK,
    STAGE_SEGMENT, STAGE_SELECT,
};
use crate::pipeline::traits::{SimilarityMeasure, WordOverlap};
use crate::summarizer::selector::ParagraphSelector;
use crate::summarizer::summary::Summary;
use crate::types::SummarizerConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// SummaryPipeline
// ============================================================================

/// A summarization pipeline with a fixed configuration and measure.
#[derive(Debug, Clone)]
pub struct SummaryPipeline<M = WordOverlap> {
    pub config: SummarizerConfig,
    pub measure: M,
}

impl Default for SummaryPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryPipeline {
    /// Pipeline with the default configuration and word-overlap measure.
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    /// Pipeline with a custom configuration.
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            config,
            measure: WordOverlap,
        }
    }
}

impl<M> SummaryPipeline<M> {
    /// Replace the similarity measure.
    pub fn with_measure<N: SimilarityMeasure>(self, measure: N) -> SummaryPipeline<N> {
        SummaryPipeline {
            config: self.config,
            measure,
        }
    }
}

impl<M: SimilarityMeasure> SummaryPipeline<M> {
    /// Execute the pipeline, producing a [`Summary`].
    ///
    /// Stages run in order:
    /// 1. Segment the document into sentences and paragraphs
    /// 2. Rank sentences by centrality and key scores by normalized text
    /// 3. Select the best sentence of each paragraph
    /// 4. Assemble the summary with the optional title
    pub fn run(
        &self,
        title: Option<&str>,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Summary {
        // Each stage runs in its own block so its span closes with it.

        // Stage 1: Segment
        let (document_sentences, paragraphs) = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let document_sentences = sentences(text);
            let paragraphs = split_paragraphs(text);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(document_sentences.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            (document_sentences, paragraphs)
        };

        // Stage 2: Rank
        let scores = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let centrality = rank_sentences(
                document_sentences,
                &self.measure,
                self.config.parallel_threshold,
            );
            let scores = centrality.score_map();
            let report = StageReportBuilder::new(clock.elapsed())
                .items(scores.len())
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            observer.on_centrality(&centrality);
            scores
        };

        // Stage 3: Select
        let lines = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selector = ParagraphSelector::new()
                .with_skip_single_sentence_paragraphs(self.config.skip_single_sentence_paragraphs);
            let lines = selector.select(paragraphs.iter().copied(), &scores);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(lines.len())
                .build();
            observer.on_stage_end(STAGE_SELECT, &report);
            lines
        };

        // Stage 4: Format
        let summary = {
            trace_stage!(STAGE_FORMAT);
            observer.on_stage_start(STAGE_FORMAT);
            let clock = StageClock::start();
            let summary = Summary::new(title, lines);
            let report = StageReport::new(clock.elapsed());
            observer.on_stage_end(STAGE_FORMAT, &report);
            summary
        };

        summary
    }
}

// ============================================================================
// Tests
// ============================================================================
