//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. [`NoopObserver`] costs nothing; [`StageTimingObserver`]
//! records how long each stage took.

use crate::centrality::CentralityResult;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Segmentation of the document into sentences and paragraphs
pub const STAGE_SEGMENT: &str = "segment";
/// Pairwise similarity and centrality scoring
pub const STAGE_RANK: &str = "rank";
/// Per-paragraph sentence selection
pub const STAGE_SELECT: &str = "select";
/// Assembly of the final summary
pub const STAGE_FORMAT: &str = "format";

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since [`StageClock::start`]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage did and how long it took
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StageReport {
    /// Wall-clock duration of the stage
    pub elapsed: Duration,
    /// Number of items the stage produced, when meaningful
    pub items: Option<usize>,
}

impl StageReport {
    /// A report carrying only the duration
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }
}

/// Builder for [`StageReport`]s with optional counters
#[derive(Debug, Clone, Copy)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    /// Record the number of items produced
    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks invoked by the pipeline runner. All methods default to no-ops.
pub trait PipelineObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// A stage finished.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Centrality scores are available.
    fn on_centrality(&mut self, _result: &CentralityResult) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records each stage's report in execution order
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    stages: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(stage, report)` pairs
    pub fn stages(&self) -> &[(&'static str, StageReport)] {
        &self.stages
    }

    /// Report for a stage, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.stages
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all recorded durations
    pub fn total(&self) -> Duration {
        self.stages.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.stages.push((stage, *report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .items(7)
            .build();

        assert_eq!(report.elapsed, Duration::from_millis(3));
        assert_eq!(report.items, Some(7));
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut observer = StageTimingObserver::new();
        observer.on_stage_start(STAGE_SEGMENT);
        observer.on_stage_end(STAGE_SEGMENT, &StageReport::new(Duration::from_millis(1)));
        observer.on_stage_end(STAGE_RANK, &StageReport::new(Duration::from_millis(2)));

        let names: Vec<_> = observer.stages().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_SEGMENT, STAGE_RANK]);
        assert_eq!(observer.total(), Duration::from_millis(3));
        assert!(observer.report(STAGE_RANK).is_some());
        assert!(observer.report(STAGE_FORMAT).is_none());
    }

    #[test]
    fn test_stage_clock_is_monotonic() {
        let clock = StageClock::start();
        let first = clock.elapsed();
        let second = clock.elapsed();
        assert!(second >= first);
    }
}
