//! Pipeline stages, observation, and execution.
//!
//! ## Submodules
//!
//! - [`traits`] — Stage trait definitions
//! - [`runner`] — Pipeline orchestration and artifact threading
//! - [`observer`] — Logging, profiling, and debug hooks

pub mod observer;
pub mod runner;
pub mod traits;

pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, STAGE_FORMAT, STAGE_RANK, STAGE_SEGMENT, STAGE_SELECT,
};
pub use runner::SummaryPipeline;
pub use traits::{SimilarityMeasure, WordOverlap};
