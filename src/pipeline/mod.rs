//! Summarizer specification, validation, and execution.
//!
//! ## Submodules
//!
//! - [`spec`]: versioned JSON form of the configuration
//! - [`validation`]: rule engine producing a [`ValidationReport`]
//! - [`runner`]: the [`Summarizer`] that runs the stages in order
//! - [`observer`]: timing and debug hooks at stage boundaries

pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;

pub use error_code::ErrorCode;
pub use errors::SpecError;

// Re-export observer types.
pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, STAGES, STAGE_GRAPH, STAGE_NORMALIZE, STAGE_RANK, STAGE_SCORE,
    STAGE_SEGMENT, STAGE_SELECT,
};

pub use runner::Summarizer;
pub use spec::{SummarySpec, SPEC_VERSION};
pub use validation::{
    Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule,
};
