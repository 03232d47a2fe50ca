//! Run statistics and diagnostics returned by the detector.
//!
//! [`DetectionStats`] is part of the regular result of every run.
//! [`DetectionReport`] additionally carries a [`PipelineTrace`] with stage
//! timings and the fate of every threshold crossing; it is produced by
//! `HoleDetector::process_with_diagnostics`.

pub mod pipeline;
pub mod stats;
pub mod timing;

pub use pipeline::{CandidateTrace, DetectionReport, InputDescriptor, PipelineTrace};
pub use stats::DetectionStats;
pub use timing::{StageTiming, TimingBreakdown};
