use crate::diagnostics::{DetectionStats, TimingBreakdown};
use crate::types::HoleRecord;
use serde::Serialize;

/// Result produced by [`HoleDetector::process_with_diagnostics`](crate::HoleDetector).
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub holes: Vec<HoleRecord>,
    pub stats: DetectionStats,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing the internal execution of one run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub candidates: Vec<CandidateTrace>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub samples: usize,
    pub duration_s: f64,
    pub sampling_rate: f64,
    pub slow_window_samples: usize,
    pub fast_window_samples: usize,
}

/// What happened to one threshold crossing.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTrace {
    pub cross_left: usize,
    pub cross_right: usize,
    pub widened: bool,
    pub outcome: &'static str,
}
