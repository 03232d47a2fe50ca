use crate::detector::DetectionOutcome;
use serde::{Deserialize, Serialize};

/// Per-run counters describing what happened to every threshold crossing.
///
/// A fresh value is created by each run and returned with its records; no
/// counter outlives the run that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionStats {
    /// Threshold crossings found by the scanner, small ones included.
    pub candidates: usize,
    /// Small crossings skipped.
    pub small_threshold_cross: usize,
    /// Small crossings widened and kept.
    pub small_threshold_cross_widened: usize,
    pub empty_search_slice: usize,
    pub complex_skipped: usize,
    pub unresolved_asymmetry: usize,
    pub shallow_skipped: usize,
    pub wide_angle_skipped: usize,
    pub zero_crossings_skipped: usize,
    /// Emitted records carrying the corresponding flag.
    pub complex_flagged: usize,
    pub shallow_flagged: usize,
    pub wide_angle_flagged: usize,
    pub derivative_crossings_flagged: usize,
    pub detected: usize,
}

impl DetectionStats {
    /// Counts one candidate outcome.
    pub fn record(&mut self, outcome: &DetectionOutcome) {
        match outcome {
            DetectionOutcome::Resolved(candidate) => {
                self.detected += 1;
                let flags = &candidate.flags;
                self.complex_flagged += usize::from(flags.complex);
                self.shallow_flagged += usize::from(flags.shallow);
                self.wide_angle_flagged += usize::from(flags.wide_angle);
                self.derivative_crossings_flagged += usize::from(flags.derivative_crossings);
            }
            DetectionOutcome::SmallThresholdCross => self.small_threshold_cross += 1,
            DetectionOutcome::EmptySearchSlice => self.empty_search_slice += 1,
            DetectionOutcome::Complex => self.complex_skipped += 1,
            DetectionOutcome::UnresolvedAsymmetry => self.unresolved_asymmetry += 1,
            DetectionOutcome::Shallow => self.shallow_skipped += 1,
            DetectionOutcome::WideAngle => self.wide_angle_skipped += 1,
            DetectionOutcome::ExcessiveZeroCrossings => self.zero_crossings_skipped += 1,
        }
    }

    /// Number of candidates that were dropped for any reason.
    pub fn aborted(&self) -> usize {
        self.small_threshold_cross
            + self.empty_search_slice
            + self.complex_skipped
            + self.unresolved_asymmetry
            + self.shallow_skipped
            + self.wide_angle_skipped
            + self.zero_crossings_skipped
    }

    /// Adds all counters of `other`.
    pub fn merge(&mut self, other: &DetectionStats) {
        self.candidates += other.candidates;
        self.small_threshold_cross += other.small_threshold_cross;
        self.small_threshold_cross_widened += other.small_threshold_cross_widened;
        self.empty_search_slice += other.empty_search_slice;
        self.complex_skipped += other.complex_skipped;
        self.unresolved_asymmetry += other.unresolved_asymmetry;
        self.shallow_skipped += other.shallow_skipped;
        self.wide_angle_skipped += other.wide_angle_skipped;
        self.zero_crossings_skipped += other.zero_crossings_skipped;
        self.complex_flagged += other.complex_flagged;
        self.shallow_flagged += other.shallow_flagged;
        self.wide_angle_flagged += other.wide_angle_flagged;
        self.derivative_crossings_flagged += other.derivative_crossings_flagged;
        self.detected += other.detected;
    }
}
