use crate::types::{HoleFlags, HoleRecord};

/// A threshold-crossing region under evaluation.
///
/// Created once its bounding peaks are known, mutated by the later stages and
/// turned into a [`HoleRecord`] only when every stage accepts it.
#[derive(Clone, Debug, PartialEq)]
pub struct HoleCandidate {
    pub cross_left: usize,
    pub cross_right: usize,
    pub min_index: usize,
    pub min_value: f64,
    pub left_peak: usize,
    pub left_peak_value: f64,
    pub right_peak: usize,
    pub right_peak_value: f64,
    pub depth_percent: f64,
    pub t_start: Option<usize>,
    pub t_end: Option<usize>,
    pub w_angle_deg: Option<f64>,
    pub zero_crossings: usize,
    pub flags: HoleFlags,
}

impl HoleCandidate {
    /// Sets the minimum to the first smallest sample of `magnitude[lo..=hi]`.
    pub(crate) fn update_minimum(&mut self, magnitude: &[f64], lo: usize, hi: usize) {
        let (index, value) = argmin_first(magnitude, lo, hi);
        self.min_index = index;
        self.min_value = value;
    }

    pub(crate) fn set_right_peak(&mut self, index: usize, magnitude: &[f64]) {
        self.right_peak = index;
        self.right_peak_value = magnitude[index];
    }

    pub fn into_record(self, times: &[f64]) -> HoleRecord {
        HoleRecord {
            start_time: times[self.left_peak],
            end_time: times[self.right_peak],
            left_peak: self.left_peak,
            left_peak_value: self.left_peak_value,
            right_peak: self.right_peak,
            right_peak_value: self.right_peak_value,
            cross_left: self.cross_left,
            cross_right: self.cross_right,
            min_index: self.min_index,
            min_value: self.min_value,
            t_start: self.t_start,
            t_end: self.t_end,
            w_angle_deg: self.w_angle_deg,
            depth_percent: self.depth_percent,
            zero_crossings: self.zero_crossings,
            flags: self.flags,
        }
    }
}

/// Result of a candidate passing through a stage.
///
/// Every variant other than `Resolved` drops the candidate; the scan
/// orchestrator counts it and moves the cursor past the crossing.
#[derive(Clone, Debug, PartialEq)]
pub enum DetectionOutcome {
    Resolved(HoleCandidate),
    SmallThresholdCross,
    EmptySearchSlice,
    Complex,
    UnresolvedAsymmetry,
    Shallow,
    WideAngle,
    ExcessiveZeroCrossings,
}

impl DetectionOutcome {
    /// Feeds a resolved candidate into the next stage; aborts pass through.
    #[inline]
    pub fn and_then<F>(self, stage: F) -> DetectionOutcome
    where
        F: FnOnce(HoleCandidate) -> DetectionOutcome,
    {
        match self {
            DetectionOutcome::Resolved(candidate) => stage(candidate),
            aborted => aborted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetectionOutcome::Resolved(_) => "resolved",
            DetectionOutcome::SmallThresholdCross => "small_threshold_cross",
            DetectionOutcome::EmptySearchSlice => "empty_search_slice",
            DetectionOutcome::Complex => "complex",
            DetectionOutcome::UnresolvedAsymmetry => "unresolved_asymmetry",
            DetectionOutcome::Shallow => "shallow",
            DetectionOutcome::WideAngle => "wide_angle",
            DetectionOutcome::ExcessiveZeroCrossings => "excessive_zero_crossings",
        }
    }
}

/// First index of the largest value in `values[lo..hi]` (half-open).
/// Returns `None` for an empty range.
pub(crate) fn argmax_first(values: &[f64], lo: usize, hi: usize) -> Option<usize> {
    if lo >= hi {
        return None;
    }
    let mut best = lo;
    for i in lo + 1..hi {
        if values[i] > values[best] {
            best = i;
        }
    }
    Some(best)
}

/// First index and value of the smallest sample in `values[lo..=hi]`.
pub(crate) fn argmin_first(values: &[f64], lo: usize, hi: usize) -> (usize, f64) {
    let mut best = lo;
    for i in lo + 1..=hi {
        if values[i] < values[best] {
            best = i;
        }
    }
    (best, values[best])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_prefers_first_of_ties() {
        let v = [1.0, 3.0, 2.0, 3.0];
        assert_eq!(argmax_first(&v, 0, 4), Some(1));
        assert_eq!(argmax_first(&v, 2, 4), Some(3));
        assert_eq!(argmax_first(&v, 2, 2), None);
    }

    #[test]
    fn argmin_is_inclusive() {
        let v = [5.0, 1.0, 1.0, 0.5];
        assert_eq!(argmin_first(&v, 0, 2), (1, 1.0));
        assert_eq!(argmin_first(&v, 0, 3), (3, 0.5));
        assert_eq!(argmin_first(&v, 2, 2), (2, 1.0));
    }

    #[test]
    fn aborts_short_circuit_later_stages() {
        let outcome = DetectionOutcome::Shallow.and_then(|_| panic!("stage must not run"));
        assert_eq!(outcome, DetectionOutcome::Shallow);
        assert_eq!(outcome.label(), "shallow");
    }
}
