//! Depth filter: compares the hole minimum with the mean field just outside
//! the bounding peaks.

use super::ScanContext;
use crate::detector::outcome::HoleCandidate;
use crate::detector::DetectionOutcome;
use crate::smoothing::mean_of;

/// Reference level around a hole.
///
/// Averages `w` samples before `left_peak` and `w` samples after
/// `right_peak`. A missing side is replaced by the other; with both missing
/// the mean of the two peak values is used.
pub fn reference_level(magnitude: &[f64], left_peak: usize, right_peak: usize, w: usize) -> f64 {
    let n = magnitude.len();
    let before = mean_of(&magnitude[left_peak.saturating_sub(w)..left_peak]);
    let after_start = (right_peak + 1).min(n);
    let after_end = (right_peak + 1).saturating_add(w).min(n);
    let after = mean_of(&magnitude[after_start..after_end]);
    match (before, after) {
        (Some(b), Some(a)) => 0.5 * (b + a),
        (Some(b), None) => b,
        (None, Some(a)) => a,
        (None, None) => 0.5 * (magnitude[left_peak] + magnitude[right_peak]),
    }
}

/// Drop from `reference` to `min_value` in percent; `+inf` for a zero
/// reference.
#[inline]
pub fn depth_percent(reference: f64, min_value: f64) -> f64 {
    if reference == 0.0 {
        f64::INFINITY
    } else {
        (reference - min_value) / reference * 100.0
    }
}

pub(crate) fn filter_depth(ctx: &ScanContext<'_>, mut c: HoleCandidate) -> DetectionOutcome {
    let reference = reference_level(
        ctx.signal.magnitude,
        c.left_peak,
        c.right_peak,
        ctx.windows.bave_scan,
    );
    c.depth_percent = depth_percent(reference, c.min_value);
    if c.depth_percent < ctx.config.depth_percentage_threshold * 100.0 {
        c.flags.shallow = true;
        if ctx.config.break_for_shallow_hole {
            return DetectionOutcome::Shallow;
        }
    }
    DetectionOutcome::Resolved(c)
}
