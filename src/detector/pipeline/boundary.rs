//! Boundary & angle calculator.
//!
//! The lower bound (`mean - std` over the wide boundary window) is computed
//! once per run over the whole array. For a candidate, `t_start` is the first
//! sample at or below that bound going from the left peak toward the
//! minimum, `t_end` the same going from the right peak back toward the
//! minimum. The W angle is the rotation of the field vector between them.

use super::ScanContext;
use crate::angle::angle_between_deg;
use crate::detector::outcome::HoleCandidate;
use crate::detector::DetectionOutcome;

/// Inner boundary crossings `(t_start, t_end)` of a hole.
pub fn inner_boundaries(
    magnitude: &[f64],
    lower_bound: &[f64],
    left_peak: usize,
    min_index: usize,
    right_peak: usize,
) -> (Option<usize>, Option<usize>) {
    let below = |i: &usize| magnitude[*i] <= lower_bound[*i];
    let t_start = (left_peak..=min_index).find(below);
    let t_end = (min_index..=right_peak).rev().find(below);
    (t_start, t_end)
}

pub(crate) fn measure_boundaries(ctx: &ScanContext<'_>, mut c: HoleCandidate) -> DetectionOutcome {
    let (t_start, t_end) = inner_boundaries(
        ctx.signal.magnitude,
        ctx.lower_bound,
        c.left_peak,
        c.min_index,
        c.right_peak,
    );
    c.t_start = t_start;
    c.t_end = t_end;
    c.w_angle_deg = match (t_start, t_end) {
        (Some(s), Some(e)) => angle_between_deg(&ctx.signal.vector[s], &ctx.signal.vector[e]),
        _ => None,
    };

    let wide = match c.w_angle_deg {
        Some(w) => w > ctx.config.wide_angle_threshold,
        None => true,
    };
    if wide {
        c.flags.wide_angle = true;
        if ctx.config.break_for_wide_angle {
            return DetectionOutcome::WideAngle;
        }
    }
    DetectionOutcome::Resolved(c)
}
