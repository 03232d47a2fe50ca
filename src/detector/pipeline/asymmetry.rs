//! Asymmetry resolver.
//!
//! When the bounding peaks differ by more than the configured fraction the
//! candidate is marked complex. Unless complex holes are rejected outright,
//! the right side is re-examined: first for a re-entry below the slow
//! baseline shortly after the right peak (a second dip belonging to the same
//! structure), otherwise for the first later sample that matches the left
//! peak within threshold.

use super::peaks::right_peak;
use super::ScanContext;
use crate::detector::outcome::HoleCandidate;
use crate::detector::DetectionOutcome;
use log::trace;

/// Relative difference `|a - b| / min(a, b)`.
///
/// Equal peaks give 0; a non-positive smaller peak makes any difference
/// infinite.
#[inline]
pub fn peak_asymmetry(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    if diff == 0.0 {
        return 0.0;
    }
    let smaller = a.min(b);
    if smaller <= 0.0 {
        f64::INFINITY
    } else {
        diff / smaller
    }
}

/// Looks for a re-entry below `slow` within `window` samples after
/// `right_peak`. Returns the last below-baseline index of that run, or
/// `None` when there is no re-entry or the run reaches the end of the array.
pub fn find_reentry(
    magnitude: &[f64],
    slow: &[f64],
    right_peak: usize,
    window: usize,
) -> Option<usize> {
    let n = magnitude.len();
    let end = right_peak.saturating_add(window).min(n.saturating_sub(1));
    let start = (right_peak + 1..=end).find(|&j| magnitude[j] < slow[j])?;
    let exit = (start..n).find(|&j| magnitude[j] > slow[j])?;
    Some(exit - 1)
}

/// First sample within `window` samples after `right_peak` whose asymmetry
/// with `left_value` is within `threshold`.
pub fn first_symmetric_match(
    magnitude: &[f64],
    left_value: f64,
    right_peak: usize,
    window: usize,
    threshold: f64,
) -> Option<usize> {
    let end = right_peak
        .saturating_add(window)
        .min(magnitude.len().saturating_sub(1));
    (right_peak + 1..=end).find(|&j| peak_asymmetry(left_value, magnitude[j]) <= threshold)
}

pub(crate) fn resolve_asymmetry(ctx: &ScanContext<'_>, mut c: HoleCandidate) -> DetectionOutcome {
    let cfg = ctx.config;
    let threshold = cfg.asymmetric_peak_threshold;
    let initial = peak_asymmetry(c.left_peak_value, c.right_peak_value);
    if initial <= threshold {
        return DetectionOutcome::Resolved(c);
    }

    c.flags.asymmetric_initial = true;
    c.flags.complex = true;
    if cfg.break_for_complex_hole {
        return DetectionOutcome::Complex;
    }

    let magnitude = ctx.signal.magnitude;
    let reentry = find_reentry(
        magnitude,
        &ctx.baselines.slow,
        c.right_peak,
        ctx.windows.peak_search,
    )
    .and_then(|cross| {
        let fast = &ctx.baselines.fast;
        right_peak(magnitude, fast, cross, ctx.windows.peak_search, false)
            .map(|peak| (cross, peak))
    });

    match reentry {
        Some((cross, peak)) => {
            trace!(
                "asymmetry: re-entry extends crossing {} -> {}, right peak {} -> {}",
                c.cross_right,
                cross,
                c.right_peak,
                peak
            );
            c.cross_right = cross;
            c.set_right_peak(peak, magnitude);
        }
        None => {
            if let Some(j) = first_symmetric_match(
                magnitude,
                c.left_peak_value,
                c.right_peak,
                ctx.windows.symmetric_scan,
                threshold,
            ) {
                trace!("asymmetry: right peak {} -> {} (symmetric match)", c.right_peak, j);
                c.set_right_peak(j, magnitude);
            }
        }
    }

    let (lo, hi) = (c.cross_left, c.right_peak);
    c.update_minimum(magnitude, lo, hi);

    if peak_asymmetry(c.left_peak_value, c.right_peak_value) > threshold {
        c.flags.unresolved_asymmetry = true;
        if cfg.break_for_assymettry {
            return DetectionOutcome::UnresolvedAsymmetry;
        }
    }
    DetectionOutcome::Resolved(c)
}
