//! Peak locator.
//!
//! The fast baseline is followed outward from the crossing while it keeps
//! rising; the bounding peak is the largest magnitude sample between that
//! inflection and the crossing. Both walks are limited to `window` samples.

use super::crossing::Crossing;
use super::ScanContext;
use crate::detector::outcome::{argmax_first, argmin_first, HoleCandidate};
use crate::detector::DetectionOutcome;
use crate::types::HoleFlags;

/// Left bounding peak of a crossing starting at `left`.
///
/// Searches `[inflection, left)`, or `[inflection, left]` when
/// `include_bound` is set, and never looks below `floor`. `None` when there
/// is no sample to search.
pub fn left_peak(
    magnitude: &[f64],
    fast: &[f64],
    left: usize,
    floor: usize,
    window: usize,
    include_bound: bool,
) -> Option<usize> {
    let lower = left.saturating_sub(window).max(floor);
    if left < lower || (left == lower && !include_bound) {
        return None;
    }
    let mut i = left;
    while i > lower && fast[i - 1] > fast[i] {
        i -= 1;
    }
    let hi = if include_bound { left + 1 } else { left };
    argmax_first(magnitude, i.min(hi - 1), hi)
}

/// Right bounding peak of a crossing ending at `right`.
///
/// Searches `(right, inflection]`, or `[right, inflection]` when
/// `include_bound` is set, clamped to the last sample.
pub fn right_peak(
    magnitude: &[f64],
    fast: &[f64],
    right: usize,
    window: usize,
    include_bound: bool,
) -> Option<usize> {
    let last = magnitude.len().checked_sub(1)?;
    if right > last {
        return None;
    }
    let upper = right.saturating_add(window).min(last);
    if right == upper && !include_bound {
        return None;
    }
    let mut i = right;
    while i < upper && fast[i + 1] > fast[i] {
        i += 1;
    }
    let lo = if include_bound { right } else { right + 1 };
    argmax_first(magnitude, lo, i.max(lo) + 1)
}

/// Builds a candidate from a crossing, or aborts with `EmptySearchSlice`.
pub(crate) fn locate_peaks(
    ctx: &ScanContext<'_>,
    crossing: &Crossing,
    floor: usize,
) -> DetectionOutcome {
    let magnitude = ctx.signal.magnitude;
    let fast = &ctx.baselines.fast;
    let window = ctx.windows.peak_search;

    // A widened bound is no longer below the baseline and may be the peak.
    let left = left_peak(magnitude, fast, crossing.left, floor, window, crossing.widened);
    let right = right_peak(magnitude, fast, crossing.right, window, crossing.widened);
    let (Some(left), Some(right)) = (left, right) else {
        return DetectionOutcome::EmptySearchSlice;
    };

    let (min_index, min_value) = argmin_first(magnitude, crossing.left, crossing.right);
    DetectionOutcome::Resolved(HoleCandidate {
        cross_left: crossing.left,
        cross_right: crossing.right,
        min_index,
        min_value,
        left_peak: left,
        left_peak_value: magnitude[left],
        right_peak: right,
        right_peak_value: magnitude[right],
        depth_percent: 0.0,
        t_start: None,
        t_end: None,
        w_angle_deg: None,
        zero_crossings: 0,
        flags: HoleFlags::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smoothing::rolling_mean;

    fn dip() -> Vec<f64> {
        let mut v = vec![10.0; 40];
        v[13] = 11.0;
        v[26] = 10.5;
        for (k, x) in v[15..25].iter_mut().enumerate() {
            *x = 4.0 + (k as f64 - 4.5).abs() * 0.2;
        }
        v
    }

    #[test]
    fn finds_maxima_beside_the_dip() {
        let mag = dip();
        let fast = rolling_mean(&mag, 3);
        assert_eq!(left_peak(&mag, &fast, 15, 0, 10, false), Some(13));
        assert_eq!(right_peak(&mag, &fast, 24, 10, false), Some(26));
    }

    #[test]
    fn search_is_bounded_by_window_and_floor() {
        let mag = dip();
        let fast = rolling_mean(&mag, 3);
        // Floor right at the crossing leaves nothing to search.
        assert_eq!(left_peak(&mag, &fast, 15, 15, 10, false), None);
        // A one-sample window only sees the neighbour.
        assert_eq!(left_peak(&mag, &fast, 15, 0, 1, false), Some(14));
        assert_eq!(left_peak(&mag, &fast, 0, 0, 10, false), None);
    }

    #[test]
    fn flat_fast_baseline_still_searches_the_neighbour() {
        let mag = [10.0, 10.0, 3.0, 10.0, 10.0];
        let fast = [9.0; 5];
        assert_eq!(left_peak(&mag, &fast, 2, 0, 2, false), Some(1));
        assert_eq!(right_peak(&mag, &fast, 2, 2, false), Some(3));
    }

    #[test]
    fn right_search_at_the_last_sample_is_empty() {
        let mag = [10.0, 3.0, 3.0];
        let fast = [9.0; 3];
        assert_eq!(right_peak(&mag, &fast, 2, 4, false), None);
    }

    #[test]
    fn widened_bound_can_be_the_peak() {
        // Widened crossing [2, 6] whose outer samples are the maxima.
        let mag = [9.0, 9.5, 10.0, 6.0, 3.0, 6.0, 10.0, 9.5, 9.0];
        let fast = rolling_mean(&mag, 3);
        assert_eq!(left_peak(&mag, &fast, 2, 0, 3, false), Some(1));
        assert_eq!(left_peak(&mag, &fast, 2, 0, 3, true), Some(2));
        assert_eq!(right_peak(&mag, &fast, 6, 3, false), Some(7));
        assert_eq!(right_peak(&mag, &fast, 6, 3, true), Some(6));
        // The bound alone is searchable at the array edges.
        assert_eq!(left_peak(&mag, &fast, 0, 0, 3, true), Some(0));
        assert_eq!(right_peak(&mag, &fast, 8, 3, true), Some(8));
    }
}
