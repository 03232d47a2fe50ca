//! Complexity scorer: counts sign changes of the derivative of the smoothed
//! magnitude between the bounding peaks.

use super::ScanContext;
use crate::detector::outcome::HoleCandidate;
use crate::detector::DetectionOutcome;
use crate::smoothing::rolling_mean;

// Derivative magnitudes below this fraction of the signal level count as flat.
const FLAT_FRACTION: f64 = 1e-9;

/// Number of derivative sign changes of `segment` smoothed over `window`
/// samples. Flat stretches are skipped rather than counted as a change.
pub fn count_zero_crossings(segment: &[f64], window: usize, sampling_rate: f64) -> usize {
    if segment.len() < 3 {
        return 0;
    }
    let smoothed = rolling_mean(segment, window);
    let level = smoothed.iter().fold(0.0f64, |acc, v| acc.max(v.abs())).max(1.0);
    let eps = FLAT_FRACTION * level * sampling_rate;

    let mut crossings = 0;
    let mut last_sign = 0i8;
    for pair in smoothed.windows(2) {
        let derivative = (pair[1] - pair[0]) * sampling_rate;
        let sign = if derivative > eps {
            1
        } else if derivative < -eps {
            -1
        } else {
            0
        };
        if sign != 0 {
            if last_sign != 0 && sign != last_sign {
                crossings += 1;
            }
            last_sign = sign;
        }
    }
    crossings
}

pub(crate) fn score_complexity(ctx: &ScanContext<'_>, mut c: HoleCandidate) -> DetectionOutcome {
    let segment = &ctx.signal.magnitude[c.left_peak..=c.right_peak];
    c.zero_crossings = count_zero_crossings(segment, ctx.windows.derivative, ctx.sampling_rate);
    if c.zero_crossings >= ctx.config.threshold_for_derivative_0_crossings_flag {
        c.flags.derivative_crossings = true;
        if ctx.config.break_for_derivative_crossings {
            return DetectionOutcome::ExcessiveZeroCrossings;
        }
    }
    DetectionOutcome::Resolved(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_dip_has_one_crossing() {
        let segment: Vec<f64> = (0..21)
            .map(|i| 10.0 - 5.0 * (std::f64::consts::PI * i as f64 / 20.0).sin())
            .collect();
        assert_eq!(count_zero_crossings(&segment, 3, 10.0), 1);
    }

    #[test]
    fn flat_edges_do_not_count() {
        let segment = [10.0, 10.0, 10.0, 5.0, 5.0, 5.0, 10.0, 10.0, 10.0];
        assert_eq!(count_zero_crossings(&segment, 1, 10.0), 1);
    }

    #[test]
    fn oscillation_counts_every_turn() {
        let segment = [10.0, 6.0, 9.0, 5.0, 9.0, 6.0, 10.0];
        assert_eq!(count_zero_crossings(&segment, 1, 1.0), 5);
    }

    #[test]
    fn short_segments_score_zero() {
        assert_eq!(count_zero_crossings(&[1.0, 2.0], 1, 1.0), 0);
    }
}
