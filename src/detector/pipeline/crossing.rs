//! Threshold-crossing scanner.
//!
//! Each cycle first skips samples at or above the slow baseline, then
//! collects the run of samples below it. A run that reaches the end of the
//! array is never emitted.

use super::ScanContext;

/// Bounds of one below-baseline run, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub left: usize,
    pub right: usize,
    /// Bounds were widened because the raw run was small.
    pub widened: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStep {
    Candidate(Crossing),
    /// Small crossing dropped without further evaluation.
    Skipped(Crossing),
    End,
}

/// Settings of the small-crossing rule.
#[derive(Clone, Copy, Debug)]
pub struct SmallCrossRule {
    pub max_samples: usize,
    pub adjustment: usize,
    pub skip: bool,
}

/// Finds the next crossing at or after `cursor`. Widened bounds never reach
/// below `floor` nor past the last sample.
pub fn next_crossing(
    magnitude: &[f64],
    slow: &[f64],
    cursor: usize,
    floor: usize,
    rule: SmallCrossRule,
) -> ScanStep {
    let n = magnitude.len();
    let mut i = cursor;
    while i < n && magnitude[i] >= slow[i] {
        i += 1;
    }
    if i >= n {
        return ScanStep::End;
    }
    let left = i;
    while i < n && magnitude[i] < slow[i] {
        i += 1;
    }
    if i >= n {
        return ScanStep::End;
    }
    let right = i - 1;

    let crossing = Crossing {
        left,
        right,
        widened: false,
    };
    if right - left > rule.max_samples {
        return ScanStep::Candidate(crossing);
    }
    if rule.skip {
        return ScanStep::Skipped(crossing);
    }
    ScanStep::Candidate(Crossing {
        left: left.saturating_sub(rule.adjustment).max(floor.min(left)),
        right: right.saturating_add(rule.adjustment).min(n - 1),
        widened: true,
    })
}

pub(crate) fn scan(ctx: &ScanContext<'_>, cursor: usize, floor: usize) -> ScanStep {
    let cfg = ctx.config;
    next_crossing(
        ctx.signal.magnitude,
        &ctx.baselines.slow,
        cursor,
        floor,
        SmallCrossRule {
            max_samples: cfg.small_threshold_cross_flag_samples,
            adjustment: cfg.small_threshold_cross_adjustment,
            skip: cfg.break_for_small_threshold_cross,
        },
    )
}
