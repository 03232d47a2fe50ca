//! Detector pipeline driving the hole scan end-to-end.
//!
//! The [`HoleDetector`] exposes a simple API: feed a cleaned [`Signal`] and
//! get the ordered, non-overlapping hole records plus the run statistics.
//!
//! Typical usage:
//! ```no_run
//! use mag_hole_detector::{DetectionConfig, HoleDetector, Signal};
//!
//! # fn example(signal: Signal<'_>) -> Result<(), mag_hole_detector::DetectionError> {
//! let detector = HoleDetector::new(DetectionConfig::default());
//! let report = detector.process_with_diagnostics(signal)?;
//! for hole in &report.holes {
//!     println!("hole at {:.1}s depth={:.1}%", hole.start_time, hole.depth_percent);
//! }
//! # Ok(())
//! # }
//! ```

// Stages, in the order every candidate passes them
// - Crossing: next run of samples below the slow baseline (small runs skipped or widened).
// - Peaks: left/right bounding maxima guided by the fast baseline.
// - Asymmetry: reconcile unequal peaks (re-entry or symmetric match).
// - Depth: reject shallow holes against the local reference level.
// - Boundary: inner boundary crossings and the W angle.
// - Complexity: derivative zero-crossing count.
//
// The slow/fast baselines and the boundary lower bound are computed once per
// run, before scanning begins.

pub mod asymmetry;
pub mod boundary;
pub mod complexity;
pub mod crossing;
pub mod depth;
pub mod peaks;

use self::crossing::{Crossing, ScanStep};
use super::outcome::DetectionOutcome;
use super::params::DetectionConfig;
use super::workspace::ScanWorkspace;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    CandidateTrace, DetectionReport, DetectionStats, InputDescriptor, PipelineTrace,
    TimingBreakdown,
};
use crate::error::DetectionError;
use crate::smoothing::{estimate_sampling_rate, window_samples, Baselines};
use crate::types::{HoleRecord, Signal};
use log::debug;
use std::ops::Range;
use std::time::Instant;

/// Window lengths in samples derived from the configuration and the rate.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScanWindows {
    pub slow: usize,
    pub fast: usize,
    pub peak_search: usize,
    pub symmetric_scan: usize,
    pub bave_scan: usize,
    pub bave: usize,
    pub derivative: usize,
}

impl ScanWindows {
    fn new(cfg: &DetectionConfig, rate: f64) -> Self {
        Self {
            slow: window_samples(cfg.slow_window_seconds, rate),
            fast: window_samples(cfg.fast_window_seconds, rate),
            peak_search: window_samples(cfg.peak_search_seconds, rate),
            symmetric_scan: window_samples(cfg.symmetrical_peak_scan_window_seconds, rate),
            bave_scan: window_samples(cfg.bave_scan_seconds, rate),
            bave: window_samples(cfg.bave_window_seconds, rate),
            derivative: window_samples(cfg.derivative_window_seconds, rate),
        }
    }
}

/// Read-only state shared by the per-candidate stages of one run.
pub(crate) struct ScanContext<'a> {
    pub signal: Signal<'a>,
    pub baselines: &'a Baselines,
    pub lower_bound: &'a [f64],
    pub sampling_rate: f64,
    pub windows: ScanWindows,
    pub config: &'a DetectionConfig,
    /// Crossings starting outside this range are scanned but not reported.
    pub owned: Range<usize>,
}

/// Hole detector orchestrating baseline smoothing, threshold-crossing
/// scanning and the per-candidate filter stages.
///
/// Holds only the configuration; every run starts from fresh state, so one
/// detector can serve many signals, also concurrently.
#[derive(Clone, Debug, Default)]
pub struct HoleDetector {
    config: DetectionConfig,
}

impl HoleDetector {
    /// Create a detector with the supplied configuration.
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Run the detector, returning the records and the run statistics.
    pub fn process(
        &self,
        signal: Signal<'_>,
    ) -> Result<(Vec<HoleRecord>, DetectionStats), DetectionError> {
        let report = self.process_with_diagnostics(signal)?;
        Ok((report.holes, report.stats))
    }

    /// Run the detector and return both the result and a detailed trace.
    ///
    /// Fatal errors are raised before any scanning begins. Signals with fewer
    /// than two samples yield an empty report.
    pub fn process_with_diagnostics(
        &self,
        signal: Signal<'_>,
    ) -> Result<DetectionReport, DetectionError> {
        let owned = 0..signal.len();
        self.run(signal, owned)
    }

    /// Like [`process`](Self::process), but only crossings whose left bound
    /// lies in `owned` are counted and reported. Crossings outside it still
    /// move the cursor, so the scan sees the same candidates as a full run.
    pub(crate) fn process_owned(
        &self,
        signal: Signal<'_>,
        owned: Range<usize>,
    ) -> Result<(Vec<HoleRecord>, DetectionStats), DetectionError> {
        let report = self.run(signal, owned)?;
        Ok((report.holes, report.stats))
    }

    fn run(
        &self,
        signal: Signal<'_>,
        owned: Range<usize>,
    ) -> Result<DetectionReport, DetectionError> {
        let total_start = Instant::now();
        signal.check_lengths()?;
        self.config.validate()?;

        let n = signal.len();
        if n < 2 {
            debug!("HoleDetector::process signal too short (n={}), nothing to scan", n);
            return Ok(DetectionReport {
                trace: PipelineTrace {
                    input: InputDescriptor {
                        samples: n,
                        ..Default::default()
                    },
                    ..Default::default()
                },
                ..Default::default()
            });
        }
        signal.check_samples()?;

        let cfg = &self.config;
        let rate = estimate_sampling_rate(
            signal.times,
            cfg.fixed_sampling_rate,
            cfg.sampling_rate_mode,
        )?;
        let windows = ScanWindows::new(cfg, rate);
        let duration_s = signal.times[n - 1] - signal.times[0];
        debug!(
            "HoleDetector::process start n={} rate={:.3} slow={} fast={} bave={}",
            n, rate, windows.slow, windows.fast, windows.bave
        );

        let mut timings = TimingBreakdown::default();
        let smooth_start = Instant::now();
        let mut workspace = ScanWorkspace::new(signal.magnitude);
        let baselines = workspace.baselines(windows.slow, windows.fast, cfg.mean_threshold);
        let lower_bound = workspace.lower_bound(windows.bave);
        timings.push_since("baselines", smooth_start);

        let ctx = ScanContext {
            signal,
            baselines: &baselines,
            lower_bound: &lower_bound,
            sampling_rate: rate,
            windows,
            config: cfg,
            owned,
        };

        let scan_start = Instant::now();
        let (holes, stats, candidates) = scan(&ctx);
        timings.push_since("scan", scan_start);
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "HoleDetector::process done holes={} candidates={} aborted={} cache_hits={} ({:.3} ms)",
            holes.len(),
            stats.candidates,
            stats.aborted(),
            workspace.hits(),
            timings.total_ms
        );

        Ok(DetectionReport {
            holes,
            stats,
            trace: PipelineTrace {
                input: InputDescriptor {
                    samples: n,
                    duration_s,
                    sampling_rate: rate,
                    slow_window_samples: windows.slow,
                    fast_window_samples: windows.fast,
                },
                timings,
                candidates,
            },
        })
    }
}

/// Library boundary: runs one detection with `config`.
pub fn detect(
    signal: Signal<'_>,
    config: &DetectionConfig,
) -> Result<(Vec<HoleRecord>, DetectionStats), DetectionError> {
    HoleDetector::new(config.clone()).process(signal)
}

/// Runs the stages on one crossing.
fn evaluate(ctx: &ScanContext<'_>, crossing: &Crossing, floor: usize) -> DetectionOutcome {
    peaks::locate_peaks(ctx, crossing, floor)
        .and_then(|c| asymmetry::resolve_asymmetry(ctx, c))
        .and_then(|c| depth::filter_depth(ctx, c))
        .and_then(|c| boundary::measure_boundaries(ctx, c))
        .and_then(|c| complexity::score_complexity(ctx, c))
}

/// Scan loop. The cursor strictly increases on every cycle: aborts resume
/// after the crossing, accepted holes after their right peak. `floor` keeps
/// the next left peak clear of the last accepted hole.
fn scan(ctx: &ScanContext<'_>) -> (Vec<HoleRecord>, DetectionStats, Vec<CandidateTrace>) {
    let n = ctx.signal.len();
    let mut holes = Vec::new();
    let mut stats = DetectionStats::default();
    let mut trace = Vec::new();
    let mut cursor = 0usize;
    let mut floor = 0usize;

    while cursor < n {
        let (crossing, outcome) = match crossing::scan(ctx, cursor, floor) {
            ScanStep::End => break,
            ScanStep::Skipped(crossing) => (crossing, DetectionOutcome::SmallThresholdCross),
            ScanStep::Candidate(crossing) => (crossing, evaluate(ctx, &crossing, floor)),
        };
        let owned = ctx.owned.contains(&crossing.left);
        if owned {
            stats.candidates += 1;
            stats.small_threshold_cross_widened += usize::from(crossing.widened);
            stats.record(&outcome);
            trace.push(CandidateTrace {
                cross_left: crossing.left,
                cross_right: crossing.right,
                widened: crossing.widened,
                outcome: outcome.label(),
            });
        }

        cursor = match outcome {
            DetectionOutcome::Resolved(candidate) => {
                let next = candidate.right_peak + 1;
                floor = next;
                if owned {
                    holes.push(candidate.into_record(ctx.signal.times));
                }
                next
            }
            aborted => {
                debug!(
                    "HoleDetector::process crossing [{}, {}] dropped: {}",
                    crossing.left,
                    crossing.right,
                    aborted.label()
                );
                crossing.right + 1
            }
        }
        .max(cursor + 1);
    }
    (holes, stats, trace)
}
