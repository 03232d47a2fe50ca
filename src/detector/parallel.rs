//! Chunked scan over long signals.
//!
//! The signal is cut into chunks of `chunk_seconds`; each chunk is padded on
//! both sides by the largest look-around distance of any stage and scanned
//! independently with rayon. A chunk owns the holes whose threshold crossing
//! starts inside its unpadded core. Owned holes are merged in time order and
//! any hole overlapping an already kept one is dropped.
//!
//! Statistics follow the same ownership rule: a chunk counts only the
//! candidates whose crossing starts inside its core. Results can still differ
//! from [`detect`](super::detect) when a hole spans more than the padding.

use super::params::DetectionConfig;
use super::pipeline::HoleDetector;
use crate::diagnostics::DetectionStats;
use crate::error::{ConfigurationError, DetectionError};
use crate::smoothing::{estimate_sampling_rate, window_samples, SamplingRateMode};
use crate::types::{HoleRecord, Signal};
use log::debug;
use rayon::prelude::*;

/// Scans `signal` in parallel chunks of `chunk_seconds`.
pub fn detect_parallel(
    signal: Signal<'_>,
    config: &DetectionConfig,
    chunk_seconds: f64,
) -> Result<(Vec<HoleRecord>, DetectionStats), DetectionError> {
    signal.check_lengths()?;
    config.validate()?;
    if !(chunk_seconds.is_finite() && chunk_seconds > 0.0) {
        return Err(ConfigurationError::NonPositive {
            name: "chunk_seconds",
            value: chunk_seconds,
        }
        .into());
    }
    let n = signal.len();
    if n < 2 {
        return Ok((Vec::new(), DetectionStats::default()));
    }
    signal.check_samples()?;

    let rate = estimate_sampling_rate(
        signal.times,
        config.fixed_sampling_rate,
        config.sampling_rate_mode,
    )?;
    let core = window_samples(chunk_seconds, rate);
    let pad = window_samples(config.max_look_around_seconds(), rate);
    if core >= n {
        return HoleDetector::new(config.clone()).process(signal);
    }

    // Chunks must agree on the rate of the whole signal.
    let detector = HoleDetector::new(DetectionConfig {
        sampling_rate_mode: SamplingRateMode::Fixed,
        fixed_sampling_rate: rate,
        ..config.clone()
    });
    let cores: Vec<(usize, usize)> = (0..n)
        .step_by(core)
        .map(|start| (start, (start + core).min(n)))
        .collect();
    debug!(
        "detect_parallel n={} chunks={} core={} pad={}",
        n,
        cores.len(),
        core,
        pad
    );

    let chunks = cores
        .par_iter()
        .map(|&(start, end)| -> Result<_, DetectionError> {
            let lo = start.saturating_sub(pad);
            let hi = end.saturating_add(pad).min(n);
            let (holes, stats) =
                detector.process_owned(signal.slice(lo..hi), start - lo..end - lo)?;
            let owned: Vec<HoleRecord> = holes.into_iter().map(|h| h.shifted(lo)).collect();
            Ok((owned, stats))
        })
        .collect::<Result<Vec<(Vec<HoleRecord>, DetectionStats)>, _>>()?;

    let mut stats = DetectionStats::default();
    let mut owned = Vec::new();
    for (holes, chunk_stats) in chunks {
        stats.merge(&chunk_stats);
        owned.extend(holes);
    }
    let holes = merge_seams(owned);
    stats.detected = holes.len();
    Ok((holes, stats))
}

/// Orders holes by left peak and drops every hole overlapping the previously
/// kept one.
fn merge_seams(mut holes: Vec<HoleRecord>) -> Vec<HoleRecord> {
    holes.sort_by_key(|h| (h.left_peak, h.right_peak));
    let mut merged: Vec<HoleRecord> = Vec::with_capacity(holes.len());
    for hole in holes {
        match merged.last() {
            Some(last) if hole.left_peak <= last.right_peak => {
                debug!(
                    "detect_parallel dropping seam duplicate [{}, {}] overlapping [{}, {}]",
                    hole.left_peak, hole.right_peak, last.left_peak, last.right_peak
                );
            }
            _ => merged.push(hole),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HoleFlags;

    fn record(left_peak: usize, right_peak: usize) -> HoleRecord {
        HoleRecord {
            left_peak,
            left_peak_value: 10.0,
            right_peak,
            right_peak_value: 10.0,
            cross_left: left_peak + 1,
            cross_right: right_peak - 1,
            min_index: left_peak + 1,
            min_value: 5.0,
            t_start: None,
            t_end: None,
            w_angle_deg: None,
            depth_percent: 50.0,
            zero_crossings: 1,
            start_time: 0.0,
            end_time: 0.0,
            flags: HoleFlags::default(),
        }
    }

    #[test]
    fn seam_merge_orders_and_drops_overlaps() {
        let merged = merge_seams(vec![record(50, 60), record(10, 20), record(18, 30)]);
        let spans: Vec<_> = merged.iter().map(|h| (h.left_peak, h.right_peak)).collect();
        assert_eq!(spans, vec![(10, 20), (50, 60)]);
    }

    #[test]
    fn non_positive_chunk_is_rejected() {
        let times = [0.0, 0.1, 0.2];
        let magnitude = [1.0; 3];
        let vector = [nalgebra::Vector3::zeros(); 3];
        let err = detect_parallel(
            Signal::new(&times, &magnitude, &vector),
            &DetectionConfig::default(),
            0.0,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DetectionError::Configuration(ConfigurationError::NonPositive {
                name: "chunk_seconds",
                ..
            })
        ));
    }
}
