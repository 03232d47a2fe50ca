mod common;

use common::synthetic_signal::{add_cosine_dip, add_noise, flat, rotate_across, set_box};
use mag_hole_detector::prelude::*;
use mag_hole_detector::{DetectionError, InputError, SignalBuffer};
use nalgebra::Vector3;

fn busy_signal() -> SignalBuffer {
    let mut buf = flat(3000, 10.0, 10.0);
    add_cosine_dip(&mut buf, 300, 10, 5.0);
    add_cosine_dip(&mut buf, 700, 25, 3.0);
    add_cosine_dip(&mut buf, 760, 8, 6.0);
    set_box(&mut buf, 1200..1203, 4.0);
    set_box(&mut buf, 1600..1640, 8.8);
    add_cosine_dip(&mut buf, 2100, 15, 7.0);
    set_box(&mut buf, 2400..2420, 5.0);
    set_box(&mut buf, 2420..2450, 13.5);
    add_noise(&mut buf, 0.2, 17);
    rotate_across(&mut buf, 2090..2111, 120.0);
    buf
}

fn permissive() -> DetectionConfig {
    DetectionConfig {
        small_threshold_cross_flag_samples: 4,
        break_for_small_threshold_cross: false,
        break_for_assymettry: false,
        break_for_shallow_hole: false,
        ..Default::default()
    }
}

fn check_structure(buf: &SignalBuffer, holes: &[HoleRecord]) {
    for hole in holes {
        assert!(hole.left_peak <= hole.cross_left, "{hole:?}");
        assert!(hole.cross_left <= hole.cross_right, "{hole:?}");
        assert!(hole.cross_right <= hole.right_peak, "{hole:?}");
        assert!(hole.right_peak < buf.magnitude.len());
        assert!(hole.left_peak <= hole.min_index && hole.min_index <= hole.right_peak);
        assert_eq!(hole.min_value, buf.magnitude[hole.min_index]);
        assert_eq!(hole.left_peak_value, buf.magnitude[hole.left_peak]);
        assert_eq!(hole.right_peak_value, buf.magnitude[hole.right_peak]);
        assert_eq!(hole.start_time, buf.times[hole.left_peak]);
        assert_eq!(hole.end_time, buf.times[hole.right_peak]);
        for t in [hole.t_start, hole.t_end].into_iter().flatten() {
            assert!(hole.left_peak <= t && t <= hole.right_peak);
        }
        if let Some(w) = hole.w_angle_deg {
            assert!((0.0..=180.0).contains(&w));
        }
    }
    for pair in holes.windows(2) {
        assert!(pair[0].right_peak < pair[1].left_peak, "{:?}", pair);
    }
}

#[test]
fn empty_and_single_sample_signals_yield_nothing() {
    let cfg = DetectionConfig::default();
    assert_eq!(cfg.sampling_rate_mode, SamplingRateMode::Calculated);

    let (holes, stats) = detect(Signal::new(&[], &[], &[]), &cfg).unwrap();
    assert!(holes.is_empty());
    assert_eq!(stats, DetectionStats::default());

    let v = [Vector3::new(1.0, 0.0, 0.0)];
    let (holes, stats) = detect(Signal::new(&[0.0], &[1.0], &v), &cfg).unwrap();
    assert!(holes.is_empty());
    assert_eq!(stats, DetectionStats::default());
}

#[test]
fn mismatched_lengths_are_rejected() {
    let v = [Vector3::zeros(); 2];
    let err = detect(
        Signal::new(&[0.0, 0.1, 0.2], &[1.0, 1.0, 1.0], &v),
        &DetectionConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DetectionError::Input(InputError::MismatchedLengths {
            times: 3,
            magnitude: 3,
            vector: 2
        })
    ));
}

#[test]
fn non_increasing_times_are_rejected() {
    let mut buf = flat(50, 10.0, 10.0);
    buf.times[20] = buf.times[19];
    let err = detect(buf.as_view(), &DetectionConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        DetectionError::Input(InputError::NonIncreasingTimes { index: 20 })
    ));
}

#[test]
fn non_finite_samples_are_rejected() {
    let mut buf = flat(50, 10.0, 10.0);
    buf.magnitude[5] = f64::NAN;
    let err = detect(buf.as_view(), &DetectionConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        DetectionError::Input(InputError::NonFinite { index: 5 })
    ));
}

#[test]
fn repeated_runs_are_identical() {
    let buf = busy_signal();
    for cfg in [DetectionConfig::default(), permissive()] {
        let first = detect(buf.as_view(), &cfg).unwrap();
        let second = detect(buf.as_view(), &cfg).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn records_are_ordered_disjoint_and_in_bounds() {
    let buf = busy_signal();
    for cfg in [DetectionConfig::default(), permissive()] {
        let (holes, stats) = detect(buf.as_view(), &cfg).unwrap();
        assert!(!holes.is_empty());
        check_structure(&buf, &holes);
        assert_eq!(stats.detected, holes.len());
        assert_eq!(stats.candidates, stats.detected + stats.aborted());
    }
}

#[test]
fn shallow_break_enforces_depth_threshold() {
    let buf = busy_signal();
    let cfg = DetectionConfig::default();
    let (holes, _) = detect(buf.as_view(), &cfg).unwrap();
    for hole in &holes {
        assert!(hole.depth_percent >= cfg.depth_percentage_threshold * 100.0);
        assert!(!hole.flags.shallow);
    }
}

#[test]
fn wide_angle_break_enforces_angle_threshold() {
    let buf = busy_signal();
    let cfg = DetectionConfig {
        break_for_wide_angle: true,
        ..Default::default()
    };
    let (holes, _) = detect(buf.as_view(), &cfg).unwrap();
    for hole in &holes {
        let w = hole.w_angle_deg.expect("wide-angle break keeps only measured angles");
        assert!(w <= cfg.wide_angle_threshold);
    }
}

#[test]
fn small_cross_break_leaves_no_widened_records() {
    let buf = busy_signal();
    let cfg = DetectionConfig {
        small_threshold_cross_flag_samples: 4,
        ..Default::default()
    };
    let (holes, stats) = detect(buf.as_view(), &cfg).unwrap();
    assert_eq!(stats.small_threshold_cross_widened, 0);
    for hole in &holes {
        assert!(hole.cross_right - hole.cross_left > cfg.small_threshold_cross_flag_samples);
    }
}

#[test]
fn oversized_widening_is_clamped_to_the_signal() {
    let mut buf = flat(400, 10.0, 10.0);
    set_box(&mut buf, 200..203, 5.0);
    let cfg = DetectionConfig {
        small_threshold_cross_flag_samples: 10,
        small_threshold_cross_adjustment: usize::MAX,
        break_for_small_threshold_cross: false,
        ..Default::default()
    };
    assert!(cfg.validate().is_ok());

    let (holes, stats) = detect(buf.as_view(), &cfg).unwrap();
    assert_eq!(stats.small_threshold_cross_widened, 1);
    check_structure(&buf, &holes);
    for hole in &holes {
        assert_eq!((hole.cross_left, hole.cross_right), (0, 399));
    }
}

#[test]
fn fixed_rate_mode_ignores_timestamp_spacing() {
    let mut buf = flat(400, 10.0, 10.0);
    add_cosine_dip(&mut buf, 200, 10, 5.0);
    for t in &mut buf.times {
        *t *= 3.0;
    }
    let fixed = DetectionConfig {
        sampling_rate_mode: SamplingRateMode::Fixed,
        fixed_sampling_rate: 10.0,
        ..Default::default()
    };
    let report = HoleDetector::new(fixed)
        .process_with_diagnostics(buf.as_view())
        .unwrap();
    assert_eq!(report.trace.input.sampling_rate, 10.0);
    assert_eq!(report.trace.input.slow_window_samples, 100);
    assert_eq!(report.holes.len(), 1);
}
