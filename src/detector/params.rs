//! Parameter types configuring the hole detector stages.
//!
//! All knobs live in one flat [`DetectionConfig`] so that it serializes as a
//! plain key/value object. Every field has a default, so a JSON object with
//! any subset of keys deserializes.
//!
//! Defaults target magnetometer data sampled at a few to a few tens of Hz.
//! For tuning, start with `mean_threshold`, the two baseline windows and
//! `depth_percentage_threshold`.

use crate::error::ConfigurationError;
use crate::smoothing::SamplingRateMode;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters controlling the multi-stage scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Whether the sampling rate comes from the timestamps or is fixed.
    pub sampling_rate_mode: SamplingRateMode,
    /// Samples per second used in fixed mode.
    pub fixed_sampling_rate: f64,
    /// Window of the slow baseline (seconds).
    pub slow_window_seconds: f64,
    /// Window of the fast baseline (seconds).
    pub fast_window_seconds: f64,
    /// Scale applied to both baselines.
    pub mean_threshold: f64,
    /// Look-around of the peak locator and of the re-entry scan (seconds).
    pub peak_search_seconds: f64,
    /// Lookahead for a symmetric right peak during asymmetry resolution (seconds).
    pub symmetrical_peak_scan_window_seconds: f64,
    /// Maximum relative difference between the bounding peaks.
    #[serde(alias = "asymetric_peak_threshold")]
    pub asymmetric_peak_threshold: f64,
    /// Minimum depth as a fraction of the local reference level.
    pub depth_percentage_threshold: f64,
    /// Length of the reference slices beside each peak (seconds).
    #[serde(alias = "Bave_scan_seconds")]
    pub bave_scan_seconds: f64,
    /// Window of the boundary lower bound statistics (seconds).
    #[serde(alias = "Bave_window_seconds")]
    pub bave_window_seconds: f64,
    /// Maximum field rotation across the hole (degrees).
    pub wide_angle_threshold: f64,
    /// Smoothing window of the complexity scorer (seconds).
    pub derivative_window_seconds: f64,
    /// Derivative sign changes at which a hole counts as complex in shape.
    pub threshold_for_derivative_0_crossings_flag: usize,
    /// Crossings with `right - left` at or below this are "small".
    pub small_threshold_cross_flag_samples: usize,
    /// Samples added on both sides when a small crossing is widened.
    pub small_threshold_cross_adjustment: usize,
    /// Skip small crossings (`true`) or widen them (`false`).
    pub break_for_small_threshold_cross: bool,
    pub break_for_complex_hole: bool,
    #[serde(alias = "break_for_asymmetry")]
    pub break_for_assymettry: bool,
    pub break_for_shallow_hole: bool,
    pub break_for_wide_angle: bool,
    pub break_for_derivative_crossings: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sampling_rate_mode: SamplingRateMode::Calculated,
            fixed_sampling_rate: 10.0,
            slow_window_seconds: 10.0,
            fast_window_seconds: 0.5,
            mean_threshold: 0.95,
            peak_search_seconds: 1.0,
            symmetrical_peak_scan_window_seconds: 2.0,
            asymmetric_peak_threshold: 0.25,
            depth_percentage_threshold: 0.25,
            bave_scan_seconds: 1.0,
            bave_window_seconds: 20.0,
            wide_angle_threshold: 90.0,
            derivative_window_seconds: 0.3,
            threshold_for_derivative_0_crossings_flag: 4,
            small_threshold_cross_flag_samples: 1,
            small_threshold_cross_adjustment: 3,
            break_for_small_threshold_cross: true,
            break_for_complex_hole: false,
            break_for_assymettry: true,
            break_for_shallow_hole: true,
            break_for_wide_angle: false,
            break_for_derivative_crossings: false,
        }
    }
}

impl DetectionConfig {
    /// Checks every threshold; the first violation is returned.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let positive = [
            ("fixed_sampling_rate", self.fixed_sampling_rate),
            ("slow_window_seconds", self.slow_window_seconds),
            ("fast_window_seconds", self.fast_window_seconds),
            ("mean_threshold", self.mean_threshold),
            ("peak_search_seconds", self.peak_search_seconds),
            (
                "symmetrical_peak_scan_window_seconds",
                self.symmetrical_peak_scan_window_seconds,
            ),
            ("bave_scan_seconds", self.bave_scan_seconds),
            ("bave_window_seconds", self.bave_window_seconds),
            ("derivative_window_seconds", self.derivative_window_seconds),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigurationError::NonPositive { name, value });
            }
        }

        let non_negative = [
            ("asymmetric_peak_threshold", self.asymmetric_peak_threshold),
            ("depth_percentage_threshold", self.depth_percentage_threshold),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigurationError::Negative { name, value });
            }
        }

        if !(0.0..=180.0).contains(&self.wide_angle_threshold) {
            return Err(ConfigurationError::OutOfRange {
                name: "wide_angle_threshold",
                value: self.wide_angle_threshold,
                min: 0.0,
                max: 180.0,
            });
        }
        if self.threshold_for_derivative_0_crossings_flag == 0 {
            return Err(ConfigurationError::NonPositive {
                name: "threshold_for_derivative_0_crossings_flag",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Largest look-around distance of any stage (seconds). Chunked scans pad
    /// each chunk by at least this much.
    pub fn max_look_around_seconds(&self) -> f64 {
        [
            self.slow_window_seconds,
            self.fast_window_seconds,
            self.peak_search_seconds + self.symmetrical_peak_scan_window_seconds,
            self.bave_window_seconds,
            self.bave_scan_seconds + self.peak_search_seconds,
        ]
        .into_iter()
        .fold(2.0, f64::max)
    }
}
