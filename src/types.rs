use crate::error::InputError;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Borrowed view of a cleaned magnetometer time series.
///
/// `times` are seconds, `magnitude` is the field strength and `vector` the
/// field vector, all aligned index-for-index.
#[derive(Clone, Copy, Debug)]
pub struct Signal<'a> {
    pub times: &'a [f64],
    pub magnitude: &'a [f64],
    pub vector: &'a [Vector3<f64>],
}

impl<'a> Signal<'a> {
    pub fn new(times: &'a [f64], magnitude: &'a [f64], vector: &'a [Vector3<f64>]) -> Self {
        Self {
            times,
            magnitude,
            vector,
        }
    }

    /// Number of samples (taken from `magnitude`).
    #[inline]
    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// Fails when the three arrays disagree in length.
    pub fn check_lengths(&self) -> Result<(), InputError> {
        let (t, m, v) = (self.times.len(), self.magnitude.len(), self.vector.len());
        if t != m || m != v {
            return Err(InputError::MismatchedLengths {
                times: t,
                magnitude: m,
                vector: v,
            });
        }
        Ok(())
    }

    /// Fails on non-increasing timestamps or non-finite samples.
    pub fn check_samples(&self) -> Result<(), InputError> {
        let finite_vec = |v: &Vector3<f64>| v.iter().all(|c| c.is_finite());
        for index in 0..self.len() {
            if !self.times[index].is_finite()
                || !self.magnitude[index].is_finite()
                || !finite_vec(&self.vector[index])
            {
                return Err(InputError::NonFinite { index });
            }
        }
        for (index, pair) in self.times.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(InputError::NonIncreasingTimes { index: index + 1 });
            }
        }
        Ok(())
    }

    /// Sub-view covering `range`; used by the chunked scan.
    pub fn slice(&self, range: std::ops::Range<usize>) -> Signal<'a> {
        Signal {
            times: &self.times[range.clone()],
            magnitude: &self.magnitude[range.clone()],
            vector: &self.vector[range],
        }
    }
}

/// Owned signal buffer, serializable for tools and tests.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SignalBuffer {
    pub times: Vec<f64>,
    pub magnitude: Vec<f64>,
    pub vector: Vec<Vector3<f64>>,
}

impl SignalBuffer {
    /// Borrow as a read-only [`Signal`] view.
    pub fn as_view(&self) -> Signal<'_> {
        Signal {
            times: &self.times,
            magnitude: &self.magnitude,
            vector: &self.vector,
        }
    }
}

/// Flags accumulated by a candidate on its way through the pipeline.
///
/// A flag is only ever observed on an emitted record when the matching
/// `break_for_*` switch was off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleFlags {
    /// Bounding peaks were asymmetric before resolution.
    pub asymmetric_initial: bool,
    /// Peaks required asymmetry resolution.
    pub complex: bool,
    /// Peaks stayed asymmetric after resolution.
    pub unresolved_asymmetry: bool,
    pub shallow: bool,
    pub wide_angle: bool,
    pub derivative_crossings: bool,
}

/// One detected magnetic hole. Indices refer to the scanned signal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleRecord {
    pub left_peak: usize,
    pub left_peak_value: f64,
    pub right_peak: usize,
    pub right_peak_value: f64,
    /// First sample below the slow baseline.
    pub cross_left: usize,
    /// Last sample below the slow baseline.
    pub cross_right: usize,
    pub min_index: usize,
    pub min_value: f64,
    /// Inner boundary crossings; `None` when the lower bound is never reached.
    pub t_start: Option<usize>,
    pub t_end: Option<usize>,
    /// Angle between the field vectors at `t_start` and `t_end` (degrees).
    pub w_angle_deg: Option<f64>,
    pub depth_percent: f64,
    pub zero_crossings: usize,
    pub start_time: f64,
    pub end_time: f64,
    pub flags: HoleFlags,
}

impl HoleRecord {
    /// Offset every index by `offset`; used when merging chunked scans.
    pub(crate) fn shifted(mut self, offset: usize) -> Self {
        self.left_peak += offset;
        self.right_peak += offset;
        self.cross_left += offset;
        self.cross_right += offset;
        self.min_index += offset;
        self.t_start = self.t_start.map(|t| t + offset);
        self.t_end = self.t_end.map(|t| t + offset);
        self
    }

    /// Duration between the bounding peaks in seconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_is_reported() {
        let times = [0.0, 0.1, 0.2];
        let magnitude = [1.0, 1.0];
        let vector = [Vector3::zeros(); 3];
        let err = Signal::new(&times, &magnitude, &vector)
            .check_lengths()
            .unwrap_err();
        assert_eq!(
            err,
            InputError::MismatchedLengths {
                times: 3,
                magnitude: 2,
                vector: 3
            }
        );
    }

    #[test]
    fn repeated_timestamp_is_rejected() {
        let times = [0.0, 0.1, 0.1];
        let magnitude = [1.0; 3];
        let vector = [Vector3::zeros(); 3];
        let err = Signal::new(&times, &magnitude, &vector)
            .check_samples()
            .unwrap_err();
        assert_eq!(err, InputError::NonIncreasingTimes { index: 2 });
    }

    #[test]
    fn nan_sample_is_rejected() {
        let times = [0.0, 0.1, 0.2];
        let magnitude = [1.0, f64::NAN, 1.0];
        let vector = [Vector3::zeros(); 3];
        let err = Signal::new(&times, &magnitude, &vector)
            .check_samples()
            .unwrap_err();
        assert_eq!(err, InputError::NonFinite { index: 1 });
    }
}
