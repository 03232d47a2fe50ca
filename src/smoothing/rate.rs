use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// How the sampling rate of a run is obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingRateMode {
    /// Use the configured fallback rate.
    Fixed,
    /// Derive the mean rate from the timestamps.
    #[default]
    Calculated,
}

/// Returns samples per second: `(N - 1) / (t[N-1] - t[0])` in calculated
/// mode, `fixed_rate` otherwise.
pub fn estimate_sampling_rate(
    times: &[f64],
    fixed_rate: f64,
    mode: SamplingRateMode,
) -> Result<f64, ConfigurationError> {
    match mode {
        SamplingRateMode::Fixed => Ok(fixed_rate),
        SamplingRateMode::Calculated => {
            let (first, last) = match (times.first(), times.last()) {
                (Some(&first), Some(&last)) if times.len() >= 2 => (first, last),
                _ => return Err(ConfigurationError::TooFewTimestamps { got: times.len() }),
            };
            let duration = last - first;
            if !(duration.is_finite() && duration > 0.0) {
                return Err(ConfigurationError::NonPositiveDuration { duration });
            }
            Ok((times.len() - 1) as f64 / duration)
        }
    }
}
