//! Fatal errors raised before any scanning begins.
//!
//! Per-candidate aborts are not errors; they travel as
//! [`DetectionOutcome`](crate::detector::DetectionOutcome) values and are
//! counted in [`DetectionStats`](crate::diagnostics::DetectionStats).

use thiserror::Error;

/// Invalid detector configuration, including sampling-rate estimation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("`{name}` must be finite and > 0, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("`{name}` must be finite and >= 0, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("`{name}` must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("calculated sampling rate needs at least 2 timestamps, got {got}")]
    TooFewTimestamps { got: usize },

    #[error("calculated sampling rate needs a positive duration, got {duration} s")]
    NonPositiveDuration { duration: f64 },
}

/// Malformed input signal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error(
        "signal arrays differ in length: times={times} magnitude={magnitude} vector={vector}"
    )]
    MismatchedLengths {
        times: usize,
        magnitude: usize,
        vector: usize,
    },

    #[error("timestamps must be strictly increasing (violated at index {index})")]
    NonIncreasingTimes { index: usize },

    #[error("non-finite sample at index {index}")]
    NonFinite { index: usize },
}

/// Error returned by a detection run. No partial results accompany it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectionError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("invalid input: {0}")]
    Input(#[from] InputError),
}
