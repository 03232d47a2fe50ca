//! Smoothing primitives shared by the detector stages.
//!
//! - [`window`] – centered rolling mean / standard deviation in O(N) via
//!   prefix sums, with windows that shrink at the array edges.
//! - [`rate`] – sampling-rate estimation from timestamps or a fixed fallback.
//! - [`baseline`] – the slow and fast baselines the scanner compares against.
//!
//! Window lengths are always expressed in samples here; conversions from
//! seconds go through [`window_samples`].

pub mod baseline;
pub mod rate;
pub mod window;

pub use baseline::Baselines;
pub use rate::{estimate_sampling_rate, SamplingRateMode};
pub use window::{mean_of, rolling_mean, rolling_mean_std, window_samples, RollingStats};
