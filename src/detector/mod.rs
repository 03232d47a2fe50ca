//! Hole detector orchestrating a multi-stage threshold-crossing scan.
//!
//! Overview
//! - Estimates the sampling rate and converts every window from seconds to
//!   samples.
//! - Smooths the magnitude once into a slow and a fast baseline (scaled by
//!   `mean_threshold`) and a wide-window lower bound `mean - std`.
//! - Scans for runs below the slow baseline. Each run becomes a candidate
//!   that passes peak location, asymmetry resolution, the depth filter, the
//!   boundary/angle calculator and the complexity scorer, strictly in order.
//! - Every filter either aborts the candidate or flags it and lets it
//!   continue, as selected by its `break_for_*` switch.
//!
//! Modules
//! - [`params`] – the flat [`DetectionConfig`] and its validation.
//! - [`pipeline`] – the [`HoleDetector`] orchestrator and the stage modules.
//! - [`outcome`] – [`HoleCandidate`] and the [`DetectionOutcome`] variants
//!   every stage returns.
//! - `workspace` – per-run cache of rolling statistics.
//! - [`parallel`] – optional chunked scan.
//!
//! Key Ideas
//! - Aborts are values, not errors; the scan loop alone decides where the
//!   cursor goes next, and it always moves forward.
//! - Accepted holes never overlap: the next left peak is searched strictly
//!   after the previous right peak.

pub mod outcome;
pub mod parallel;
pub mod params;
pub mod pipeline;
mod workspace;

pub use outcome::{DetectionOutcome, HoleCandidate};
pub use parallel::detect_parallel;
pub use params::DetectionConfig;
pub use pipeline::{detect, HoleDetector};
