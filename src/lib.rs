#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod types;

// Supporting modules: smoothing primitives, geometry and tool-side I/O.
pub mod angle;
pub mod config;
pub mod io;
pub mod smoothing;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{detect, detect_parallel, DetectionConfig, HoleDetector};
pub use crate::error::{ConfigurationError, DetectionError, InputError};
pub use crate::types::{HoleFlags, HoleRecord, Signal, SignalBuffer};

// Per-run statistics and the detailed report.
pub use crate::diagnostics::{DetectionReport, DetectionStats, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use mag_hole_detector::prelude::*;
/// use nalgebra::Vector3;
///
/// let times = [0.0, 0.1, 0.2];
/// let magnitude = [5.0, 5.0, 5.0];
/// let vector = [Vector3::new(5.0, 0.0, 0.0); 3];
/// let (holes, _stats) =
///     detect(Signal::new(&times, &magnitude, &vector), &DetectionConfig::default()).unwrap();
/// assert!(holes.is_empty());
/// ```
pub mod prelude {
    pub use crate::smoothing::SamplingRateMode;
    pub use crate::{detect, DetectionConfig, DetectionStats, HoleDetector, HoleRecord, Signal};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage primitives operating on plain slices.
    pub use crate::detector::pipeline::asymmetry::{
        find_reentry, first_symmetric_match, peak_asymmetry,
    };
    pub use crate::detector::pipeline::boundary::inner_boundaries;
    pub use crate::detector::pipeline::complexity::count_zero_crossings;
    pub use crate::detector::pipeline::crossing::{
        next_crossing, Crossing, ScanStep, SmallCrossRule,
    };
    pub use crate::detector::pipeline::depth::{depth_percent, reference_level};
    pub use crate::detector::pipeline::peaks::{left_peak, right_peak};

    // Outcome of a candidate passing a stage.
    pub use crate::detector::{DetectionOutcome, HoleCandidate};
}
