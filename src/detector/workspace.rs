//! Per-run cache of rolling statistics.
//!
//! Several stages smooth the same magnitude array, sometimes with the same
//! window length (e.g. when the slow window equals the boundary window).
//! Entries are keyed by window length in samples and computed on demand; a
//! workspace never outlives the run that created it.
use crate::smoothing::{rolling_mean_std, Baselines, RollingStats};
use log::trace;

/// Workspace storing rolling statistics of one magnitude array.
pub struct ScanWorkspace<'a> {
    magnitude: &'a [f64],
    entries: Vec<(usize, RollingStats)>,
    hits: usize,
}

impl<'a> ScanWorkspace<'a> {
    pub fn new(magnitude: &'a [f64]) -> Self {
        Self {
            magnitude,
            entries: Vec::new(),
            hits: 0,
        }
    }

    fn ensure(&mut self, window: usize) -> usize {
        let window = window.max(1);
        if let Some(slot) = self.entries.iter().position(|(w, _)| *w == window) {
            self.hits += 1;
            return slot;
        }
        self.entries
            .push((window, rolling_mean_std(self.magnitude, window)));
        trace!(
            "ScanWorkspace computed rolling stats window={} n={}",
            window,
            self.magnitude.len()
        );
        self.entries.len() - 1
    }

    /// Rolling mean and standard deviation for `window` samples.
    pub fn stats(&mut self, window: usize) -> &RollingStats {
        let slot = self.ensure(window);
        &self.entries[slot].1
    }

    /// Slow and fast baselines scaled by `mean_threshold`.
    pub fn baselines(&mut self, slow: usize, fast: usize, mean_threshold: f64) -> Baselines {
        let slow = self.ensure(slow);
        let fast = self.ensure(fast);
        Baselines::from_means(
            &self.entries[slow].1.mean,
            &self.entries[fast].1.mean,
            mean_threshold,
        )
    }

    /// `mean - std` over `window` samples: the lower bound the boundary
    /// calculator compares the magnitude against.
    pub fn lower_bound(&mut self, window: usize) -> Vec<f64> {
        let stats = self.stats(window);
        stats
            .mean
            .iter()
            .zip(&stats.std)
            .map(|(m, s)| m - s)
            .collect()
    }

    /// Number of requests served from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }
}
