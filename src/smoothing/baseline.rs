//! Slow and fast baselines used by the threshold-crossing scanner and the
//! peak locator.

/// Scaled centered moving averages of the magnitude.
///
/// `slow` drives coarse region detection, `fast` the peak search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Baselines {
    pub slow: Vec<f64>,
    pub fast: Vec<f64>,
}

impl Baselines {
    /// Scales precomputed rolling means by `mean_threshold`. Values below 1.0
    /// make the baseline undercut the signal, so only deeper dips cross it.
    pub fn from_means(slow_mean: &[f64], fast_mean: &[f64], mean_threshold: f64) -> Self {
        let scale = |mean: &[f64]| -> Vec<f64> {
            mean.iter().map(|m| m * mean_threshold).collect()
        };
        Self {
            slow: scale(slow_mean),
            fast: scale(fast_mean),
        }
    }
}
