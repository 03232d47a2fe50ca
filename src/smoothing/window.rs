//! Centered windowed statistics.
//!
//! For index `i` and window length `w` the window covers
//! `[i - w/2, i + (w-1)/2]`, clipped to the array. Near the edges the window
//! simply holds fewer samples, so every index gets a defined value.

/// Per-index rolling mean and sample standard deviation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RollingStats {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl RollingStats {
    #[inline]
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

/// Converts a window duration into a sample count, clamped to at least 1.
#[inline]
pub fn window_samples(seconds: f64, sampling_rate: f64) -> usize {
    let samples = (seconds * sampling_rate).round();
    if samples.is_finite() && samples >= 1.0 {
        samples as usize
    } else {
        1
    }
}

/// Half-open bounds of the centered window around `i`.
#[inline]
fn centered_bounds(i: usize, len: usize, window: usize) -> (usize, usize) {
    let lo = i.saturating_sub(window / 2);
    let hi = (i + (window - 1) / 2 + 1).min(len);
    (lo, hi)
}

/// Centered rolling mean. `window` below 1 is treated as 1.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let n = values.len();
    // Shifting by the first sample keeps the prefix sums small.
    let shift = values.first().copied().unwrap_or(0.0);
    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0.0f64);
    let mut acc = 0.0f64;
    for &v in values {
        acc += v - shift;
        prefix.push(acc);
    }

    (0..n)
        .map(|i| {
            let (lo, hi) = centered_bounds(i, n, window);
            shift + (prefix[hi] - prefix[lo]) / (hi - lo) as f64
        })
        .collect()
}

/// Centered rolling mean and sample standard deviation (`n - 1` divisor;
/// a single-sample window has zero deviation).
pub fn rolling_mean_std(values: &[f64], window: usize) -> RollingStats {
    let window = window.max(1);
    let n = values.len();
    let shift = values.first().copied().unwrap_or(0.0);
    let mut sum = Vec::with_capacity(n + 1);
    let mut sum_sq = Vec::with_capacity(n + 1);
    sum.push(0.0f64);
    sum_sq.push(0.0f64);
    let (mut acc, mut acc_sq) = (0.0f64, 0.0f64);
    for &v in values {
        let d = v - shift;
        acc += d;
        acc_sq += d * d;
        sum.push(acc);
        sum_sq.push(acc_sq);
    }

    let mut mean = Vec::with_capacity(n);
    let mut std = Vec::with_capacity(n);
    for i in 0..n {
        let (lo, hi) = centered_bounds(i, n, window);
        let count = (hi - lo) as f64;
        let s = sum[hi] - sum[lo];
        let s2 = sum_sq[hi] - sum_sq[lo];
        let m = s / count;
        mean.push(shift + m);
        if hi - lo > 1 {
            let var = ((s2 - count * m * m) / (count - 1.0)).max(0.0);
            std.push(var.sqrt());
        } else {
            std.push(0.0);
        }
    }
    RollingStats { mean, std }
}

/// Arithmetic mean of a slice, `None` when empty.
#[inline]
pub fn mean_of(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
