#![allow(dead_code)]

use mag_hole_detector::SignalBuffer;
use nalgebra::Vector3;

/// Flat field of `level` sampled at `rate` Hz, pointing along +z.
pub fn flat(n: usize, rate: f64, level: f64) -> SignalBuffer {
    SignalBuffer {
        times: (0..n).map(|i| i as f64 / rate).collect(),
        magnitude: vec![level; n],
        vector: vec![Vector3::new(0.0, 0.0, level); n],
    }
}

/// Cosine-shaped dip of `depth` centred on `center`, spanning
/// `2 * half_width` samples; the centre sample reaches `level - depth`.
pub fn add_cosine_dip(buf: &mut SignalBuffer, center: usize, half_width: usize, depth: f64) {
    let hw = half_width as f64;
    for k in -(half_width as i64)..=(half_width as i64) {
        let i = (center as i64 + k) as usize;
        let drop = 0.5 * depth * (1.0 + (std::f64::consts::PI * k as f64 / hw).cos());
        buf.magnitude[i] -= drop;
    }
    sync_vectors(buf);
}

/// Sets `range` to a constant `value`.
pub fn set_box(buf: &mut SignalBuffer, range: std::ops::Range<usize>, value: f64) {
    for v in &mut buf.magnitude[range] {
        *v = value;
    }
    sync_vectors(buf);
}

/// Rotates the field direction in the x-z plane from 0 to `total_deg`
/// linearly across `range`; samples after the range keep the final angle.
pub fn rotate_across(buf: &mut SignalBuffer, range: std::ops::Range<usize>, total_deg: f64) {
    let span = (range.end - range.start).max(1) as f64;
    for i in 0..buf.magnitude.len() {
        let frac = if i < range.start {
            0.0
        } else if i >= range.end {
            1.0
        } else {
            (i - range.start) as f64 / span
        };
        let theta = (total_deg * frac).to_radians();
        let b = buf.magnitude[i];
        buf.vector[i] = Vector3::new(b * theta.sin(), 0.0, b * theta.cos());
    }
}

/// Adds deterministic pseudo-random noise with amplitude `amp`.
pub fn add_noise(buf: &mut SignalBuffer, amp: f64, seed: u64) {
    let mut state = seed.max(1);
    for v in &mut buf.magnitude {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
        *v += amp * (2.0 * unit - 1.0);
    }
    sync_vectors(buf);
}

/// Rescales the vectors so their norm matches the magnitude, keeping direction.
fn sync_vectors(buf: &mut SignalBuffer) {
    for (v, &b) in buf.vector.iter_mut().zip(&buf.magnitude) {
        let norm = v.norm();
        if norm > 0.0 {
            *v *= b / norm;
        }
    }
}
