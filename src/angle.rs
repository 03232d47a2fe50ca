//! Angle utilities for field-vector comparisons.

use nalgebra::Vector3;

const NORM_EPS: f64 = 1e-12;

/// Computes the unsigned angle between two 3D vectors in degrees.
///
/// Returns a value in [0, 180]. `None` when either vector has (near) zero
/// norm, since the direction is undefined there.
#[inline]
pub fn angle_between_deg(a: &Vector3<f64>, b: &Vector3<f64>) -> Option<f64> {
    let na = a.norm();
    let nb = b.norm();
    if na < NORM_EPS || nb < NORM_EPS {
        return None;
    }
    let cos = (a.dot(b) / (na * nb)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}
