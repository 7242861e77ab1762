use nalgebra::{Unit, UnitQuaternion, Vector3};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Normalize `v`, returning the zero vector when its length is at or below `tolerance`.
pub fn safe_normalize(v: &Vector3<f64>, tolerance: f64) -> Vector3<f64> {
    let norm = v.norm();
    if norm <= tolerance {
        Vector3::zeros()
    } else {
        v / norm
    }
}

/// Rotate `v` by `angle_deg` about `axis` (right-hand rule).
///
/// A degenerate axis leaves the vector unchanged.
pub fn rotate_about_axis(v: &Vector3<f64>, axis: &Vector3<f64>, angle_deg: f64) -> Vector3<f64> {
    match Unit::try_new(*axis, f64::EPSILON) {
        Some(axis) => UnitQuaternion::from_axis_angle(&axis, deg_to_rad(angle_deg)) * v,
        None => *v,
    }
}

/// Build an attitude from roll, pitch and yaw given in degrees.
pub fn attitude_from_degrees(roll: f64, pitch: f64, yaw: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_euler_angles(deg_to_rad(roll), deg_to_rad(pitch), deg_to_rad(yaw))
}
