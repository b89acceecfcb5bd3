use nalgebra::Vector3;
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

/// Body-frame velocity for a given airspeed, angle of attack and sideslip.
pub fn body_velocity_from_air_data(true_airspeed: f64, alpha: f64, beta: f64) -> Vector3<f64> {
    let u = true_airspeed * alpha.cos() * beta.cos();
    let v = true_airspeed * beta.sin();
    let w = true_airspeed * alpha.sin() * beta.cos();

    Vector3::new(u, v, w)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}
