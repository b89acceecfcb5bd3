use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Body-axis motion supplied by the external rigid-body integrator each tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyKinematics {
    /// Velocity relative to the air mass, body axes [m/s]
    pub velocity: Vector3<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for BodyKinematics {
    fn default() -> Self {
        Self {
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl BodyKinematics {
    pub fn new(velocity: Vector3<f64>, angular_velocity: Vector3<f64>) -> Self {
        Self {
            velocity,
            angular_velocity,
        }
    }
}
