use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{body_velocity_from_air_data, MIN_AIRSPEED};

/// Normalized control-surface deflections, each in `[-1, 1]`.
///
/// Owned by the input layer; the aerodynamic model only ever reads a copy.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSurfaces {
    /// Aileron deflection δa.
    pub aileron: f64,
    /// Elevator deflection δe.
    pub elevator: f64,
    /// Rudder deflection δr.
    pub rudder: f64,
}

impl ControlSurfaces {
    pub fn new(aileron: f64, elevator: f64, rudder: f64) -> Self {
        Self {
            aileron,
            elevator,
            rudder,
        }
    }

    /// Returns a copy with every deflection limited to `[-1, 1]`.
    pub fn normalized(&self) -> Self {
        Self {
            aileron: self.aileron.clamp(-1.0, 1.0),
            elevator: self.elevator.clamp(-1.0, 1.0),
            rudder: self.rudder.clamp(-1.0, 1.0),
        }
    }
}

/// Per-tick flight condition seen by the aerodynamic model.
///
/// The coefficient model reads `true_airspeed`, `mach`, `alpha`, `beta`, the rates and
/// the controls. The force solver takes dynamic pressure from `true_airspeed` and the drag
/// direction from `velocity_body`. Both constructors derive the air data from a single
/// velocity so the two stay consistent; edit the fields directly only as a matched set.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Velocity of the body relative to the air mass, body axes (m/s).
    pub velocity_body: Vector3<f64>,
    /// Body rates (p, q, r) in rad/s.
    pub angular_velocity: Vector3<f64>,
    /// True airspeed (m/s).
    pub true_airspeed: f64,
    /// Airspeed over local speed of sound.
    pub mach: f64,
    /// Angle of attack α (rad).
    pub alpha: f64,
    /// Sideslip β (rad).
    pub beta: f64,
    pub controls: ControlSurfaces,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            velocity_body: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            true_airspeed: 0.0,
            mach: 0.0,
            alpha: 0.0,
            beta: 0.0,
            controls: ControlSurfaces::default(),
        }
    }
}

impl FlightState {
    /// Derives airspeed, Mach, α and β from the body-frame relative velocity.
    ///
    /// # Arguments
    /// * `velocity_body` - Velocity relative to the air mass in body axes (m/s).
    /// * `angular_velocity` - Body rates (rad/s).
    /// * `speed_of_sound` - Local speed of sound (m/s), from the atmosphere model.
    /// * `controls` - Normalized control deflections.
    pub fn from_body_velocity(
        velocity_body: Vector3<f64>,
        angular_velocity: Vector3<f64>,
        speed_of_sound: f64,
        controls: ControlSurfaces,
    ) -> Self {
        let airspeed = velocity_body.norm();

        let (alpha, beta) = if airspeed > MIN_AIRSPEED {
            (
                velocity_body.z.atan2(velocity_body.x),
                (velocity_body.y / airspeed).clamp(-1.0, 1.0).asin(),
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            velocity_body,
            angular_velocity,
            true_airspeed: airspeed,
            mach: mach_number(airspeed, speed_of_sound),
            alpha,
            beta,
            controls,
        }
    }

    /// Builds a state directly from air data, with zero rates and neutral controls.
    ///
    /// Mach is `true_airspeed / speed_of_sound`, or zero for a non-positive speed of sound.
    pub fn from_air_data(true_airspeed: f64, alpha: f64, beta: f64, speed_of_sound: f64) -> Self {
        Self {
            velocity_body: body_velocity_from_air_data(true_airspeed, alpha, beta),
            true_airspeed,
            mach: mach_number(true_airspeed, speed_of_sound),
            alpha,
            beta,
            ..Default::default()
        }
    }

    pub fn with_rates(mut self, p: f64, q: f64, r: f64) -> Self {
        self.angular_velocity = Vector3::new(p, q, r);
        self
    }

    pub fn with_controls(mut self, controls: ControlSurfaces) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_mach(mut self, mach: f64) -> Self {
        self.mach = mach;
        self
    }

    /// Dynamic pressure `0.5·ρ·V²` (Pa).
    pub fn dynamic_pressure(&self, density: f64) -> f64 {
        0.5 * density * self.true_airspeed * self.true_airspeed
    }

    /// Unit vector along the body's motion through the air, body axes. Drag acts
    /// against it. Falls back to body +x below the airspeed threshold.
    pub fn velocity_direction(&self) -> Vector3<f64> {
        let norm = self.velocity_body.norm();
        if norm > MIN_AIRSPEED {
            self.velocity_body / norm
        } else {
            Vector3::x()
        }
    }
}

fn mach_number(airspeed: f64, speed_of_sound: f64) -> f64 {
    if speed_of_sound > 0.0 {
        airspeed / speed_of_sound
    } else {
        0.0
    }
}
