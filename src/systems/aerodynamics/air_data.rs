use bevy::prelude::*;

use crate::components::{BodyKinematics, ControlSurfaces, FlightState};
use crate::resources::AtmosphereConfig;

/// Rebuilds each aircraft's `FlightState` from its body kinematics, the latest control
/// deflections and the current atmosphere.
pub fn air_data_system(
    mut aircraft: Query<(&BodyKinematics, &ControlSurfaces, &mut FlightState)>,
    atmosphere: Res<AtmosphereConfig>,
) {
    for (kinematics, controls, mut state) in aircraft.iter_mut() {
        *state = FlightState::from_body_velocity(
            kinematics.velocity,
            kinematics.angular_velocity,
            atmosphere.speed_of_sound,
            *controls,
        );
    }
}
