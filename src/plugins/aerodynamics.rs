use bevy::prelude::*;

use crate::components::{AeroOutput, AircraftConfig, BodyKinematics, ControlSurfaces, FlightState};
use crate::resources::AtmosphereConfig;
use crate::systems::{aero_force_system, air_data_system};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum AerodynamicsSet {
    AirData,
    Forces,
}

/// Adds the air data and aerodynamic force systems to `FixedUpdate`.
///
/// Aircraft entities need `AircraftConfig`, `BodyKinematics`, `ControlSurfaces`,
/// `FlightState` and `AeroOutput`; see [`AeroAircraftBundle`]. The host's integrator
/// should run after `AerodynamicsSet::Forces` and read `AeroOutput`.
#[derive(Default)]
pub struct AerodynamicsPlugin {
    pub atmosphere: Option<AtmosphereConfig>,
}

impl AerodynamicsPlugin {
    pub fn new() -> Self {
        Self { atmosphere: None }
    }

    pub fn with_atmosphere(atmosphere: AtmosphereConfig) -> Self {
        Self {
            atmosphere: Some(atmosphere),
        }
    }
}

impl Plugin for AerodynamicsPlugin {
    fn build(&self, app: &mut App) {
        match self.atmosphere {
            Some(atmosphere) => {
                app.insert_resource(atmosphere);
            }
            None => {
                app.init_resource::<AtmosphereConfig>();
            }
        }

        app.configure_sets(
            FixedUpdate,
            (AerodynamicsSet::AirData, AerodynamicsSet::Forces).chain(),
        )
        .add_systems(
            FixedUpdate,
            (
                air_data_system.in_set(AerodynamicsSet::AirData),
                aero_force_system.in_set(AerodynamicsSet::Forces),
            ),
        );

        debug!("Aerodynamics systems registered in FixedUpdate");
    }
}

/// Everything an entity needs to be picked up by [`AerodynamicsPlugin`].
#[derive(Bundle, Default)]
pub struct AeroAircraftBundle {
    pub config: AircraftConfig,
    pub kinematics: BodyKinematics,
    pub controls: ControlSurfaces,
    pub state: FlightState,
    pub output: AeroOutput,
}

impl AeroAircraftBundle {
    pub fn new(config: AircraftConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_kinematics(mut self, kinematics: BodyKinematics) -> Self {
        self.kinematics = kinematics;
        self
    }

    pub fn with_controls(mut self, controls: ControlSurfaces) -> Self {
        self.controls = controls;
        self
    }
}
