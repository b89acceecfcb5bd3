pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{
    AeroCoefficients, AeroDerivatives, AeroOutput, AircraftConfig, AircraftGeometry,
    AircraftSource, AircraftType, BodyKinematics, ConfigError, ControlSurfaces, FlightState,
};
pub use plugins::{AeroAircraftBundle, AerodynamicsPlugin, AerodynamicsSet};
pub use resources::AtmosphereConfig;
pub use systems::{calculate_aero_output, calculate_coefficients, evaluate_batch, AeroRequest};
