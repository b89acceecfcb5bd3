mod aerodynamics;

pub use aerodynamics::{AeroAircraftBundle, AerodynamicsPlugin, AerodynamicsSet};
