mod aero_coef;
mod aircraft;
mod curve;
mod geometry;
mod loader;

pub use aero_coef::{
    AeroDerivatives, CoefficientClamp, DragCoefficients, LiftCoefficients, LiftDerivatives,
    LiftModel, MachDragRise, PitchCoefficients, PitchDerivatives, PitchModel, RollCoefficients,
    SideForceCoefficients, YawCoefficients,
};
pub use aircraft::{AircraftConfig, AircraftSource, AircraftType};
pub use curve::{AlphaCurve, AngleUnit, CurveError};
pub use geometry::AircraftGeometry;
pub use loader::{ConfigError, RawAircraftConfig};
