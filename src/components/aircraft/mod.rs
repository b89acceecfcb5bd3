pub mod config;
pub mod state;

pub use config::{
    AeroDerivatives, AircraftConfig, AircraftGeometry, AircraftSource, AircraftType, AlphaCurve,
    AngleUnit, CoefficientClamp, ConfigError, CurveError, DragCoefficients, LiftCoefficients,
    LiftDerivatives, LiftModel, MachDragRise, PitchCoefficients, PitchDerivatives, PitchModel,
    RawAircraftConfig, RollCoefficients, SideForceCoefficients, YawCoefficients,
};
pub use state::{ControlSurfaces, FlightState};
