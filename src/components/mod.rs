pub mod aerodynamics;
pub mod aircraft;
pub mod spatial;

pub use aerodynamics::{AeroCoefficients, AeroOutput};
pub use aircraft::*;
pub use spatial::BodyKinematics;
