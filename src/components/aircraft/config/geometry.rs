use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Reference geometry used to dimensionalise the aerodynamic coefficients.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// Reference wing area `Sref` (m²).
    pub wing_area: f64,
    /// The wingspan of the aircraft (m).
    pub wing_span: f64,
    /// The mean aerodynamic chord of the aircraft (m).
    pub mac: f64,
}

impl AircraftGeometry {
    /// Creates a new `AircraftGeometry` instance with the specified parameters.
    ///
    /// # Arguments
    /// * `wing_area` - The reference wing area of the aircraft (m²).
    /// * `wing_span` - The wing span of the aircraft (m).
    /// * `mac` - The mean aerodynamic chord (m).
    pub fn new(wing_area: f64, wing_span: f64, mac: f64) -> Self {
        AircraftGeometry {
            wing_area,
            wing_span,
            mac,
        }
    }

    pub fn trainer() -> Self {
        Self::new(30.0, 10.0, 3.0)
    }

    pub fn twin_otter() -> Self {
        Self::new(39.0, 19.8, 1.98)
    }
}

impl Default for AircraftGeometry {
    fn default() -> Self {
        Self::trainer()
    }
}
