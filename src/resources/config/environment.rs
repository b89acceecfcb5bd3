use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_SPEED_OF_SOUND};

/// Atmospheric properties consumed by the aerodynamic systems.
///
/// Whatever atmosphere model the host runs writes its current values here; the default
/// is the ISA sea-level day.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    /// Air density (kg/m³).
    pub density: f64,
    /// Local speed of sound (m/s).
    pub speed_of_sound: f64,
}

impl AtmosphereConfig {
    pub fn new(density: f64, speed_of_sound: f64) -> Self {
        Self {
            density,
            speed_of_sound,
        }
    }
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self::new(ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_SPEED_OF_SOUND)
    }
}
