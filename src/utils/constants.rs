pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_SEA_LEVEL_SPEED_OF_SOUND: f64 = 340.294; // m/s

/// Airspeed below which rate-dependent coefficient terms are zeroed (m/s).
pub const MIN_AIRSPEED: f64 = 1e-3;
