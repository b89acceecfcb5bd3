use flyer_aero::components::{AircraftConfig, BodyKinematics, ControlSurfaces};
use nalgebra::Vector3;
use std::path::PathBuf;

/// Path to one of the sample configurations shipped under `configs/`
pub fn config_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("configs")
        .join(file_name)
}

/// Loads a sample configuration, panicking with the loader error on failure
pub fn load_config(file_name: &str) -> AircraftConfig {
    let path = config_path(file_name);
    AircraftConfig::from_file(&path)
        .unwrap_or_else(|err| panic!("failed to load {}: {err}", path.display()))
}

/// Straight flight along body x with a small angle of attack
pub fn cruise_kinematics(airspeed: f64, alpha: f64) -> BodyKinematics {
    BodyKinematics::new(
        Vector3::new(airspeed * alpha.cos(), 0.0, airspeed * alpha.sin()),
        Vector3::zeros(),
    )
}

pub fn neutral_controls() -> ControlSurfaces {
    ControlSurfaces::default()
}
