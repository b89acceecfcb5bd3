use approx::assert_relative_eq;
use flyer_aero::{
    components::{
        AeroDerivatives, AircraftConfig, AircraftGeometry, AircraftSource, AircraftType,
        AngleUnit, ConfigError, FlightState, LiftModel, PitchModel,
    },
    systems::calculate_coefficients,
    utils::{deg_to_rad, ISA_SEA_LEVEL_SPEED_OF_SOUND as SPEED_OF_SOUND},
};
use pretty_assertions::assert_eq;
use std::io::Write;

use crate::common::{config_path, load_config};

#[test]
fn test_trainer_yaml_matches_programmed_trainer() {
    let loaded = load_config("trainer.yaml");
    let programmed = AircraftConfig::trainer();

    assert_eq!(loaded.name, "Trainer");
    assert_eq!(loaded.ac_type, AircraftType::Custom("Trainer".to_string()));
    assert_eq!(loaded.geometry, programmed.geometry);
    assert_eq!(loaded.aero_coef, programmed.aero_coef);
}

#[test]
fn test_twin_otter_json_matches_programmed_twin_otter() {
    let loaded = AircraftConfig::new(AircraftSource::File(config_path("twin_otter.json")))
        .expect("twin otter config should load");

    assert_eq!(loaded.geometry, AircraftGeometry::twin_otter());
    assert_eq!(loaded.aero_coef, AeroDerivatives::twin_otter());
}

#[test]
fn test_stall_curve_config_selects_curves() {
    let config = load_config("stall_curve.yaml");

    match &config.aero_coef.lift.model {
        LiftModel::Curve(curve) => {
            assert_eq!(curve.unit, AngleUnit::Degrees);
            assert_eq!(curve.domain(), Some((-20.0, 30.0)));
        }
        other => panic!("expected a lift curve, got {other:?}"),
    }
    assert!(matches!(config.aero_coef.pitch.model, PitchModel::Curve(_)));
    // Keys the file leaves out come from the trainer table.
    assert_eq!(config.geometry, AircraftGeometry::trainer());
    assert_eq!(config.aero_coef.yaw, AeroDerivatives::trainer().yaw);
}

#[test]
fn test_stall_curve_lift_through_the_stall() {
    let config = load_config("stall_curve.yaml");
    let c_l_at = |alpha_deg: f64| {
        let state = FlightState::from_air_data(50.0, deg_to_rad(alpha_deg), 0.0, SPEED_OF_SOUND);
        calculate_coefficients(&config.geometry, &config.aero_coef, &state).c_l
    };

    assert_relative_eq!(c_l_at(0.0), 0.2, epsilon = 1e-9);
    assert_relative_eq!(c_l_at(7.0), 0.875, epsilon = 1e-9);
    // Curve peak 1.55 is held at the configured CLmax.
    assert_relative_eq!(c_l_at(14.0), 1.5, epsilon = 1e-9);
    assert_relative_eq!(c_l_at(16.0), 1.375, epsilon = 1e-9);
    assert_relative_eq!(c_l_at(24.0), 1.05, epsilon = 1e-9);
    // Outside the keys the end values hold, then the clamp applies.
    assert_relative_eq!(c_l_at(45.0), 0.9, epsilon = 1e-9);
    assert_relative_eq!(c_l_at(-40.0), -0.9, epsilon = 1e-9);
}

#[test]
fn test_invalid_file_is_rejected_with_reason() {
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(file, "name: Broken\nuseCLvsAlphaCurve: true\nCLvsAlpha: []").unwrap();

    match AircraftConfig::from_file(file.path()) {
        Err(ConfigError::ValidationError(reason)) => assert!(reason.contains("CLvsAlpha")),
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    writeln!(file, "{{\"Sref\": }}").unwrap();

    assert!(matches!(
        AircraftConfig::from_file(file.path()),
        Err(ConfigError::JsonError(_))
    ));
}
