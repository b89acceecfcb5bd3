use approx::assert_relative_eq;
use flyer_aero::{
    components::{AeroOutput, AircraftConfig, BodyKinematics, ControlSurfaces},
    resources::AtmosphereConfig,
    systems::calculate_aero_output,
    utils::{ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_SPEED_OF_SOUND},
};
use nalgebra::Vector3;

use crate::common::{
    assert_output_finite, assert_output_zero, assert_vector_eq, cruise_kinematics,
    neutral_controls, TestAppBuilder,
};

#[test]
fn test_cruise_produces_lift_and_drag() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            AircraftConfig::trainer(),
            cruise_kinematics(50.0, 0.05),
            neutral_controls(),
        )
        .build();

    app.run_steps(1);

    let state = app.flight_state(0);
    assert_relative_eq!(state.alpha, 0.05, epsilon = 1e-12);
    assert_relative_eq!(state.beta, 0.0, epsilon = 1e-12);
    assert_relative_eq!(state.mach, 50.0 / ISA_SEA_LEVEL_SPEED_OF_SOUND, epsilon = 1e-12);

    let output = app.output(0);
    assert_output_finite(&output);
    assert_relative_eq!(output.coefficients.c_l, 0.475, epsilon = 1e-9);
    assert!(output.force.z < 0.0, "lift should point up the body z axis");
    assert!(output.force.x < 0.0, "drag should retard forward motion");

    let expected = calculate_aero_output(&AircraftConfig::trainer(), &state, ISA_SEA_LEVEL_DENSITY);
    assert_eq!(output, expected);
}

#[test]
fn test_stationary_aircraft_has_no_loads() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            AircraftConfig::trainer(),
            BodyKinematics::new(Vector3::zeros(), Vector3::new(0.5, -0.5, 0.2)),
            ControlSurfaces::new(1.0, -1.0, 1.0),
        )
        .build();

    app.run_steps(3);

    let output = app.output(0);
    assert_output_finite(&output);
    assert_output_zero(&output);
}

#[test]
fn test_elevator_pitches_nose_down() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            AircraftConfig::trainer(),
            cruise_kinematics(60.0, 0.04),
            neutral_controls(),
        )
        .build();

    app.run_steps(1);
    let neutral = app.output(0);

    app.set_controls(0, ControlSurfaces::new(0.0, 0.5, 0.0));
    app.run_steps(1);
    let deflected = app.output(0);

    let q_s = 0.5 * ISA_SEA_LEVEL_DENSITY * 60.0 * 60.0 * 30.0;
    assert_relative_eq!(
        deflected.torque.y - neutral.torque.y,
        q_s * 3.0 * -1.1 * 0.5,
        epsilon = 1e-6
    );
    assert_relative_eq!(
        deflected.coefficients.c_l - neutral.coefficients.c_l,
        0.7 * 0.5,
        epsilon = 1e-9
    );
}

#[test]
fn test_roll_rate_is_damped() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            AircraftConfig::trainer(),
            BodyKinematics::new(Vector3::new(40.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)),
            neutral_controls(),
        )
        .build();

    app.run_steps(1);

    let output = app.output(0);
    let p_hat = 1.0 * 10.0 / (2.0 * 40.0);
    assert_relative_eq!(output.coefficients.c_l_roll, -0.5 * p_hat, epsilon = 1e-12);
    assert!(output.torque.x < 0.0);
}

#[test]
fn test_density_scales_loads() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            AircraftConfig::trainer(),
            cruise_kinematics(45.0, 0.06),
            ControlSurfaces::new(0.1, -0.2, 0.05),
        )
        .with_atmosphere(AtmosphereConfig::new(0.6, ISA_SEA_LEVEL_SPEED_OF_SOUND))
        .build();

    app.run_steps(1);
    let thin = app.output(0);

    app.set_atmosphere(AtmosphereConfig::new(1.2, ISA_SEA_LEVEL_SPEED_OF_SOUND));
    app.run_steps(1);
    let thick = app.output(0);

    assert_eq!(thin.coefficients, thick.coefficients);
    assert_vector_eq(&thick.force, &(thin.force * 2.0), 1e-6);
    assert_vector_eq(&thick.torque, &(thin.torque * 2.0), 1e-6);
}

#[test]
fn test_mach_drag_rise_in_slow_sound_speed() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            AircraftConfig::trainer(),
            cruise_kinematics(50.0, 0.05),
            neutral_controls(),
        )
        .build();

    app.run_steps(1);
    let subsonic = app.output(0);

    // Mach 0.8 at the same airspeed.
    app.set_atmosphere(AtmosphereConfig::new(ISA_SEA_LEVEL_DENSITY, 62.5));
    app.run_steps(1);
    let transonic = app.output(0);

    assert_relative_eq!(app.flight_state(0).mach, 0.8, epsilon = 1e-12);
    assert_relative_eq!(
        transonic.coefficients.c_d - subsonic.coefficients.c_d,
        0.4 * (0.8f64 - 0.72).powi(2),
        epsilon = 1e-12
    );
    assert_eq!(transonic.coefficients.c_l, subsonic.coefficients.c_l);
}

#[test]
fn test_output_is_rebuilt_each_step() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            AircraftConfig::trainer(),
            cruise_kinematics(50.0, 0.05),
            neutral_controls(),
        )
        .build();

    app.run_steps(5);
    let first = app.output(0);
    app.run_steps(5);
    assert_eq!(app.output(0), first);

    app.set_kinematics(0, BodyKinematics::default());
    app.run_steps(1);
    assert_output_zero(&app.output(0));
}

#[test]
fn test_multiple_aircraft_are_independent() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            AircraftConfig::trainer(),
            cruise_kinematics(50.0, 0.05),
            neutral_controls(),
        )
        .with_aircraft(
            AircraftConfig::twin_otter(),
            cruise_kinematics(50.0, 0.05),
            neutral_controls(),
        )
        .build();

    app.run_steps(1);

    let outputs = app.query_all::<AeroOutput>();
    assert_eq!(outputs.len(), 2);
    outputs.iter().for_each(assert_output_finite);

    let trainer = app.output(0);
    let otter = app.output(1);
    assert_relative_eq!(otter.coefficients.c_l, 0.215 + 4.370 * 0.05, epsilon = 1e-9);
    assert!(trainer.coefficients.c_l != otter.coefficients.c_l);
    assert!(trainer.force != otter.force);
}
