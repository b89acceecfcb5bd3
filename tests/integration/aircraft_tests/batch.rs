use approx::assert_relative_eq;
use flyer_aero::{
    components::{AircraftConfig, ControlSurfaces, FlightState},
    systems::{calculate_aero_output, evaluate_batch, AeroRequest},
    utils::{deg_to_rad, ISA_SEA_LEVEL_SPEED_OF_SOUND as SPEED_OF_SOUND},
};

use crate::common::{assert_output_finite, cruise_kinematics, load_config, TestAppBuilder};

#[test]
fn test_batch_sweep_matches_single_evaluations() {
    let configs = [
        load_config("trainer.yaml"),
        load_config("stall_curve.yaml"),
        load_config("twin_otter.json"),
    ];

    let requests: Vec<AeroRequest> = configs
        .iter()
        .flat_map(|config| {
            (-10..=25).map(move |alpha_deg| {
                let alpha = deg_to_rad(alpha_deg as f64);
                AeroRequest {
                    config,
                    state: FlightState::from_air_data(55.0, alpha, 0.02, SPEED_OF_SOUND)
                        .with_rates(0.05, -0.1, 0.02)
                        .with_controls(ControlSurfaces::new(0.2, 0.1, -0.1)),
                    density: 1.0,
                }
            })
        })
        .collect();

    let outputs = evaluate_batch(&requests);

    assert_eq!(outputs.len(), requests.len());
    for (request, output) in requests.iter().zip(&outputs) {
        assert_output_finite(output);
        assert_eq!(
            *output,
            calculate_aero_output(request.config, &request.state, request.density)
        );
    }
}

#[test]
fn test_batch_applies_mach_drag_rise() {
    let config = load_config("trainer.yaml");
    let airspeeds = [100.0, 200.0, 245.0, 260.0, 300.0];

    let requests: Vec<AeroRequest> = airspeeds
        .iter()
        .map(|&airspeed| AeroRequest {
            config: &config,
            state: FlightState::from_air_data(airspeed, 0.02, 0.0, SPEED_OF_SOUND),
            density: 1.225,
        })
        .collect();

    let outputs = evaluate_batch(&requests);

    let c_l: f64 = 0.2 + 5.5 * 0.02;
    let polar = 0.025 + 0.06 * c_l * c_l;
    for (request, output) in requests.iter().zip(&outputs) {
        let mach = request.state.true_airspeed / SPEED_OF_SOUND;
        assert_relative_eq!(request.state.mach, mach, epsilon = 1e-12);

        let rise = if mach > 0.72 {
            0.4 * (mach - 0.72).powi(2)
        } else {
            0.0
        };
        assert_relative_eq!(output.coefficients.c_d, polar + rise, epsilon = 1e-12);
    }

    // Mach 0.88 at 300 m/s: about a third more drag than the low-speed polar.
    assert!(outputs[4].coefficients.c_d > 1.3 * outputs[0].coefficients.c_d);
    assert_eq!(outputs[0].coefficients.c_d, outputs[2].coefficients.c_d);
}

#[test]
fn test_batch_agrees_with_ecs_systems() {
    let config = AircraftConfig::trainer();
    let kinematics = cruise_kinematics(70.0, 0.03);
    let controls = ControlSurfaces::new(-0.3, 0.2, 0.1);

    let mut app = TestAppBuilder::new()
        .with_aircraft(config.clone(), kinematics, controls)
        .build();
    app.run_steps(1);

    let request = AeroRequest {
        config: &config,
        state: app.flight_state(0),
        density: flyer_aero::utils::ISA_SEA_LEVEL_DENSITY,
    };

    assert_eq!(evaluate_batch(&[request]), vec![app.output(0)]);
}

#[test]
fn test_empty_batch() {
    assert!(evaluate_batch(&[]).is_empty());
}
