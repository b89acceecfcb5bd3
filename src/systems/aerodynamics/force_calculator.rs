use bevy::prelude::*;
use nalgebra::Vector3;
use rayon::prelude::*;

use crate::components::{
    AeroCoefficients, AeroOutput, AircraftConfig, AircraftGeometry, FlightState,
};
use crate::resources::AtmosphereConfig;
use crate::systems::aerodynamics::coefficients::calculate_coefficients;

// --- Pure Calculation Logic ---

/// Scales dimensionless coefficients into body-frame forces and moments.
///
/// Body axes are x forward, y right, z down. Lift acts along body up (-z), drag against
/// `velocity_direction`, side force along +y.
///
/// # Arguments
/// * `coeffs` - Coefficients from [`calculate_coefficients`].
/// * `dynamic_pressure` - `0.5·ρ·V²` supplied by the caller (Pa).
/// * `geometry` - Reference area, span and chord.
/// * `velocity_direction` - Direction of motion through the air in body axes. Need not
///   be normalized; a zero vector falls back to body +x.
///
/// # Returns
/// A tuple containing: `(body_forces: Vector3<f64>, body_moments: Vector3<f64>)`
pub fn calculate_aerodynamic_forces_moments(
    coeffs: &AeroCoefficients,
    dynamic_pressure: f64,
    geometry: &AircraftGeometry,
    velocity_direction: &Vector3<f64>,
) -> (Vector3<f64>, Vector3<f64>) {
    let q_s = dynamic_pressure * geometry.wing_area;
    let drag_axis = velocity_direction
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::x);

    let lift = Vector3::new(0.0, 0.0, -q_s * coeffs.c_l);
    let drag = -drag_axis * (q_s * coeffs.c_d);
    let side_force = Vector3::new(0.0, q_s * coeffs.c_y, 0.0);

    let moments_body = Vector3::new(
        q_s * geometry.wing_span * coeffs.c_l_roll, // Roll Moment (L) about X axis
        q_s * geometry.mac * coeffs.c_m,            // Pitch Moment (M) about Y axis
        q_s * geometry.wing_span * coeffs.c_n,      // Yaw Moment (N) about Z axis
    );

    (lift + drag + side_force, moments_body)
}

/// Full evaluation for one aircraft: coefficients, then forces and moments.
pub fn calculate_aero_output(
    config: &AircraftConfig,
    state: &FlightState,
    density: f64,
) -> AeroOutput {
    let coefficients = calculate_coefficients(&config.geometry, &config.aero_coef, state);
    let (force, torque) = calculate_aerodynamic_forces_moments(
        &coefficients,
        state.dynamic_pressure(density),
        &config.geometry,
        &state.velocity_direction(),
    );

    AeroOutput {
        coefficients,
        force,
        torque,
    }
}

/// One independent evaluation in a batch.
#[derive(Debug, Clone, Copy)]
pub struct AeroRequest<'a> {
    pub config: &'a AircraftConfig,
    pub state: FlightState,
    pub density: f64,
}

/// Evaluates many aircraft in parallel. Output order matches `requests`.
pub fn evaluate_batch(requests: &[AeroRequest<'_>]) -> Vec<AeroOutput> {
    requests
        .par_iter()
        .map(|request| calculate_aero_output(request.config, &request.state, request.density))
        .collect()
}

fn is_finite_output(output: &AeroOutput) -> bool {
    output.coefficients.is_finite()
        && output.force.iter().all(|x| x.is_finite())
        && output.torque.iter().all(|x| x.is_finite())
}

/// System for calculating aerodynamic forces and moments acting on aircraft.
/// Reads each aircraft's flight state and writes a fresh `AeroOutput`.
pub fn aero_force_system(
    mut aircraft: Query<(Entity, &AircraftConfig, &FlightState, &mut AeroOutput)>,
    atmosphere: Res<AtmosphereConfig>,
) {
    for (entity, config, state, mut output) in aircraft.iter_mut() {
        let result = calculate_aero_output(config, state, atmosphere.density);

        if is_finite_output(&result) {
            *output = result;
        } else {
            warn!(
                "Non-finite aerodynamic output for {:?} ({}), clearing forces",
                entity, config.name
            );
            *output = AeroOutput::default();
        }
    }
}
