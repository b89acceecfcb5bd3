pub mod aerodynamics;

pub use aerodynamics::{
    aero_force_system, air_data_system, calculate_aero_output,
    calculate_aerodynamic_forces_moments, calculate_coefficients, evaluate_batch, AeroInputs,
    AeroRequest, CoefficientModel,
};
