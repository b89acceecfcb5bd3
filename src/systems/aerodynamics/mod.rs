mod air_data;
pub mod coefficients;
mod force_calculator;

pub use air_data::air_data_system;
pub use coefficients::{
    calculate_coefficients, drag_coefficient, non_dimensional_rate, AeroInputs, CoefficientModel,
};
pub use force_calculator::{
    aero_force_system, calculate_aero_output, calculate_aerodynamic_forces_moments,
    evaluate_batch, AeroRequest,
};
