use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Dimensionless force and moment coefficients for one evaluation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    /// Lift coefficient CL.
    pub c_l: f64,
    /// Drag coefficient CD.
    pub c_d: f64,
    /// Side force coefficient CY.
    pub c_y: f64,
    /// Rolling moment coefficient Cl.
    pub c_l_roll: f64,
    /// Pitching moment coefficient Cm.
    pub c_m: f64,
    /// Yawing moment coefficient Cn.
    pub c_n: f64,
}

impl AeroCoefficients {
    pub fn is_finite(&self) -> bool {
        [self.c_l, self.c_d, self.c_y, self.c_l_roll, self.c_m, self.c_n]
            .iter()
            .all(|c| c.is_finite())
    }
}

/// Result of one aerodynamic evaluation, rebuilt from scratch every tick.
///
/// `force` (N) and `torque` (N·m) are in body axes (x forward, y right, z down). The
/// consumer transforms them to whatever frame its integrator works in and adds thrust,
/// gravity and ground contact itself.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroOutput {
    pub coefficients: AeroCoefficients,
    pub force: Vector3<f64>,
    pub torque: Vector3<f64>,
}

impl Default for AeroOutput {
    fn default() -> Self {
        Self {
            coefficients: AeroCoefficients::default(),
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
        }
    }
}
