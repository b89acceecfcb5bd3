use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::curve::AlphaCurve;

/// Stability and control derivatives for a single aircraft, grouped by axis.
///
/// The table is built once at load time and only ever read afterwards.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroDerivatives {
    pub lift: LiftCoefficients,
    pub drag: DragCoefficients,
    pub side_force: SideForceCoefficients,
    pub roll: RollCoefficients,
    pub pitch: PitchCoefficients,
    pub yaw: YawCoefficients,
}

/// Lift model plus the optional output clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftCoefficients {
    pub model: LiftModel,
    /// Clamp applied to CL after either model. `None` disables clamping.
    pub clamp: Option<CoefficientClamp>,
}

/// Runtime-selected lift strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum LiftModel {
    Polynomial(LiftDerivatives),
    Curve(AlphaCurve),
}

/// Linear lift derivatives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftDerivatives {
    /// Base lift coefficient (zero angle of attack).
    pub c_l_0: f64,
    /// Lift curve slope with respect to angle of attack (per rad).
    pub c_l_alpha: f64,
    /// Lift coefficient due to non-dimensional pitch rate.
    pub c_l_q: f64,
    /// Lift coefficient due to elevator deflection.
    pub c_l_deltae: f64,
}

/// Inclusive `[min, max]` bounds for a coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientClamp {
    pub min: f64,
    pub max: f64,
}

impl CoefficientClamp {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `value` to the range. An inverted range passes the value through.
    pub fn apply(&self, value: f64) -> f64 {
        if self.min <= self.max {
            value.clamp(self.min, self.max)
        } else {
            value
        }
    }
}

/// Drag polar coefficients.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragCoefficients {
    /// Zero-lift drag coefficient.
    pub c_d_0: f64,
    /// Induced drag factor applied to CL².
    pub k: f64,
    /// Quadratic drag coefficient with respect to α².
    pub c_d_alpha2: f64,
    /// Drag coefficient due to non-dimensional pitch rate.
    pub c_d_q: f64,
    /// Transonic drag rise. `None` disables it.
    pub mach_drag_rise: Option<MachDragRise>,
}

/// Quadratic drag penalty above a threshold Mach number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachDragRise {
    /// Mach number where the penalty starts.
    pub start: f64,
    /// Gain on `(M - start)²`.
    pub k: f64,
}

/// Side force coefficients
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideForceCoefficients {
    /// Side-force coefficient due to sideslip angle (β).
    pub c_y_beta: f64,
    /// Side-force coefficient due to roll rate (p).
    pub c_y_p: f64,
    /// Side-force coefficient due to yaw rate (r).
    pub c_y_r: f64,
    /// Side-force coefficient due to aileron deflection.
    pub c_y_deltaa: f64,
    /// Side-force coefficient due to rudder deflection.
    pub c_y_deltar: f64,
}

/// Roll coefficients
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollCoefficients {
    /// Roll moment coefficient due to sideslip angle (β).
    pub c_l_beta: f64,
    /// Roll moment coefficient due to roll rate (p).
    pub c_l_p: f64,
    /// Roll moment coefficient due to yaw rate (r).
    pub c_l_r: f64,
    /// Roll moment coefficient due to aileron deflection.
    pub c_l_deltaa: f64,
    /// Roll moment coefficient due to rudder deflection.
    pub c_l_deltar: f64,
}

/// Pitch moment strategy, selected the same way as lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchCoefficients {
    pub model: PitchModel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum PitchModel {
    Polynomial(PitchDerivatives),
    Curve(AlphaCurve),
}

/// Linear pitch moment derivatives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchDerivatives {
    /// Base pitch moment coefficient (zero angle of attack).
    pub c_m_0: f64,
    /// Pitch moment slope with respect to angle of attack (per rad).
    pub c_m_alpha: f64,
    /// Pitch moment coefficient due to pitch rate (q).
    pub c_m_q: f64,
    /// Pitch moment coefficient due to elevator deflection.
    pub c_m_deltae: f64,
}

/// Yaw coefficients
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YawCoefficients {
    /// Yaw moment coefficient due to sideslip angle (β).
    pub c_n_beta: f64,
    /// Yaw moment coefficient due to roll rate (p).
    pub c_n_p: f64,
    /// Yaw moment coefficient due to yaw rate (r).
    pub c_n_r: f64,
    /// Yaw moment coefficient due to aileron deflection.
    pub c_n_deltaa: f64,
    /// Yaw moment coefficient due to rudder deflection.
    pub c_n_deltar: f64,
}

impl AeroDerivatives {
    pub fn new(
        lift: LiftCoefficients,
        drag: DragCoefficients,
        side_force: SideForceCoefficients,
        roll: RollCoefficients,
        pitch: PitchCoefficients,
        yaw: YawCoefficients,
    ) -> Self {
        AeroDerivatives {
            lift,
            drag,
            side_force,
            roll,
            pitch,
            yaw,
        }
    }

    /// Generic light trainer; the reference table for the default configuration.
    pub fn trainer() -> Self {
        AeroDerivatives::new(
            LiftCoefficients::trainer(),
            DragCoefficients::trainer(),
            SideForceCoefficients::trainer(),
            RollCoefficients::trainer(),
            PitchCoefficients::trainer(),
            YawCoefficients::trainer(),
        )
    }

    /// Linear terms of the DHC-6 Twin Otter identification data.
    pub fn twin_otter() -> Self {
        AeroDerivatives::new(
            LiftCoefficients::twin_otter(),
            DragCoefficients::twin_otter(),
            SideForceCoefficients::twin_otter(),
            RollCoefficients::twin_otter(),
            PitchCoefficients::twin_otter(),
            YawCoefficients::twin_otter(),
        )
    }
}

impl Default for AeroDerivatives {
    fn default() -> Self {
        Self::trainer()
    }
}

impl LiftCoefficients {
    pub fn trainer() -> LiftCoefficients {
        LiftCoefficients {
            model: LiftModel::Polynomial(LiftDerivatives {
                c_l_0: 0.2,
                c_l_alpha: 5.5,
                c_l_q: -8.0,
                c_l_deltae: 0.7,
            }),
            clamp: Some(CoefficientClamp::new(-1.2, 1.8)),
        }
    }

    pub fn twin_otter() -> LiftCoefficients {
        LiftCoefficients {
            model: LiftModel::Polynomial(LiftDerivatives {
                c_l_0: 0.215,
                c_l_alpha: 4.370,
                c_l_q: 25.05,
                c_l_deltae: 0.291,
            }),
            clamp: None,
        }
    }
}

impl DragCoefficients {
    pub fn trainer() -> DragCoefficients {
        DragCoefficients {
            c_d_0: 0.025,
            k: 0.06,
            c_d_alpha2: 0.0,
            c_d_q: 0.02,
            mach_drag_rise: Some(MachDragRise {
                start: 0.72,
                k: 0.4,
            }),
        }
    }

    pub fn twin_otter() -> DragCoefficients {
        DragCoefficients {
            c_d_0: 0.108,
            k: 0.0,
            c_d_alpha2: 2.988,
            c_d_q: 0.0,
            mach_drag_rise: None,
        }
    }
}

impl SideForceCoefficients {
    pub fn trainer() -> SideForceCoefficients {
        SideForceCoefficients {
            c_y_beta: -0.9,
            c_y_p: -0.1,
            c_y_r: 0.25,
            c_y_deltaa: 0.0,
            c_y_deltar: 0.2,
        }
    }

    pub fn twin_otter() -> SideForceCoefficients {
        SideForceCoefficients {
            c_y_beta: -0.885,
            c_y_p: -0.090,
            c_y_r: 1.697,
            c_y_deltaa: -0.051,
            c_y_deltar: -0.193,
        }
    }
}

impl RollCoefficients {
    pub fn trainer() -> RollCoefficients {
        RollCoefficients {
            c_l_beta: -0.12,
            c_l_p: -0.5,
            c_l_r: 0.25,
            c_l_deltaa: 0.08,
            c_l_deltar: 0.02,
        }
    }

    pub fn twin_otter() -> RollCoefficients {
        RollCoefficients {
            c_l_beta: -0.112,
            c_l_p: -0.413,
            c_l_r: 0.191,
            c_l_deltaa: 0.206,
            c_l_deltar: 0.116,
        }
    }
}

impl PitchCoefficients {
    pub fn trainer() -> PitchCoefficients {
        PitchCoefficients {
            model: PitchModel::Polynomial(PitchDerivatives {
                c_m_0: 0.02,
                c_m_alpha: -1.0,
                c_m_q: -20.0,
                c_m_deltae: -1.1,
            }),
        }
    }

    pub fn twin_otter() -> PitchCoefficients {
        PitchCoefficients {
            model: PitchModel::Polynomial(PitchDerivatives {
                c_m_0: 0.057,
                c_m_alpha: -1.419,
                c_m_q: -27.95,
                c_m_deltae: 1.626,
            }),
        }
    }
}

impl YawCoefficients {
    pub fn trainer() -> YawCoefficients {
        YawCoefficients {
            c_n_beta: 0.25,
            c_n_p: -0.06,
            c_n_r: -0.3,
            c_n_deltaa: 0.02,
            c_n_deltar: -0.1,
        }
    }

    pub fn twin_otter() -> YawCoefficients {
        YawCoefficients {
            c_n_beta: 0.088,
            c_n_p: -0.043,
            c_n_r: -0.426,
            c_n_deltaa: 0.023,
            c_n_deltar: -0.087,
        }
    }
}
