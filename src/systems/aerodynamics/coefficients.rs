use crate::components::{
    AeroCoefficients, AeroDerivatives, AircraftGeometry, AlphaCurve, DragCoefficients,
    FlightState, LiftDerivatives, LiftModel, PitchDerivatives, PitchModel, RollCoefficients,
    SideForceCoefficients, YawCoefficients,
};
use crate::utils::MIN_AIRSPEED;

/// Dimensionless inputs shared by every coefficient term.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AeroInputs {
    pub alpha: f64,
    pub beta: f64,
    /// Non-dimensional roll rate `p·b/(2V)`.
    pub p_hat: f64,
    /// Non-dimensional pitch rate `q·c/(2V)`.
    pub q_hat: f64,
    /// Non-dimensional yaw rate `r·b/(2V)`.
    pub r_hat: f64,
    pub aileron: f64,
    pub elevator: f64,
    pub rudder: f64,
    pub mach: f64,
}

impl AeroInputs {
    pub fn new(geometry: &AircraftGeometry, state: &FlightState) -> Self {
        let airspeed = state.true_airspeed;
        let rates = state.angular_velocity;
        let controls = state.controls.normalized();

        Self {
            alpha: state.alpha,
            beta: state.beta,
            p_hat: non_dimensional_rate(rates.x, geometry.wing_span, airspeed),
            q_hat: non_dimensional_rate(rates.y, geometry.mac, airspeed),
            r_hat: non_dimensional_rate(rates.z, geometry.wing_span, airspeed),
            aileron: controls.aileron,
            elevator: controls.elevator,
            rudder: controls.rudder,
            mach: state.mach,
        }
    }
}

/// `rate·length/(2·V)`, or zero when the airspeed is below [`MIN_AIRSPEED`].
#[inline]
pub fn non_dimensional_rate(rate: f64, length: f64, airspeed: f64) -> f64 {
    if airspeed < MIN_AIRSPEED {
        0.0
    } else {
        rate * length / (2.0 * airspeed)
    }
}

/// A single coefficient as a function of the dimensionless inputs.
pub trait CoefficientModel {
    fn coefficient(&self, inputs: &AeroInputs) -> f64;
}

impl CoefficientModel for AlphaCurve {
    fn coefficient(&self, inputs: &AeroInputs) -> f64 {
        self.evaluate(inputs.alpha)
    }
}

impl CoefficientModel for LiftDerivatives {
    fn coefficient(&self, inputs: &AeroInputs) -> f64 {
        self.c_l_0
            + self.c_l_alpha * inputs.alpha
            + self.c_l_q * inputs.q_hat
            + self.c_l_deltae * inputs.elevator
    }
}

impl CoefficientModel for LiftModel {
    fn coefficient(&self, inputs: &AeroInputs) -> f64 {
        match self {
            LiftModel::Polynomial(derivatives) => derivatives.coefficient(inputs),
            LiftModel::Curve(curve) => curve.coefficient(inputs),
        }
    }
}

impl CoefficientModel for PitchDerivatives {
    fn coefficient(&self, inputs: &AeroInputs) -> f64 {
        self.c_m_0
            + self.c_m_alpha * inputs.alpha
            + self.c_m_q * inputs.q_hat
            + self.c_m_deltae * inputs.elevator
    }
}

impl CoefficientModel for PitchModel {
    fn coefficient(&self, inputs: &AeroInputs) -> f64 {
        match self {
            PitchModel::Polynomial(derivatives) => derivatives.coefficient(inputs),
            PitchModel::Curve(curve) => curve.coefficient(inputs),
        }
    }
}

impl CoefficientModel for SideForceCoefficients {
    fn coefficient(&self, inputs: &AeroInputs) -> f64 {
        self.c_y_beta * inputs.beta
            + self.c_y_p * inputs.p_hat
            + self.c_y_r * inputs.r_hat
            + self.c_y_deltaa * inputs.aileron
            + self.c_y_deltar * inputs.rudder
    }
}

impl CoefficientModel for RollCoefficients {
    fn coefficient(&self, inputs: &AeroInputs) -> f64 {
        self.c_l_beta * inputs.beta
            + self.c_l_p * inputs.p_hat
            + self.c_l_r * inputs.r_hat
            + self.c_l_deltaa * inputs.aileron
            + self.c_l_deltar * inputs.rudder
    }
}

impl CoefficientModel for YawCoefficients {
    fn coefficient(&self, inputs: &AeroInputs) -> f64 {
        self.c_n_beta * inputs.beta
            + self.c_n_p * inputs.p_hat
            + self.c_n_r * inputs.r_hat
            + self.c_n_deltaa * inputs.aileron
            + self.c_n_deltar * inputs.rudder
    }
}

/// Drag polar plus the quadratic transonic penalty. Depends on the final CL.
pub fn drag_coefficient(drag: &DragCoefficients, inputs: &AeroInputs, c_l: f64) -> f64 {
    let mut c_d = drag.c_d_0
        + drag.k * c_l * c_l
        + drag.c_d_alpha2 * inputs.alpha * inputs.alpha
        + drag.c_d_q * inputs.q_hat;

    if let Some(rise) = drag.mach_drag_rise {
        if inputs.mach > rise.start {
            let excess = inputs.mach - rise.start;
            c_d += rise.k * excess * excess;
        }
    }

    c_d
}

/// Maps the flight state to the six dimensionless coefficients.
///
/// Pure and total: degenerate inputs such as zero airspeed are handled by zeroing the
/// rate terms, never by failing.
pub fn calculate_coefficients(
    geometry: &AircraftGeometry,
    derivatives: &AeroDerivatives,
    state: &FlightState,
) -> AeroCoefficients {
    let inputs = AeroInputs::new(geometry, state);

    let mut c_l = derivatives.lift.model.coefficient(&inputs);
    if let Some(clamp) = derivatives.lift.clamp {
        c_l = clamp.apply(c_l);
    }

    AeroCoefficients {
        c_l,
        c_d: drag_coefficient(&derivatives.drag, &inputs, c_l),
        c_y: derivatives.side_force.coefficient(&inputs),
        c_l_roll: derivatives.roll.coefficient(&inputs),
        c_m: derivatives.pitch.model.coefficient(&inputs),
        c_n: derivatives.yaw.coefficient(&inputs),
    }
}
