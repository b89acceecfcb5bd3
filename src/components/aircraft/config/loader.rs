use serde::Deserialize;
use thiserror::Error;

use super::aero_coef::{
    AeroDerivatives, CoefficientClamp, DragCoefficients, LiftCoefficients, LiftDerivatives,
    LiftModel, MachDragRise, PitchCoefficients, PitchDerivatives, PitchModel, RollCoefficients,
    SideForceCoefficients, YawCoefficients,
};
use super::curve::{AlphaCurve, AngleUnit};
use super::geometry::AircraftGeometry;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Flat on-disk aircraft description. Keys follow the usual derivative notation and
/// any key left out falls back to the trainer table.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,

    /// Geometry
    pub Sref: f64,
    pub span: f64,
    pub chord: f64,

    /// Lift
    pub useCLvsAlphaCurve: bool,
    pub curveInDegrees: bool,
    pub CLvsAlpha: Option<Vec<[f64; 2]>>,
    pub enableCLClamp: bool,
    pub CLmin: f64,
    pub CLmax: f64,
    pub CL0: f64,
    pub CLa: f64,
    pub CLq: f64,
    pub CLde: f64,

    /// Drag
    pub CD0: f64,
    pub k: f64,
    pub CDa2: f64,
    pub CDq: f64,
    pub enableMachDragRise: bool,
    pub machDragRiseStart: f64,
    pub machDragRiseK: f64,

    /// Side force
    pub CYb: f64,
    pub CYp: f64,
    pub CYr: f64,
    pub CYda: f64,
    pub CYdr: f64,

    /// Pitch
    pub useCMvsAlphaCurve: bool,
    pub CMvsAlpha: Option<Vec<[f64; 2]>>,
    pub Cm0: f64,
    pub Cma: f64,
    pub Cmq: f64,
    pub Cmde: f64,

    /// Roll
    pub Clb: f64,
    pub Clp: f64,
    pub Clr: f64,
    pub Clda: f64,
    pub Cldr: f64,

    /// Yaw
    pub Cnb: f64,
    pub Cnp: f64,
    pub Cnr: f64,
    pub Cnda: f64,
    pub Cndr: f64,
}

impl Default for RawAircraftConfig {
    fn default() -> Self {
        Self {
            name: "Trainer".to_string(),
            Sref: 30.0,
            span: 10.0,
            chord: 3.0,
            useCLvsAlphaCurve: false,
            curveInDegrees: true,
            CLvsAlpha: None,
            enableCLClamp: true,
            CLmin: -1.2,
            CLmax: 1.8,
            CL0: 0.2,
            CLa: 5.5,
            CLq: -8.0,
            CLde: 0.7,
            CD0: 0.025,
            k: 0.06,
            CDa2: 0.0,
            CDq: 0.02,
            enableMachDragRise: true,
            machDragRiseStart: 0.72,
            machDragRiseK: 0.4,
            CYb: -0.9,
            CYp: -0.1,
            CYr: 0.25,
            CYda: 0.0,
            CYdr: 0.2,
            useCMvsAlphaCurve: false,
            CMvsAlpha: None,
            Cm0: 0.02,
            Cma: -1.0,
            Cmq: -20.0,
            Cmde: -1.1,
            Clb: -0.12,
            Clp: -0.5,
            Clr: 0.25,
            Clda: 0.08,
            Cldr: 0.02,
            Cnb: 0.25,
            Cnp: -0.06,
            Cnr: -0.3,
            Cnda: 0.02,
            Cndr: -0.1,
        }
    }
}

impl RawAircraftConfig {
    /// Checks the raw values before they are turned into an immutable model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("Sref", self.Sref),
            ("span", self.span),
            ("chord", self.chord),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        if let Some((name, _)) = self.scalars().iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::ValidationError(format!("{name} must be finite")));
        }

        if self.enableCLClamp && self.CLmin > self.CLmax {
            return Err(ConfigError::ValidationError(format!(
                "CLmin ({}) is greater than CLmax ({})",
                self.CLmin, self.CLmax
            )));
        }

        if self.enableMachDragRise && (self.machDragRiseStart < 0.0 || self.machDragRiseK < 0.0) {
            return Err(ConfigError::ValidationError(
                "machDragRiseStart and machDragRiseK must be non-negative".to_string(),
            ));
        }

        if self.useCLvsAlphaCurve {
            self.curve("CLvsAlpha", self.CLvsAlpha.as_deref())?;
        }
        if self.useCMvsAlphaCurve {
            self.curve("CMvsAlpha", self.CMvsAlpha.as_deref())?;
        }

        Ok(())
    }

    pub fn geometry(&self) -> AircraftGeometry {
        AircraftGeometry::new(self.Sref, self.span, self.chord)
    }

    /// Builds the derivative table, selecting curve or polynomial models from the flags.
    pub fn derivatives(&self) -> Result<AeroDerivatives, ConfigError> {
        let lift_model = if self.useCLvsAlphaCurve {
            LiftModel::Curve(self.curve("CLvsAlpha", self.CLvsAlpha.as_deref())?)
        } else {
            LiftModel::Polynomial(LiftDerivatives {
                c_l_0: self.CL0,
                c_l_alpha: self.CLa,
                c_l_q: self.CLq,
                c_l_deltae: self.CLde,
            })
        };

        let pitch_model = if self.useCMvsAlphaCurve {
            PitchModel::Curve(self.curve("CMvsAlpha", self.CMvsAlpha.as_deref())?)
        } else {
            PitchModel::Polynomial(PitchDerivatives {
                c_m_0: self.Cm0,
                c_m_alpha: self.Cma,
                c_m_q: self.Cmq,
                c_m_deltae: self.Cmde,
            })
        };

        Ok(AeroDerivatives {
            lift: LiftCoefficients {
                model: lift_model,
                clamp: self
                    .enableCLClamp
                    .then(|| CoefficientClamp::new(self.CLmin, self.CLmax)),
            },
            drag: DragCoefficients {
                c_d_0: self.CD0,
                k: self.k,
                c_d_alpha2: self.CDa2,
                c_d_q: self.CDq,
                mach_drag_rise: self.enableMachDragRise.then_some(MachDragRise {
                    start: self.machDragRiseStart,
                    k: self.machDragRiseK,
                }),
            },
            side_force: SideForceCoefficients {
                c_y_beta: self.CYb,
                c_y_p: self.CYp,
                c_y_r: self.CYr,
                c_y_deltaa: self.CYda,
                c_y_deltar: self.CYdr,
            },
            roll: RollCoefficients {
                c_l_beta: self.Clb,
                c_l_p: self.Clp,
                c_l_r: self.Clr,
                c_l_deltaa: self.Clda,
                c_l_deltar: self.Cldr,
            },
            pitch: PitchCoefficients { model: pitch_model },
            yaw: YawCoefficients {
                c_n_beta: self.Cnb,
                c_n_p: self.Cnp,
                c_n_r: self.Cnr,
                c_n_deltaa: self.Cnda,
                c_n_deltar: self.Cndr,
            },
        })
    }

    fn curve(&self, name: &str, keys: Option<&[[f64; 2]]>) -> Result<AlphaCurve, ConfigError> {
        let keys = keys.ok_or_else(|| {
            ConfigError::ValidationError(format!("{name} curve is enabled but not provided"))
        })?;
        let unit = if self.curveInDegrees {
            AngleUnit::Degrees
        } else {
            AngleUnit::Radians
        };
        let curve = AlphaCurve::new(unit, keys.iter().map(|[a, v]| (*a, *v)).collect());
        curve
            .validate()
            .map_err(|err| ConfigError::ValidationError(format!("{name}: {err}")))?;
        Ok(curve)
    }

    fn scalars(&self) -> [(&'static str, f64); 31] {
        [
            ("CLmin", self.CLmin),
            ("CLmax", self.CLmax),
            ("CL0", self.CL0),
            ("CLa", self.CLa),
            ("CLq", self.CLq),
            ("CLde", self.CLde),
            ("CD0", self.CD0),
            ("k", self.k),
            ("CDa2", self.CDa2),
            ("CDq", self.CDq),
            ("machDragRiseStart", self.machDragRiseStart),
            ("machDragRiseK", self.machDragRiseK),
            ("CYb", self.CYb),
            ("CYp", self.CYp),
            ("CYr", self.CYr),
            ("CYda", self.CYda),
            ("CYdr", self.CYdr),
            ("Cm0", self.Cm0),
            ("Cma", self.Cma),
            ("Cmq", self.Cmq),
            ("Cmde", self.Cmde),
            ("Clb", self.Clb),
            ("Clp", self.Clp),
            ("Clr", self.Clr),
            ("Clda", self.Clda),
            ("Cldr", self.Cldr),
            ("Cnb", self.Cnb),
            ("Cnp", self.Cnp),
            ("Cnr", self.Cnr),
            ("Cnda", self.Cnda),
            ("Cndr", self.Cndr),
        ]
    }
}
