use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::{lerp, rad_to_deg};

/// Unit the curve's α keys were authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("curve has no keys")]
    Empty,
    #[error("non-finite curve key ({alpha}, {value})")]
    NonFiniteKey { alpha: f64, value: f64 },
    #[error("curve keys must be strictly increasing in alpha, found {next} after {previous}")]
    NotIncreasing { previous: f64, next: f64 },
}

/// Piecewise-linear coefficient curve as a function of angle of attack.
///
/// Keys are `(alpha, value)` pairs with strictly increasing `alpha`. Lookups outside
/// the authored domain return the nearest boundary value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaCurve {
    pub unit: AngleUnit,
    pub keys: Vec<(f64, f64)>,
}

impl AlphaCurve {
    pub fn new(unit: AngleUnit, keys: Vec<(f64, f64)>) -> Self {
        Self { unit, keys }
    }

    /// Reports the first problem with the keys, if any.
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.keys.is_empty() {
            return Err(CurveError::Empty);
        }
        if let Some(&(alpha, value)) = self
            .keys
            .iter()
            .find(|(alpha, value)| !alpha.is_finite() || !value.is_finite())
        {
            return Err(CurveError::NonFiniteKey { alpha, value });
        }
        if let Some(pair) = self.keys.windows(2).find(|pair| pair[1].0 <= pair[0].0) {
            return Err(CurveError::NotIncreasing {
                previous: pair[0].0,
                next: pair[1].0,
            });
        }
        Ok(())
    }

    /// Authored α domain as `(min, max)`, in the curve's own unit.
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((self.keys.first()?.0, self.keys.last()?.0))
    }

    /// Evaluates the curve at `alpha` given in radians.
    pub fn evaluate(&self, alpha: f64) -> f64 {
        let x = match self.unit {
            AngleUnit::Degrees => rad_to_deg(alpha),
            AngleUnit::Radians => alpha,
        };
        self.sample(x)
    }

    /// Evaluates the curve at `x` expressed in the curve's own unit.
    pub fn sample(&self, x: f64) -> f64 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };

        if x.is_nan() {
            return f64::NAN;
        }
        if x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }

        // first.0 < x < last.0, so 1 <= upper <= len - 1
        let upper = self.keys.partition_point(|(key, _)| *key <= x);
        let (x0, y0) = self.keys[upper - 1];
        let (x1, y1) = self.keys[upper];
        let width = x1 - x0;
        if width <= 0.0 {
            return y0;
        }
        lerp(y0, y1, (x - x0) / width)
    }
}
