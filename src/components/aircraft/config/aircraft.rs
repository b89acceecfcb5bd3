use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{ConfigError, RawAircraftConfig};
use crate::components::{AeroDerivatives, AircraftGeometry};

/// Everything the aerodynamic model needs to know about one airframe.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Name of the aircraft, defaults to type name.
    pub name: String,
    /// Type of aircraft represented as an enum e.g. Trainer, TwinOtter.
    pub ac_type: AircraftType,
    /// Reference area, span and chord.
    pub geometry: AircraftGeometry,
    /// Stability and control derivatives.
    pub aero_coef: AeroDerivatives,
}

impl Default for AircraftConfig {
    /// The `Trainer` configuration is chosen as the default.
    fn default() -> Self {
        Self::from_programmed(AircraftType::Trainer)
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` enum specifying if the configuration is hardcoded
    ///              (`Programmed`) or loaded from a file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to load
    /// or does not validate.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::Trainer => Self {
                name: "Trainer".to_string(),
                ac_type: AircraftType::Trainer,
                geometry: AircraftGeometry::trainer(),
                aero_coef: AeroDerivatives::trainer(),
            },
            AircraftType::TwinOtter => Self {
                name: "TwinOtter".to_string(),
                ac_type: AircraftType::TwinOtter,
                geometry: AircraftGeometry::twin_otter(),
                aero_coef: AeroDerivatives::twin_otter(),
            },
            AircraftType::Custom(name) => Self {
                name: name.clone(),
                ac_type: AircraftType::Custom(name),
                geometry: AircraftGeometry::trainer(),
                aero_coef: AeroDerivatives::trainer(),
            },
        }
    }

    /// Loads a configuration from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading aircraft configuration from {}", path.display());

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let file_contents = std::fs::read_to_string(path)?;

        let raw_config: RawAircraftConfig = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&file_contents)?,
            "json" => serde_json::from_str(&file_contents)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(format!(
                    "{} (extension '{}')",
                    path.display(),
                    other
                )))
            }
        };

        Self::from_raw_config(raw_config).inspect_err(|err| {
            warn!("Rejected aircraft configuration {}: {}", path.display(), err);
        })
    }

    /// Parses a YAML document directly.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let raw_config: RawAircraftConfig = serde_yaml::from_str(yaml)?;
        Self::from_raw_config(raw_config)
    }

    /// Validates a raw configuration and converts it into the structured form.
    pub fn from_raw_config(raw: RawAircraftConfig) -> Result<Self, ConfigError> {
        raw.validate()?;
        Ok(Self {
            name: raw.name.clone(),
            ac_type: AircraftType::Custom(raw.name.clone()),
            geometry: raw.geometry(),
            aero_coef: raw.derivatives()?,
        })
    }

    pub fn trainer() -> Self {
        Self::from_programmed(AircraftType::Trainer)
    }

    pub fn twin_otter() -> Self {
        Self::from_programmed(AircraftType::TwinOtter)
    }
}

/// Source for aircraft configuration.
/// Can either be a hardcoded configuration (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

/// Enumeration of available aircraft types.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftType {
    Trainer,
    TwinOtter,
    Custom(String),
}
