use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::flight::tuning::FlightTuning;
use crate::core::trajectory::geometry::LineMaterial;
use crate::core::trajectory::limits::TrailLimits;
use crate::core::validation::{InvalidParameter, ensure_positive};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] InvalidParameter),
}

/// Visible extent of the world and the initial window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Fixed vertical extent of the view in world units.
    pub frustum_size: f64,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            frustum_size: 50.0,
            window_width: 1280,
            window_height: 720,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub knots_conversion_factor: f64,
    pub gauge_interval_ms: u64,
    pub airplane_scale: f64,
    pub trail: LineMaterial,
}

impl DisplayConfig {
    #[must_use]
    pub fn gauge_interval(&self) -> Duration {
        Duration::from_millis(self.gauge_interval_ms)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            knots_conversion_factor: 1000.0,
            gauge_interval_ms: 100,
            airplane_scale: 2.0,
            trail: LineMaterial::default(),
        }
    }
}

/// Every tunable of the simulator. Missing JSON fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub flight: FlightTuning,
    pub trail: TrailLimits,
    pub world: WorldConfig,
    pub display: DisplayConfig,
}

impl SimConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InvalidParameter> {
        self.flight.validate()?;
        self.trail.validate()?;

        ensure_positive("frustum_size", self.world.frustum_size)?;
        if self.world.window_width == 0 || self.world.window_height == 0 {
            return Err(InvalidParameter::new(
                "window_width",
                "window dimensions must be non-zero",
            ));
        }

        ensure_positive("knots_conversion_factor", self.display.knots_conversion_factor)?;
        ensure_positive("airplane_scale", self.display.airplane_scale)?;
        if self.display.gauge_interval_ms == 0 {
            return Err(InvalidParameter::new(
                "gauge_interval_ms",
                "must be at least 1",
            ));
        }
        let line_width = f64::from(self.display.trail.line_width);
        if !(line_width.is_finite() && line_width > 0.0) {
            return Err(InvalidParameter::new("line_width", "must be greater than zero"));
        }
        if line_width > f64::from(self.world.window_height) {
            return Err(InvalidParameter::new(
                "line_width",
                format!(
                    "must not exceed the window height of {} pixels",
                    self.world.window_height
                ),
            ));
        }

        Ok(())
    }
}
