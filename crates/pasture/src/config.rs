//! # Scene Configuration
//!
//! Everything tunable about the scene, loaded from TOML. Every field is
//! optional; omitted fields take the defaults below.
//!
//! ```toml
//! seed = 42
//! frame_rate = 60.0
//! model_group = "spot"
//!
//! [terrain]
//! width = 40.0
//! iterations = 4
//!
//! [herd]
//! count = 80
//!
//! [camera]
//! height = 1.0
//! ```

use std::path::Path;

use pasture_procedural::{TerrainParams, WorldSeed};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Herd behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HerdConfig {
    /// Number of cows.
    pub count: usize,
    /// Walking speed in world units per second.
    pub speed: f32,
    /// Fraction of the current heading kept each tick.
    pub turn_damping: f32,
    /// Ticks between new target headings.
    pub retarget_interval: u64,
    /// Fraction of the patch, centred, that cows spawn in.
    pub spawn_fraction: f32,
}

impl Default for HerdConfig {
    fn default() -> Self {
        Self {
            count: 80,
            speed: 0.75,
            turn_damping: 0.95,
            retarget_interval: 240,
            spawn_fraction: 0.8,
        }
    }
}

/// Initial camera state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye height above the ground.
    pub height: f32,
    /// Forward speed in world units per second.
    pub velocity: f32,
    /// Turn rate in radians per second.
    pub angular_velocity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            height: 1.0,
            velocity: 0.0,
            angular_velocity: 0.0,
        }
    }
}

/// Complete scene configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Root seed for terrain and herd.
    pub seed: WorldSeed,
    /// Simulation ticks per second.
    pub frame_rate: f32,
    /// Model group drawn for each cow.
    pub model_group: String,
    /// Terrain generation.
    pub terrain: TerrainParams,
    /// Herd behaviour.
    pub herd: HerdConfig,
    /// Initial camera state.
    pub camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: WorldSeed::default(),
            frame_rate: 60.0,
            model_group: "spot".to_owned(),
            terrain: TerrainParams::default(),
            herd: HerdConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for unusable values.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// as [`SceneConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loading scene config");
        Self::from_toml_str(&source)
    }

    /// Renders the config as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Seconds per simulation tick.
    #[inline]
    #[must_use]
    pub fn frame_duration(&self) -> f32 {
        self.frame_rate.recip()
    }

    /// Rejects values the simulation cannot run with.
    ///
    /// Terrain parameters are not checked here; terrain generation
    /// sanitizes them itself.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> ConfigResult<()> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigResult<()> {
            Err(ConfigError::Invalid {
                field,
                reason: reason.into(),
            })
        }

        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return invalid("frame_rate", format!("must be positive, got {}", self.frame_rate));
        }
        if self.model_group.is_empty() {
            return invalid("model_group", "must not be empty");
        }
        if !self.herd.speed.is_finite() {
            return invalid("herd.speed", "must be finite");
        }
        if !(0.0..=1.0).contains(&self.herd.turn_damping) {
            return invalid(
                "herd.turn_damping",
                format!("must be within [0, 1], got {}", self.herd.turn_damping),
            );
        }
        if self.herd.retarget_interval == 0 {
            return invalid("herd.retarget_interval", "must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.herd.spawn_fraction) {
            return invalid(
                "herd.spawn_fraction",
                format!("must be within [0, 1], got {}", self.herd.spawn_fraction),
            );
        }
        let camera = &self.camera;
        if !(camera.height.is_finite() && camera.velocity.is_finite() && camera.angular_velocity.is_finite()) {
            return invalid("camera", "values must be finite");
        }

        Ok(())
    }
}
