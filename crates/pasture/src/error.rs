//! # Scene Error Types

use std::io;
use std::path::PathBuf;

use pasture_import::ImportError;
use thiserror::Error;

/// Failures loading or validating a scene configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The config is not valid TOML or has the wrong shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be written back out.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value parsed but cannot be used.
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Failures assembling a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    /// Configuration problem.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The cow model could not be loaded.
    #[error(transparent)]
    Import(#[from] ImportError),

    /// The model has no group with the configured name.
    #[error("model has no group named `{name}` (available: {available:?})")]
    MissingGroup {
        /// Group that was requested.
        name: String,
        /// Groups the model does have.
        available: Vec<String>,
    },
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
