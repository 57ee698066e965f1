//! # Import Error Types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a model.
///
/// Malformed content never produces an error; bad records are skipped.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The model file could not be opened.
    #[error("failed to open model {path}: {source}")]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading from the source failed part way through.
    #[error("failed to read model: {0}")]
    Read(#[from] io::Error),
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
