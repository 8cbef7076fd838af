//! Error types for babyplots-rs.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for babyplots-rs operations.
#[derive(Error, Debug)]
pub enum BabyplotsError {
    /// A configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A named column was not found in a table.
    #[error("column '{0}' not found")]
    KeyNotFound(String),

    /// An option key is not part of the option set of the plot type.
    #[error("unknown option '{key}' for plot type '{plot_type}'")]
    UnknownOption { plot_type: String, key: String },

    /// An option value has the wrong shape or type.
    #[error("invalid options for plot type '{plot_type}': {message}")]
    InvalidOption { plot_type: String, message: String },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Failed to read an input file.
    #[error("failed to read '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode an image file.
    #[error("failed to decode image '{}': {message}", path.display())]
    ImageDecode { path: PathBuf, message: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BabyplotsError {
    /// Shorthand for a [`BabyplotsError::Config`] error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Builds a [`BabyplotsError::FileRead`] for `path`.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Builds a [`BabyplotsError::FileWrite`] for `path`.
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for babyplots-rs operations.
pub type Result<T> = std::result::Result<T, BabyplotsError>;
