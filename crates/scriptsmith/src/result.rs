//! Result and error types for Scriptsmith.
//!
//! Only the loading edges of the crate can fail. Compilation and script
//! assembly are total: every input produces some text.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Scriptsmith operations
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors that can occur while loading recorder output or configuration
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Input file could not be interpreted
    #[error("Invalid {kind} file {}: {message}", path.display())]
    InvalidInput {
        /// What the file was expected to contain (config, actions, review)
        kind: &'static str,
        /// Path of the offending file
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Configuration file format is not supported
    #[error("Unsupported configuration format: {extension}")]
    UnsupportedFormat {
        /// File extension that was rejected
        extension: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl ScriptError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(
        kind: &'static str,
        path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}
