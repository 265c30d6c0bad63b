//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Instruction matched no pattern
    #[error("Instruction not understood: {instruction}")]
    NotUnderstood {
        /// Instruction as given
        instruction: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scriptsmith library error
    #[error("{0}")]
    Script(#[from] scriptsmith::ScriptError),
}

impl CliError {
    /// Create a not-understood error
    #[must_use]
    pub fn not_understood(instruction: impl Into<String>) -> Self {
        Self::NotUnderstood {
            instruction: instruction.into(),
        }
    }
}
