use std::io;

use thiserror::Error;

/// Library-wide error type for odoogen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The interactive terminal backend failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Input stream ended before every question was answered.
    #[error("Input closed before '{0}' was answered")]
    InputClosed(String),

    /// Path escapes the working directory or is otherwise unusable.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Descriptor serialization error.
    #[error("Failed to serialize compose file: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// External command failed to start or exited unsuccessfully.
    #[error("{tool}: {error}")]
    ExternalToolError { tool: String, error: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Closest `io::ErrorKind` for this error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidPath(_)
            | AppError::TomlParseError(_)
            | AppError::Serialization(_) => io::ErrorKind::InvalidInput,
            AppError::InputClosed(_) => io::ErrorKind::UnexpectedEof,
            AppError::Prompt(_) | AppError::ExternalToolError { .. } => io::ErrorKind::Other,
        }
    }
}
