use std::io;

use thiserror::Error;

/// Failure to locate or decode the chapter array inside raw model output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No `[` ... `]` pair was found in the text.
    #[error("No JSON array found in model output")]
    NoArrayFound,

    /// The bracketed slice was not a JSON array of chapter objects.
    #[error("Malformed chapter array: {0}")]
    Malformed(String),
}

/// Library-wide error type for learnpath operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Missing credential or an unusable environment.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON encoding or decoding failed outside of model output extraction.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network failure, timeout, or a non-success status from the LLM endpoint.
    #[error("LLM request failed{}: {message}", .status.map(|s| format!(" ({})", s)).unwrap_or_default())]
    Transport { message: String, status: Option<u16> },

    /// An embedded prompt template failed to render.
    #[error("Prompt rendering failed: {0}")]
    Prompt(String),

    /// Model output did not contain a usable chapter array.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Model output decoded to an empty chapter array.
    #[error("Model returned an empty curriculum")]
    EmptyCurriculum,

    /// A decoded chapter violates the curriculum schema.
    #[error("Chapter {index} is invalid: {reason}")]
    InvalidChapter { index: usize, reason: String },

    /// Project does not exist, or is not owned by the caller on a write path.
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Project exists but belongs to another user.
    #[error("Access denied to project {0}")]
    AccessDenied(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn transport<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::Transport { message: message.into(), status }
    }

    /// HTTP status the host surface reports for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            AppError::ProjectNotFound(_) => 404,
            AppError::AccessDenied(_) => 403,
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::Io(_)
            | AppError::Json(_)
            | AppError::Prompt(_)
            | AppError::Transport { .. }
            | AppError::Extraction(_)
            | AppError::EmptyCurriculum
            | AppError::InvalidChapter { .. }
            | AppError::Internal(_) => 500,
        }
    }

    /// Whether this failure belongs to the generation path and is absorbed by fallback.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            AppError::Configuration(_)
                | AppError::Transport { .. }
                | AppError::Extraction(_)
                | AppError::EmptyCurriculum
                | AppError::InvalidChapter { .. }
        )
    }
}
