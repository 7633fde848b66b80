use std::io;

use thiserror::Error;

/// Library-wide error type for coverletter operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("{0} is missing. Please set it in your environment or .env file.")]
    EnvironmentVariableMissing(String),

    /// Completion service request failed.
    #[error("Gemini API error: {message}")]
    CompletionApiError { message: String, status: Option<u16> },

    /// Prompt template could not be rendered.
    #[error("Prompt rendering failed for '{template}': {reason}")]
    PromptRender { template: String, reason: String },

    /// Document rendering failed.
    #[error("Document rendering failed: {0}")]
    DocumentRender(String),

    /// Template file already exists and overwrite was not requested.
    #[error("Template file '{0}' already exists (use --force to overwrite)")]
    TemplateExists(String),

    /// Interactive input could not be read (closed terminal, interrupt).
    #[error("Failed to read input: {0}")]
    Input(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn api_error<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::CompletionApiError { message: message.into(), status }
    }
}
