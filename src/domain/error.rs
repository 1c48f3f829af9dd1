use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for omvpack operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file parsed but holds invalid values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required input file does not exist.
    #[error("{what} not found: {}", path.display())]
    MissingFile { what: String, path: PathBuf },

    /// The changelog's first line carries no `name (version)` pattern.
    #[error("No package version found in {}", path.display())]
    NoVersionFound { path: PathBuf },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Schema document lacks a usable `properties` object.
    #[error("No properties defined in {}", path.display())]
    MissingProperties { path: PathBuf },

    /// External tool could not be spawned or exited non-zero.
    #[error("{tool} failed: {details}")]
    ExternalToolFailure { tool: String, details: String },

    /// Source-hosting service request failed.
    #[error("Request to {url} failed: {details}")]
    NetworkFailure { url: String, details: String },

    /// The build finished but the expected package file is absent.
    #[error("Built package not found: {}", .0.display())]
    ArtifactNotFound(PathBuf),

    /// Template rendering failed.
    #[error("Failed to render {template}: {details}")]
    TemplateRender { template: String, details: String },

    /// Unexpected failure inside omvpack itself.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn missing_file(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        AppError::MissingFile { what: what.into(), path: path.into() }
    }

    pub(crate) fn tool_failure(tool: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::ExternalToolFailure { tool: tool.into(), details: details.into() }
    }
}
