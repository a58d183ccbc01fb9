//! CLI error types

use streamwatch_detector::ConfigurationError;
use streamwatch_source::SourceError;
use thiserror::Error;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Detector configuration error: {0}")]
    Detector(#[from] ConfigurationError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

impl From<toml::ser::Error> for CliError {
    fn from(e: toml::ser::Error) -> Self {
        CliError::Config(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
