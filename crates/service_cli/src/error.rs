//! Error types for the tradescope CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dataset file error
    #[error("Data loading error: {0}")]
    Loader(#[from] adapter_loader::LoaderError),

    /// Synthetic data generation error
    #[error("Synthesis error: {0}")]
    Synthesis(#[from] trade_synth::SynthesisError),

    /// Model training or prediction error
    #[error("Model error: {0}")]
    Model(#[from] trade_model::ModelError),

    /// JSON serialisation error
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::invalid_argument("year 1999 not present");
        assert_eq!(err.to_string(), "Invalid argument: year 1999 not present");

        let err: CliError = trade_model::ModelError::NotFitted.into();
        assert!(err.to_string().starts_with("Model error"));
    }
}
