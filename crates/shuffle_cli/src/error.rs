//! Error types for the shuffle CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Error from the permutation engine
    #[error(transparent)]
    Engine(#[from] shuffle_core::ShuffleError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (typically a closed stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A uniformity run exceeded its tolerance
    #[error("Uniformity check failed: {0}")]
    UniformityFailed(String),
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
    use shuffle_core::ShuffleError;

    #[test]
    fn test_error_display() {
        let err = CliError::invalid_argument("count is not a number");
        assert!(err.to_string().contains("count is not a number"));

        let err: CliError = ShuffleError::ResourceExhausted { requested: 9 }.into();
        assert_eq!(
            err.to_string(),
            "Resource exhausted: unable to allocate 9 elements"
        );

        let err: CliError = ConfigError::Parse("bad toml".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
