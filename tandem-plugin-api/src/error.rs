//! Error types for plugin authors

use thiserror::Error;

/// Errors that plugins can return
#[derive(Error, Debug)]
pub enum PluginError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Custom error with message
    #[error("{0}")]
    Custom(String),

    /// Duplicate provider registration
    #[error("Duplicate provider: {0}")]
    DuplicateProvider(String),

    /// Prompt capability failed
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Operation was cancelled by the host or the user
    #[error("Operation cancelled")]
    Cancelled,
}

impl PluginError {
    /// Create a custom error with a message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = PluginError::Config("missing key".to_string());
        assert_eq!(config_err.to_string(), "Configuration error: missing key");

        let custom_err = PluginError::Custom("something happened".to_string());
        assert_eq!(custom_err.to_string(), "something happened");

        let cancelled = PluginError::Cancelled;
        assert_eq!(cancelled.to_string(), "Operation cancelled");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let plugin_err: PluginError = io_err.into();

        assert!(matches!(plugin_err, PluginError::Io(_)));
        assert!(plugin_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_helper_constructors() {
        let err = PluginError::custom("test");
        assert!(matches!(err, PluginError::Custom(_)));

        let err = PluginError::config("bad config");
        assert!(matches!(err, PluginError::Config(_)));

        let err = PluginError::prompt("stream closed");
        assert!(matches!(err, PluginError::Prompt(_)));
    }

    #[test]
    fn test_duplicate_provider_error() {
        let err = PluginError::DuplicateProvider("deepseek".into());
        assert!(err.to_string().contains("deepseek"));
    }
}
