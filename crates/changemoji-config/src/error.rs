//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Invalid TOML syntax or shape.
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/repo/changemoji.toml"));
        assert_eq!(
            err.to_string(),
            "configuration file not found: /repo/changemoji.toml"
        );
    }

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::Invalid("duplicate category `feat`".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: duplicate category `feat`"
        );
    }

    #[test]
    fn test_invalid_toml_from() {
        let toml_err = toml::from_str::<toml::Table>("[[[").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().starts_with("invalid TOML"));
    }
}
