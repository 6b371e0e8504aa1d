//! Core error types.

use thiserror::Error;

/// Core-related errors.
///
/// Classification and rendering never fail; every variant comes from the
/// I/O around them.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] changemoji_git::GitError),

    /// Plugin error.
    #[error("plugin error: {0}")]
    Plugin(#[from] changemoji_plugin::PluginError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] changemoji_config::ConfigError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
