//! Plugin error types.

use thiserror::Error;

/// Plugin-related errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// No plugin of the requested kind has this name.
    #[error("{kind} plugin not found: {name}")]
    NotFound {
        /// The plugin kind ("classifier", "renderer").
        kind: &'static str,
        /// The requested name.
        name: String,
    },

    /// A category descriptor could not be built.
    #[error("invalid category: {0}")]
    InvalidCategory(String),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;
