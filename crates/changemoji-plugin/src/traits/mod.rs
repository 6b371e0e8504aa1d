//! Plugin traits.

pub mod classifier;
pub mod renderer;

/// Base trait for all plugins.
pub trait Plugin: Send + Sync {
    /// Returns the plugin name, as referenced from configuration.
    fn name(&self) -> &'static str;

    /// Returns the plugin version.
    fn version(&self) -> &'static str;

    /// Returns a short description of the plugin.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns `name@version`, used in log fields.
    fn id(&self) -> String {
        format!("{}@{}", self.name(), self.version())
    }
}
