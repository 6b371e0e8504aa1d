//! Plugin system for Changemoji.
//!
//! This crate provides the plugin traits and the data they share:
//! - [`Plugin`]: Base trait for all plugins
//! - [`CommitClassifier`]: Turns raw commit messages into classified commits
//! - [`ChangelogRenderer`]: Turns classified commits into changelog text
//! - [`CategoryTable`]: Display metadata for every category, with the
//!   `unknown` fallback

mod category;
mod error;
mod traits;

pub use category::{CategoryDescriptor, CategoryTable, UNKNOWN_KEY};
pub use error::{PluginError, PluginResult};
pub use traits::Plugin;
pub use traits::classifier::CommitClassifier;
pub use traits::renderer::{ChangelogRenderer, ChangelogSection, EmojiStyle, RendererConfig};
