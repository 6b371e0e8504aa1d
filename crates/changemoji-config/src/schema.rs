//! Configuration schema.

use std::collections::HashSet;

use changemoji_plugin::RendererConfig;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Classifier configuration.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Renderer configuration.
    #[serde(default)]
    pub renderer: RendererPluginConfig,

    /// Changelog output configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Overrides and additions to the category table.
    #[serde(default)]
    pub categories: Vec<CategoryOverride>,
}

impl Config {
    /// Checks values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns an error on empty or duplicate category keys, or on empty
    /// annotations.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.key.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "category key must not be empty".to_string(),
                ));
            }
            if !seen.insert(category.key.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate category `{}`",
                    category.key
                )));
            }
        }

        if self
            .renderer
            .options
            .strip_annotations
            .iter()
            .any(String::is_empty)
        {
            return Err(ConfigError::Invalid(
                "strip_annotations must not contain empty strings".to_string(),
            ));
        }

        Ok(())
    }
}

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Classifier plugin name.
    #[serde(default = "default_classifier")]
    pub name: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            name: default_classifier(),
        }
    }
}

fn default_classifier() -> String {
    "conventional".to_string()
}

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererPluginConfig {
    /// Renderer plugin name.
    #[serde(default = "default_renderer")]
    pub name: String,

    /// Options passed to the renderer.
    #[serde(flatten)]
    pub options: RendererConfig,
}

impl Default for RendererPluginConfig {
    fn default() -> Self {
        Self {
            name: default_renderer(),
            options: RendererConfig::default(),
        }
    }
}

fn default_renderer() -> String {
    "emoji".to_string()
}

/// Changelog output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Output file path.
    #[serde(default = "default_changelog_output")]
    pub output: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            output: default_changelog_output(),
        }
    }
}

fn default_changelog_output() -> String {
    "CHANGELOG.md".to_string()
}

/// Patch for one category descriptor.
///
/// Unset fields keep the built-in value. A key the built-in table does not
/// know adds a new category, which then needs at least a `title`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOverride {
    /// Category key.
    pub key: String,

    /// Unicode glyph.
    pub emoji: Option<String>,

    /// GitHub shortcode.
    pub shortcode: Option<String>,

    /// Section heading.
    pub title: Option<String>,

    /// Sort rank.
    pub order: Option<i32>,
}
