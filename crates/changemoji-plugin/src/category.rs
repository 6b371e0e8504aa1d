//! Category descriptors and the lookup table renderers use.

use serde::{Deserialize, Serialize};

use crate::{PluginError, PluginResult};

/// Key of the fallback category.
pub const UNKNOWN_KEY: &str = "unknown";

/// Display metadata for one commit category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    /// The category token (e.g. "feat").
    pub key: String,

    /// Unicode glyph shown before the title.
    pub emoji: String,

    /// GitHub emoji shortcode (e.g. ":sparkles:").
    pub shortcode: String,

    /// Section heading.
    pub title: String,

    /// Sort rank, lower sorts first.
    pub order: i32,
}

impl CategoryDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        emoji: impl Into<String>,
        shortcode: impl Into<String>,
        title: impl Into<String>,
        order: i32,
    ) -> Self {
        Self {
            key: key.into(),
            emoji: emoji.into(),
            shortcode: shortcode.into(),
            title: title.into(),
            order,
        }
    }

    /// Returns true if this is the fallback descriptor.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.key == UNKNOWN_KEY
    }
}

/// Known categories plus the `unknown` fallback.
///
/// The fallback lives outside the list of known entries so it can be
/// replaced but never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<CategoryDescriptor>,
    fallback: CategoryDescriptor,
}

impl CategoryTable {
    /// Inserts a descriptor, returning the one it replaced.
    ///
    /// Inserting the `unknown` key replaces the fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or not a lowercase token.
    pub fn insert(
        &mut self,
        descriptor: CategoryDescriptor,
    ) -> PluginResult<Option<CategoryDescriptor>> {
        validate_key(&descriptor.key)?;

        if descriptor.is_fallback() {
            return Ok(Some(std::mem::replace(&mut self.fallback, descriptor)));
        }

        match self.entries.iter_mut().find(|d| d.key == descriptor.key) {
            Some(existing) => Ok(Some(std::mem::replace(existing, descriptor))),
            None => {
                self.entries.push(descriptor);
                Ok(None)
            }
        }
    }

    /// Looks up a descriptor by key, the fallback included.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CategoryDescriptor> {
        if key == UNKNOWN_KEY {
            return Some(&self.fallback);
        }
        self.entries.iter().find(|d| d.key == key)
    }

    /// Returns the descriptor for a commit type, or the fallback when the
    /// type is absent or not in the table.
    #[must_use]
    pub fn resolve(&self, key: Option<&str>) -> &CategoryDescriptor {
        key.and_then(|k| self.get(k)).unwrap_or(&self.fallback)
    }

    /// Returns the fallback descriptor.
    #[must_use]
    pub fn fallback(&self) -> &CategoryDescriptor {
        &self.fallback
    }

    /// Iterates over the known descriptors followed by the fallback.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryDescriptor> {
        self.entries.iter().chain(std::iter::once(&self.fallback))
    }

    /// Returns the number of descriptors, the fallback included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len() + 1
    }

    /// Always false: the fallback is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let entry = CategoryDescriptor::new;
        Self {
            entries: vec![
                entry("feat", "✨", ":sparkles:", "Features", 0),
                entry("fix", "🐛", ":bug:", "Bug Fixes", 1),
                entry("style", "💎", ":gem:", "Styling", 2),
                entry("docs", "📚", ":books:", "Docs", 3),
                entry("refactor", "🔨", ":hammer:", "Refactor", 10),
                entry("perf", "🚀", ":rocket:", "Performance Improvements", 10),
                entry("test", "🚨", ":rotating_light:", "Tests", 10),
                entry("build", "📦", ":package:", "Build", 10),
                entry("ci", "👷", ":construction_worker:", "CI", 10),
                entry("chore", "🔧", ":wrench:", "Chores", 10),
            ],
            fallback: entry(UNKNOWN_KEY, "❓", ":question:", "Others", 10),
        }
    }
}

fn validate_key(key: &str) -> PluginResult<()> {
    if key.is_empty() {
        return Err(PluginError::InvalidCategory(
            "key must not be empty".to_string(),
        ));
    }

    let valid = key
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !valid {
        return Err(PluginError::InvalidCategory(format!(
            "key `{key}` must be a lowercase token"
        )));
    }

    Ok(())
}
