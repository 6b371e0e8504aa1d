//! Changelog renderer trait.

use changemoji_commit::ClassifiedCommit;
use serde::{Deserialize, Serialize};

use super::Plugin;
use crate::CategoryDescriptor;

/// How a category's emoji is written into the heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiStyle {
    /// The Unicode glyph (e.g. ✨).
    #[default]
    Unicode,
    /// The GitHub shortcode (e.g. `:sparkles:`).
    Shortcode,
}

impl EmojiStyle {
    /// Returns the descriptor's emoji in this style.
    #[must_use]
    pub fn pick(self, descriptor: &CategoryDescriptor) -> &str {
        match self {
            Self::Unicode => &descriptor.emoji,
            Self::Shortcode => &descriptor.shortcode,
        }
    }
}

/// Configuration for the changelog renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Emoji style for section headings.
    #[serde(default)]
    pub emoji_style: EmojiStyle,

    /// Literal annotations removed from every commit line.
    #[serde(default = "default_strip_annotations")]
    pub strip_annotations: Vec<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            emoji_style: EmojiStyle::default(),
            strip_annotations: default_strip_annotations(),
        }
    }
}

fn default_strip_annotations() -> Vec<String> {
    vec!["[ci skip]".to_string()]
}

/// One category of a rendered changelog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogSection {
    /// The category this section is for.
    pub descriptor: CategoryDescriptor,

    /// Formatted commit lines (`- Text`), in input order.
    pub lines: Vec<String>,
}

impl ChangelogSection {
    /// Creates an empty section for a category.
    #[must_use]
    pub fn new(descriptor: CategoryDescriptor) -> Self {
        Self {
            descriptor,
            lines: Vec::new(),
        }
    }

    /// Returns the number of commit lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the section holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Renders classified commits into changelog text.
pub trait ChangelogRenderer: Plugin {
    /// Groups, orders and formats commits into sections.
    fn sections(&self, commits: &[ClassifiedCommit]) -> Vec<ChangelogSection>;

    /// Renders commits into a single text block. Empty input renders as "".
    fn render(&self, commits: &[ClassifiedCommit]) -> String;
}
