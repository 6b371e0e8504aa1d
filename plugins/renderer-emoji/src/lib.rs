//! Emoji changelog renderer plugin.

use changemoji_commit::ClassifiedCommit;
use changemoji_plugin::{
    CategoryDescriptor, CategoryTable, ChangelogRenderer, ChangelogSection, Plugin, RendererConfig,
};

/// Emoji-headed changelog renderer.
///
/// Produces one `### {emoji} {title}:` section per category, ordered by the
/// category's `order`. Categories with the same `order` keep the order in
/// which their first commit appeared in the input.
pub struct EmojiRenderer {
    table: CategoryTable,
    config: RendererConfig,
}

impl EmojiRenderer {
    /// Creates a renderer with the default category table and configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: CategoryTable::default(),
            config: RendererConfig::default(),
        }
    }

    /// Replaces the category table.
    #[must_use]
    pub fn with_table(mut self, table: CategoryTable) -> Self {
        self.table = table;
        self
    }

    /// Replaces the renderer configuration.
    #[must_use]
    pub fn with_config(mut self, config: RendererConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the category table.
    #[must_use]
    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Groups commits into buckets in a single pass.
    ///
    /// Buckets appear in first-seen order and lines keep input order.
    fn group<'a>(
        &'a self,
        commits: &[ClassifiedCommit],
    ) -> Vec<(&'a CategoryDescriptor, Vec<String>)> {
        let mut buckets: Vec<(&CategoryDescriptor, Vec<String>)> = Vec::new();

        for commit in commits {
            let descriptor = self.table.resolve(commit.r#type.as_deref());
            let line = self.format_line(commit);

            match buckets.iter_mut().find(|(d, _)| d.key == descriptor.key) {
                Some((_, lines)) => lines.push(line),
                None => buckets.push((descriptor, vec![line])),
            }
        }

        buckets
    }

    /// Formats one commit as a `- Text` line.
    ///
    /// Text that is empty once annotations are gone renders as a bare `-`.
    fn format_line(&self, commit: &ClassifiedCommit) -> String {
        let mut text = capitalize(commit.display_text());

        for annotation in &self.config.strip_annotations {
            if !annotation.is_empty() {
                text = text.replace(annotation.as_str(), "");
            }
        }

        let text = text.trim();
        if text.is_empty() {
            "-".to_string()
        } else {
            format!("- {text}")
        }
    }

    fn format_section(&self, section: &ChangelogSection) -> String {
        let emoji = self.config.emoji_style.pick(&section.descriptor);
        format!(
            "### {emoji} {}:\n{}",
            section.descriptor.title,
            section.lines.join("\n")
        )
    }
}

impl Default for EmojiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for EmojiRenderer {
    fn name(&self) -> &'static str {
        "emoji"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Renders emoji-headed changelog sections"
    }
}

impl ChangelogRenderer for EmojiRenderer {
    fn sections(&self, commits: &[ClassifiedCommit]) -> Vec<ChangelogSection> {
        let mut buckets = self.group(commits);

        // Stable, so equal orders keep first-seen order.
        buckets.sort_by_key(|(descriptor, _)| descriptor.order);

        buckets
            .into_iter()
            .map(|(descriptor, lines)| ChangelogSection {
                descriptor: descriptor.clone(),
                lines,
            })
            .collect()
    }

    fn render(&self, commits: &[ClassifiedCommit]) -> String {
        self.sections(commits)
            .iter()
            .map(|section| self.format_section(section))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Uppercases the first character after any leading whitespace.
fn capitalize(text: &str) -> String {
    let (lead, rest) = text.split_at(text.len() - text.trim_start().len());
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => format!("{lead}{}{}", first.to_uppercase(), chars.as_str()),
        None => text.to_string(),
    }
}
