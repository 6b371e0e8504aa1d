//! Plugin pipeline execution.

use changemoji_classifier_conventional::ConventionalClassifier;
use changemoji_commit::{ClassifiedCommit, RawCommit};
use changemoji_config::Config;
use changemoji_plugin::{ChangelogRenderer, ChangelogSection, CommitClassifier};
use changemoji_renderer_emoji::EmojiRenderer;
use tracing::{debug, info};

use crate::registry::{classifier_by_name, renderer_from_config};
use crate::{ChangelogSink, CommitSource, CoreResult};

/// Orchestrates plugin execution.
pub struct Pipeline {
    classifier: Box<dyn CommitClassifier>,
    renderer: Box<dyn ChangelogRenderer>,
}

impl Pipeline {
    /// Creates a new pipeline with the given plugins.
    #[must_use]
    pub fn new(
        classifier: Box<dyn CommitClassifier>,
        renderer: Box<dyn ChangelogRenderer>,
    ) -> Self {
        Self {
            classifier,
            renderer,
        }
    }

    /// Builds the pipeline the configuration names.
    ///
    /// # Errors
    ///
    /// Returns an error if a plugin name is unknown or a category override
    /// is invalid.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let classifier = classifier_by_name(&config.classifier.name)?;
        let renderer = renderer_from_config(config)?;
        debug!(
            classifier = %classifier.id(),
            renderer = %renderer.id(),
            "pipeline ready"
        );
        Ok(Self::new(classifier, renderer))
    }

    /// Classifies raw commits using the configured classifier.
    pub fn classify_commits(&self, raw_commits: &[RawCommit]) -> Vec<ClassifiedCommit> {
        let commits = self.classifier.classify_all(raw_commits);

        for (raw, commit) in raw_commits.iter().zip(&commits) {
            if !commit.is_classified() {
                debug!(
                    hash = %raw.short_hash(),
                    subject = %raw.subject(),
                    "routing unclassified commit to fallback category"
                );
            }
        }

        commits
    }

    /// Classifies and groups commits into ordered sections.
    pub fn sections(&self, raw_commits: &[RawCommit]) -> Vec<ChangelogSection> {
        self.renderer.sections(&self.classify_commits(raw_commits))
    }

    /// Classifies and renders commits into changelog text.
    pub fn generate(&self, raw_commits: &[RawCommit]) -> String {
        let commits = self.classify_commits(raw_commits);
        let output = self.renderer.render(&commits);
        info!(
            commits = commits.len(),
            bytes = output.len(),
            "rendered changelog"
        );
        output
    }

    /// Pulls commits from the source, renders them and publishes the text.
    ///
    /// Returns the rendered text.
    ///
    /// # Errors
    ///
    /// Returns an error if the source or the sink fails.
    pub fn run(
        &self,
        source: &dyn CommitSource,
        sink: &mut dyn ChangelogSink,
    ) -> CoreResult<String> {
        let raw_commits = source.commits()?;
        let output = self.generate(&raw_commits);
        sink.publish(&output)?;
        Ok(output)
    }

    /// Returns a reference to the classifier.
    pub fn classifier(&self) -> &dyn CommitClassifier {
        self.classifier.as_ref()
    }

    /// Returns a reference to the renderer.
    pub fn renderer(&self) -> &dyn ChangelogRenderer {
        self.renderer.as_ref()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(
            Box::new(ConventionalClassifier::new()),
            Box::new(EmojiRenderer::new()),
        )
    }
}

/// Renders plain commit messages with the built-in classifier, renderer and
/// category table.
pub fn render_messages<I>(messages: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let raw_commits: Vec<RawCommit> = messages
        .into_iter()
        .map(|message| RawCommit::from_message(message.as_ref()))
        .collect();
    Pipeline::default().generate(&raw_commits)
}
