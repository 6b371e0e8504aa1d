//! Commit classifier trait.

use changemoji_commit::{ClassifiedCommit, RawCommit};

use super::Plugin;

/// Classifies raw commit messages.
///
/// Classification is total: a message the classifier does not understand
/// still yields a [`ClassifiedCommit`], with no `type`.
pub trait CommitClassifier: Plugin {
    /// Classifies a single raw commit.
    fn classify(&self, raw: &RawCommit) -> ClassifiedCommit;

    /// Classifies every commit, preserving input order.
    fn classify_all(&self, raws: &[RawCommit]) -> Vec<ClassifiedCommit> {
        raws.iter().map(|raw| self.classify(raw)).collect()
    }
}
