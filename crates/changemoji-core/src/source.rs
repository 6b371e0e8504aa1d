//! Commit sources.

use std::path::PathBuf;

use changemoji_commit::RawCommit;
use changemoji_git::Repository;
use tracing::debug;

use crate::CoreResult;

/// Hands over the commits of one comparison range, in the order they should
/// appear within each changelog section.
pub trait CommitSource {
    /// Returns the commits.
    ///
    /// # Errors
    ///
    /// Returns an error if the commits cannot be read.
    fn commits(&self) -> CoreResult<Vec<RawCommit>>;
}

impl CommitSource for [RawCommit] {
    fn commits(&self) -> CoreResult<Vec<RawCommit>> {
        Ok(self.to_vec())
    }
}

impl CommitSource for Vec<RawCommit> {
    fn commits(&self) -> CoreResult<Vec<RawCommit>> {
        self.as_slice().commits()
    }
}

/// The commits of a local git repository between two revisions.
///
/// Commits come newest first unless [`GitRange::oldest_first`] is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRange {
    repository: PathBuf,
    base: Option<String>,
    head: String,
    oldest_first: bool,
}

impl GitRange {
    /// Creates a range of every commit reachable from `head`.
    #[must_use]
    pub fn new(repository: impl Into<PathBuf>, head: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            base: None,
            head: head.into(),
            oldest_first: false,
        }
    }

    /// Excludes commits reachable from `base` (usually the previous tag).
    #[must_use]
    pub fn since(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Yields commits in chronological order.
    #[must_use]
    pub fn oldest_first(mut self) -> Self {
        self.oldest_first = true;
        self
    }
}

impl CommitSource for GitRange {
    fn commits(&self) -> CoreResult<Vec<RawCommit>> {
        let repo = Repository::discover(&self.repository)?;
        let mut commits = repo.commits_between(self.base.as_deref(), &self.head)?;

        if self.oldest_first {
            commits.reverse();
        }

        debug!(
            base = ?self.base,
            head = %self.head,
            count = commits.len(),
            "read commit range"
        );
        Ok(commits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use changemoji_git::GitError;
    use git2::Signature;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, git2::Repository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = git2::Repository::init(temp_dir.path()).unwrap();
        (temp_dir, repo)
    }

    fn commit(repo: &git2::Repository, message: &str) {
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    fn tag(repo: &git2::Repository, name: &str) {
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        repo.tag_lightweight(name, head.as_object(), false).unwrap();
    }

    fn subjects(commits: &[RawCommit]) -> Vec<&str> {
        commits.iter().map(RawCommit::subject).collect()
    }

    #[test]
    fn test_vec_source() {
        let source = vec![RawCommit::from_message("feat: a")];
        assert_eq!(source.commits().unwrap().len(), 1);
    }

    #[test]
    fn test_git_range_newest_first() {
        let (temp_dir, repo) = init_repo();
        commit(&repo, "chore: init");
        tag(&repo, "v0.1.0");
        commit(&repo, "feat: one");
        commit(&repo, "fix: two");

        let commits = GitRange::new(temp_dir.path(), "HEAD")
            .since("v0.1.0")
            .commits()
            .unwrap();
        assert_eq!(subjects(&commits), vec!["fix: two", "feat: one"]);
    }

    #[test]
    fn test_git_range_oldest_first() {
        let (temp_dir, repo) = init_repo();
        commit(&repo, "feat: one");
        commit(&repo, "fix: two");

        let commits = GitRange::new(temp_dir.path(), "HEAD")
            .oldest_first()
            .commits()
            .unwrap();
        assert_eq!(subjects(&commits), vec!["feat: one", "fix: two"]);
    }

    #[test]
    fn test_git_range_unknown_base() {
        let (temp_dir, repo) = init_repo();
        commit(&repo, "feat: one");

        let range = GitRange::new(temp_dir.path(), "HEAD").since("v9.9.9");
        assert!(matches!(
            range.commits(),
            Err(CoreError::Git(GitError::RefNotFound(_)))
        ));
    }

    #[test]
    fn test_git_range_not_a_repo() {
        let temp_dir = TempDir::new().unwrap();
        let range = GitRange::new(temp_dir.path(), "HEAD");
        assert!(matches!(
            range.commits(),
            Err(CoreError::Git(GitError::NotARepo(_)))
        ));
    }
}
