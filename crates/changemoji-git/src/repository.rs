//! Git repository wrapper.

use std::path::Path;

use changemoji_commit::RawCommit;
use chrono::{TimeZone, Utc};
use git2::{Oid, Repository as Git2Repo};
use tracing::debug;

use crate::{GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Discovers the repository containing the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the commits reachable from `head` but not from `base`.
    ///
    /// Commits come newest first, as the revision walk yields them. With no
    /// `base`, every commit reachable from `head` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a revision does not resolve or commits cannot be read.
    pub fn commits_between(&self, base: Option<&str>, head: &str) -> GitResult<Vec<RawCommit>> {
        let head_oid = self.resolve(head)?;

        let mut revwalk = self.inner.revwalk()?;
        revwalk.push(head_oid)?;

        if let Some(base) = base {
            revwalk.hide(self.resolve(base)?)?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            let author = commit.author();

            commits.push(RawCommit::new(
                commit.id().to_string(),
                String::from_utf8_lossy(commit.message_bytes()),
                author.name().unwrap_or("Unknown"),
                author.email().unwrap_or(""),
                Utc.timestamp_opt(commit.time().seconds(), 0)
                    .single()
                    .unwrap_or_default(),
            ));
        }

        debug!(?base, head, count = commits.len(), "collected commits");
        Ok(commits)
    }

    /// Resolves a revision (tag, branch, SHA, `HEAD~2`...) to a commit id.
    fn resolve(&self, spec: &str) -> GitResult<Oid> {
        self.inner
            .revparse_single(spec)
            .and_then(|object| object.peel_to_commit())
            .map(|commit| commit.id())
            .map_err(|_| GitError::RefNotFound(spec.to_string()))
    }
}
