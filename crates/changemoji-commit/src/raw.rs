//! Raw commit type as handed over by the surrounding shell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit as retrieved from Git (or a release comparison), before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// The commit hash (SHA).
    pub hash: String,

    /// The full commit message (header + body + footer).
    pub message: String,

    /// The commit author name.
    pub author: String,

    /// The commit author email.
    pub email: String,

    /// The commit date.
    pub date: DateTime<Utc>,
}

impl RawCommit {
    /// Creates a new raw commit.
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            author: author.into(),
            email: email.into(),
            date,
        }
    }

    /// Creates a raw commit carrying only a message.
    ///
    /// The remaining fields are empty and the date is the Unix epoch, so two
    /// commits built from the same message compare equal.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new("", message, "", "", DateTime::<Utc>::default())
    }

    /// Returns the first line of the commit message (the header).
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}

impl From<&str> for RawCommit {
    fn from(message: &str) -> Self {
        Self::from_message(message)
    }
}

impl From<String> for RawCommit {
    fn from(message: String) -> Self {
        Self::from_message(message)
    }
}
