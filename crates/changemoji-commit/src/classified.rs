//! Classified commit type produced by a classifier plugin.

use serde::{Deserialize, Serialize};

/// A trailer from the footer block of a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// The trailer token (e.g. "Refs", "Reviewed-by", "BREAKING CHANGE").
    pub token: String,

    /// The trailer value, continuation lines included.
    pub value: String,
}

impl Footer {
    /// Creates a new footer.
    #[must_use]
    pub fn new(token: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            value: value.into(),
        }
    }

    /// Returns true if this footer announces a breaking change.
    #[must_use]
    pub fn is_breaking_change(&self) -> bool {
        self.token == "BREAKING CHANGE" || self.token == "BREAKING-CHANGE"
    }
}

/// A commit after classification.
///
/// Every raw message yields exactly one `ClassifiedCommit`. A message that
/// does not follow `type(scope): subject` has no `type` and keeps its first
/// line in `header`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCommit {
    /// The commit hash, empty when classified from a bare message.
    #[serde(default)]
    pub hash: String,

    /// The lowercase category key (feat, fix, docs, etc.), if one was found.
    pub r#type: Option<String>,

    /// The optional scope.
    pub scope: Option<String>,

    /// The text after the colon on the first line, trimmed.
    pub subject: String,

    /// The verbatim first line.
    pub header: String,

    /// Whether this is a breaking change.
    #[serde(default)]
    pub breaking: bool,

    /// Free text between the header and the footer block.
    #[serde(default)]
    pub body: Option<String>,

    /// Trailers from the last paragraph of the message.
    #[serde(default)]
    pub footers: Vec<Footer>,
}

impl ClassifiedCommit {
    /// Creates a new classified commit builder.
    #[must_use]
    pub fn builder(header: impl Into<String>) -> ClassifiedCommitBuilder {
        ClassifiedCommitBuilder::new(header)
    }

    /// Creates a commit with no recognised type.
    #[must_use]
    pub fn unclassified(header: impl Into<String>) -> Self {
        Self::builder(header).build()
    }

    /// Returns true if a type token was recognised.
    #[must_use]
    pub fn is_classified(&self) -> bool {
        self.r#type.is_some()
    }

    /// Returns the text shown in a changelog: the subject, or the header when
    /// the subject is empty.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.subject.is_empty() {
            &self.header
        } else {
            &self.subject
        }
    }

    /// Returns the value of the first `BREAKING CHANGE` footer.
    #[must_use]
    pub fn breaking_change(&self) -> Option<&str> {
        self.footers
            .iter()
            .find(|footer| footer.is_breaking_change())
            .map(|footer| footer.value.as_str())
    }
}

/// Builder for [`ClassifiedCommit`].
#[derive(Debug)]
pub struct ClassifiedCommitBuilder {
    hash: String,
    r#type: Option<String>,
    scope: Option<String>,
    subject: String,
    header: String,
    breaking: bool,
    body: Option<String>,
    footers: Vec<Footer>,
}

impl ClassifiedCommitBuilder {
    fn new(header: impl Into<String>) -> Self {
        Self {
            hash: String::new(),
            r#type: None,
            scope: None,
            subject: String::new(),
            header: header.into(),
            breaking: false,
            body: None,
            footers: Vec::new(),
        }
    }

    /// Sets the hash.
    #[must_use]
    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Sets the type token.
    #[must_use]
    pub fn r#type(mut self, r#type: impl Into<String>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the subject.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the breaking flag.
    #[must_use]
    pub fn breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends a footer.
    #[must_use]
    pub fn footer(mut self, footer: Footer) -> Self {
        self.footers.push(footer);
        self
    }

    /// Builds the [`ClassifiedCommit`].
    #[must_use]
    pub fn build(self) -> ClassifiedCommit {
        ClassifiedCommit {
            hash: self.hash,
            r#type: self.r#type,
            scope: self.scope,
            subject: self.subject,
            header: self.header,
            breaking: self.breaking,
            body: self.body,
            footers: self.footers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let commit = ClassifiedCommit::builder("feat(api)!: add endpoint")
            .hash("abc123")
            .r#type("feat")
            .scope("api")
            .subject("add endpoint")
            .breaking(true)
            .body("Longer explanation.")
            .footer(Footer::new("Refs", "#42"))
            .build();

        assert_eq!(commit.hash, "abc123");
        assert_eq!(commit.r#type.as_deref(), Some("feat"));
        assert_eq!(commit.scope.as_deref(), Some("api"));
        assert_eq!(commit.subject, "add endpoint");
        assert_eq!(commit.header, "feat(api)!: add endpoint");
        assert!(commit.breaking);
        assert_eq!(commit.body.as_deref(), Some("Longer explanation."));
        assert_eq!(commit.footers, vec![Footer::new("Refs", "#42")]);
    }

    #[test]
    fn test_unclassified() {
        let commit = ClassifiedCommit::unclassified("random message");
        assert!(!commit.is_classified());
        assert!(commit.subject.is_empty());
        assert_eq!(commit.header, "random message");
        assert_eq!(commit.display_text(), "random message");
    }

    #[test]
    fn test_display_text_prefers_subject() {
        let commit = ClassifiedCommit::builder("fix: null check")
            .r#type("fix")
            .subject("null check")
            .build();
        assert_eq!(commit.display_text(), "null check");
    }

    #[test]
    fn test_display_text_falls_back_to_header() {
        let commit = ClassifiedCommit::builder("feat: ").r#type("feat").build();
        assert_eq!(commit.display_text(), "feat: ");
    }

    #[test]
    fn test_breaking_change_footer() {
        let commit = ClassifiedCommit::builder("feat: x")
            .footer(Footer::new("Refs", "#1"))
            .footer(Footer::new("BREAKING-CHANGE", "config moved"))
            .build();
        assert_eq!(commit.breaking_change(), Some("config moved"));

        let plain = ClassifiedCommit::unclassified("x");
        assert!(plain.breaking_change().is_none());
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{"type":"fix","scope":null,"subject":"bug","header":"fix: bug"}"#;
        let commit: ClassifiedCommit = serde_json::from_str(json).unwrap();
        assert_eq!(commit.r#type.as_deref(), Some("fix"));
        assert!(commit.footers.is_empty());
        assert!(!commit.breaking);
    }
}
