//! Conventional Commits classifier plugin.

use std::sync::LazyLock;

use changemoji_commit::{ClassifiedCommit, Footer, RawCommit};
use changemoji_plugin::{CommitClassifier, Plugin};
use regex::Regex;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>\w+)(?:\((?P<scope>[^()]*)\))?(?P<breaking>!)?:(?P<subject>.*)$")
        .expect("invalid regex")
});

static TRAILER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<token>BREAKING[ -]CHANGE|[A-Za-z][\w-]*)(?:: (?P<value>.*)| (?P<issue>#.*))$")
        .expect("invalid regex")
});

/// Conventional Commits classifier.
///
/// Recognises `type(scope)!: subject` headers. Anything else is kept as an
/// unclassified commit so the renderer can file it under the fallback
/// category.
pub struct ConventionalClassifier;

impl ConventionalClassifier {
    /// Creates a new conventional classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConventionalClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ConventionalClassifier {
    fn name(&self) -> &'static str {
        "conventional"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Classifies Conventional Commits messages"
    }
}

impl CommitClassifier for ConventionalClassifier {
    fn classify(&self, raw: &RawCommit) -> ClassifiedCommit {
        let mut commit = classify(&raw.message);
        commit.hash.clone_from(&raw.hash);
        commit
    }
}

/// Classifies a bare commit message.
///
/// Never fails: a message without a `type:` header comes back with no
/// `type` and its first line as `header`. The type token must open the
/// line, so an indented header stays unclassified.
#[must_use]
pub fn classify(message: &str) -> ClassifiedCommit {
    let mut lines = message.lines();
    let header = lines.next().unwrap_or("");

    let (body, footers) = split_body_and_footers(lines);

    let mut builder = ClassifiedCommit::builder(header);
    let mut breaking = footers.iter().any(Footer::is_breaking_change);

    if let Some(captures) = HEADER_RE.captures(header) {
        if let Some(commit_type) = captures.name("type") {
            builder = builder.r#type(commit_type.as_str().to_lowercase());
        }
        if let Some(scope) = captures
            .name("scope")
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
        {
            builder = builder.scope(scope);
        }
        if let Some(subject) = captures.name("subject") {
            builder = builder.subject(subject.as_str().trim());
        }
        breaking |= captures.name("breaking").is_some();
    }

    if let Some(body) = body {
        builder = builder.body(body);
    }
    for footer in footers {
        builder = builder.footer(footer);
    }

    builder.breaking(breaking).build()
}

/// Splits the lines after the header into a body and a footer block.
///
/// The last paragraph is the footer block when its first line is a trailer.
fn split_body_and_footers<'a>(
    lines: impl Iterator<Item = &'a str>,
) -> (Option<String>, Vec<Footer>) {
    let mut paragraphs: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines.map(str::trim_end) {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    let footers = match paragraphs.last() {
        Some(last) if last.first().is_some_and(|line| TRAILER_RE.is_match(line)) => {
            let footers = parse_footers(last);
            paragraphs.pop();
            footers
        }
        _ => Vec::new(),
    };

    let body = paragraphs
        .iter()
        .map(|paragraph| paragraph.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");

    let body = if body.is_empty() { None } else { Some(body) };
    (body, footers)
}

fn parse_footers(lines: &[&str]) -> Vec<Footer> {
    let mut footers: Vec<Footer> = Vec::new();

    for line in lines {
        match TRAILER_RE.captures(line) {
            Some(captures) => {
                let token = captures.name("token").map_or("", |m| m.as_str());
                let value = captures
                    .name("value")
                    .or_else(|| captures.name("issue"))
                    .map_or("", |m| m.as_str());
                footers.push(Footer::new(token, value.trim()));
            }
            None => {
                // Continuation of the previous trailer's value.
                if let Some(previous) = footers.last_mut() {
                    previous.value.push('\n');
                    previous.value.push_str(line.trim());
                }
            }
        }
    }

    footers
}
