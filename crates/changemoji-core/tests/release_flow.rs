//! End-to-end tests: git range in, changelog file out.

use std::fs;
use std::path::Path;

use changemoji_config::find_and_load_config_from;
use changemoji_core::{FileSink, GitRange, Pipeline};
use git2::{Repository, Signature};
use tempfile::TempDir;

fn init_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();
    (temp_dir, repo)
}

fn commit(repo: &Repository, message: &str) {
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
}

fn tag(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.tag_lightweight(name, head.as_object(), false).unwrap();
}

fn release_repo() -> (TempDir, Repository) {
    let (temp_dir, repo) = init_repo();
    commit(&repo, "chore: init");
    tag(&repo, "v1.0.0");
    commit(&repo, "feat: add login");
    commit(&repo, "fix(auth): null check [ci skip]");
    commit(&repo, "docs: describe config");
    commit(
        &repo,
        "feat!: drop legacy api\n\nThe v1 endpoints are gone.\n\nBREAKING CHANGE: clients must move to v2",
    );
    commit(&repo, "random tweak");
    tag(&repo, "v1.1.0");
    (temp_dir, repo)
}

fn write_config(root: &Path, content: &str) {
    fs::write(root.join("changemoji.toml"), content).unwrap();
}

#[test]
fn test_release_with_default_config() {
    let (temp_dir, _repo) = release_repo();
    write_config(temp_dir.path(), "");

    let config = find_and_load_config_from(temp_dir.path()).unwrap();
    let pipeline = Pipeline::from_config(&config).unwrap();
    let source = GitRange::new(temp_dir.path(), "v1.1.0").since("v1.0.0");
    let mut sink = FileSink::from_config(&config.changelog, temp_dir.path());

    let output = pipeline.run(&source, &mut sink).unwrap();

    insta::assert_snapshot!(output, @r"
    ### ✨ Features:
    - Drop legacy api
    - Add login

    ### 🐛 Bug Fixes:
    - Null check

    ### 📚 Docs:
    - Describe config

    ### ❓ Others:
    - Random tweak
    ");

    let written = fs::read_to_string(temp_dir.path().join("CHANGELOG.md")).unwrap();
    assert_eq!(written, output);
}

#[test]
fn test_release_with_configured_overrides() {
    let (temp_dir, _repo) = release_repo();
    write_config(
        temp_dir.path(),
        r#"
        [renderer]
        emoji_style = "shortcode"

        [changelog]
        output = "docs/RELEASE_NOTES.md"

        [[categories]]
        key = "feat"
        title = "New Features"

        [[categories]]
        key = "unknown"
        order = -1
        "#,
    );

    let nested = temp_dir.path().join("src");
    fs::create_dir(&nested).unwrap();
    let config = find_and_load_config_from(&nested).unwrap();

    let pipeline = Pipeline::from_config(&config).unwrap();
    let source = GitRange::new(&nested, "v1.1.0")
        .since("v1.0.0")
        .oldest_first();
    let mut sink = FileSink::from_config(&config.changelog, temp_dir.path());

    let output = pipeline.run(&source, &mut sink).unwrap();

    assert_eq!(
        output,
        "### :question: Others:\n- Random tweak\n\n\
         ### :sparkles: New Features:\n- Add login\n- Drop legacy api\n\n\
         ### :bug: Bug Fixes:\n- Null check\n\n\
         ### :books: Docs:\n- Describe config"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("docs/RELEASE_NOTES.md")).unwrap(),
        output
    );
}

#[test]
fn test_rerun_is_idempotent() {
    let (temp_dir, _repo) = release_repo();
    let pipeline = Pipeline::default();
    let source = GitRange::new(temp_dir.path(), "v1.1.0").since("v1.0.0");
    let mut sink = FileSink::new(temp_dir.path().join("CHANGELOG.md"));

    let first = pipeline.run(&source, &mut sink).unwrap();
    let second = pipeline.run(&source, &mut sink).unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(sink.path()).unwrap(), first);
}

#[test]
fn test_empty_range_writes_empty_changelog() {
    let (temp_dir, repo) = init_repo();
    commit(&repo, "chore: init");
    tag(&repo, "v1.0.0");

    let source = GitRange::new(temp_dir.path(), "HEAD").since("v1.0.0");
    let mut sink = FileSink::new(temp_dir.path().join("CHANGELOG.md"));

    let output = Pipeline::default().run(&source, &mut sink).unwrap();
    assert_eq!(output, "");
    assert_eq!(fs::read_to_string(sink.path()).unwrap(), "");
}

#[test]
fn test_breaking_change_is_retained_on_classified_commit() {
    let (temp_dir, _repo) = release_repo();
    let source = GitRange::new(temp_dir.path(), "v1.1.0").since("v1.0.0");
    let raws = changemoji_core::CommitSource::commits(&source).unwrap();

    let commits = Pipeline::default().classify_commits(&raws);
    let breaking = commits
        .iter()
        .find(|c| c.breaking)
        .expect("one breaking commit");

    assert_eq!(breaking.subject, "drop legacy api");
    assert_eq!(breaking.body.as_deref(), Some("The v1 endpoints are gone."));
    assert_eq!(breaking.breaking_change(), Some("clients must move to v2"));
    assert_eq!(breaking.hash.len(), 40);
}
