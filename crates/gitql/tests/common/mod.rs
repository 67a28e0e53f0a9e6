//! Scratch repositories for integration tests.

#![allow(dead_code)]

use git2::{Commit, ObjectType, Oid, Repository, Signature, Time};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const COMMIT_TIME: i64 = 1_700_000_000;

pub fn signature() -> Signature<'static> {
    Signature::new("Test User", "test@example.com", &Time::new(COMMIT_TIME, 0))
        .expect("Failed to build signature")
}

/// Creates `<temp>/<name>` and initializes an empty repository in it.
pub fn init_repo(temp: &TempDir, name: &str) -> (PathBuf, Repository) {
    let path = temp.path().join(name);
    fs::create_dir_all(&path).expect("Failed to create repo dir");
    let repo = Repository::init(&path).expect("Failed to init git repo");
    (path, repo)
}

/// Writes `file`, stages it and commits on top of HEAD.
pub fn commit_file(repo: &Repository, file: &str, contents: &str, message: &str) -> Oid {
    let workdir = repo.workdir().expect("Repository has no workdir");
    fs::write(workdir.join(file), contents).expect("Failed to write file");

    let mut index = repo.index().expect("Failed to open index");
    index.add_path(Path::new(file)).expect("Failed to add file");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&Commit> = parent.iter().collect();
    let sig = signature();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Failed to commit")
}

/// A repository named `repo` with two commits, a lightweight tag and an annotated tag.
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let (path, repo) = init_repo(&temp, "repo");

    let first = commit_file(&repo, "README.md", "# Test Repo\n", "Initial commit");
    commit_file(&repo, "src.rs", "fn main() {}\n", "Add source file");

    let first = repo
        .find_object(first, Some(ObjectType::Commit))
        .expect("Failed to find commit");
    repo.tag_lightweight("v0.1", &first, false)
        .expect("Failed to create lightweight tag");
    let head = repo
        .head()
        .and_then(|h| h.peel(ObjectType::Commit))
        .expect("Failed to peel HEAD");
    repo.tag("v1.0", &head, &signature(), "First release", false)
        .expect("Failed to create annotated tag");

    (temp, path)
}

/// True when some ancestor of `path` already has a `.git` entry, in which
/// case "not found" cannot be observed from there.
pub fn inside_repository(path: &Path) -> bool {
    path.ancestors().any(|p| p.join(".git").exists())
}

/// A repository named `broken` with one commit whose HEAD names a branch
/// that does not exist.
pub fn create_broken_head_repo() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let (path, repo) = init_repo(&temp, "broken");
    commit_file(&repo, "README.md", "# Broken\n", "Initial commit");
    repo.set_head("refs/heads/gone")
        .expect("Failed to point HEAD at a missing branch");
    (temp, path)
}

/// Replaces the loose object `oid` with bytes that are not a valid object.
pub fn corrupt_object(repo_path: &Path, oid: Oid) {
    let hex = oid.to_string();
    let object = repo_path
        .join(".git")
        .join("objects")
        .join(&hex[..2])
        .join(&hex[2..]);
    // Loose objects are read-only; replace rather than overwrite in place
    fs::remove_file(&object).expect("Failed to remove object");
    fs::write(&object, b"garbage").expect("Failed to write object");
}
