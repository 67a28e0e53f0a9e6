//! Upward search for the repository marker directory.

use crate::error::{GitqlError, Result};
use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Name of the directory that marks the root of a repository.
pub const DOT_GIT: &str = ".git";

/// Finds the `.git` marker for `start` or the closest ancestor that has one.
///
/// An empty `start` means the current working directory. The returned path is
/// the marker itself (`<workdir>/.git`), not the working directory; callers
/// that need the working directory strip the last segment.
///
/// Only a "does not exist" stat failure moves the search up a level. Any other
/// I/O failure is returned as-is.
///
/// # Errors
///
/// Returns `GitqlError::RepoNotFound` once the filesystem root has been
/// checked without finding a marker, or `GitqlError::Io` if the working
/// directory or a marker path cannot be inspected.
pub fn find_dot_git<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
    let start = start.as_ref();
    let mut current = if start.as_os_str().is_empty() {
        env::current_dir()?
    } else if start.is_relative() {
        normalize(&env::current_dir()?.join(start))
    } else {
        normalize(start)
    };
    let origin = current.clone();

    loop {
        let marker = current.join(DOT_GIT);
        match fs::metadata(&marker) {
            Ok(_) => {
                tracing::debug!("found repository marker at {}", marker.display());
                return Ok(marker);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no repository marker in {}", current.display());
            }
            Err(e) => return Err(GitqlError::Io(e)),
        }

        let next = current
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| current.clone());
        if next == current {
            return Err(GitqlError::RepoNotFound(origin.display().to_string()));
        }
        current = next;
    }
}

/// Resolves `.` and `..` lexically, without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
