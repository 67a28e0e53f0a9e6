//! Named database handle bound to an open repository.

use crate::git::GitRepo;
use std::path::Path;

/// A repository exposed as a queryable database under a display name.
///
/// The name is the repository's working-directory name, derived from the
/// marker path it was located at.
pub struct Database {
    name: String,
    repo: GitRepo,
}

impl Database {
    /// Binds `repo`, located at `marker`, to a database named after the
    /// directory that contains the marker.
    pub fn bind<P: AsRef<Path>>(marker: P, repo: GitRepo) -> Self {
        Self {
            name: database_name(marker.as_ref()),
            repo,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repo(&self) -> &GitRepo {
        &self.repo
    }
}

/// Base name of the directory one level above `marker`.
///
/// `/a/b/project/.git` gives `project`. A marker directly under the
/// filesystem root gives the root's own display form so the name is never empty.
pub fn database_name(marker: &Path) -> String {
    let parent = marker.parent().unwrap_or(marker);
    match parent.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None if parent.as_os_str().is_empty() => ".".to_string(),
        None => parent.display().to_string(),
    }
}
