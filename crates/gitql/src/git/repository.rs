//! Git repository wrapper for gitql.

use crate::error::{GitqlError, Result};
use git2::{Commit, Oid, Repository};
use std::path::{Path, PathBuf};

/// An open Git repository, owned by a single query invocation.
///
/// # Example
///
/// ```no_run
/// use gitql::git::{find_dot_git, open_repository};
///
/// let marker = find_dot_git("")?;
/// let (repo, head) = open_repository(&marker)?;
/// println!("{} is at {}", repo.path().display(), head);
/// # Ok::<(), gitql::GitqlError>(())
/// ```
pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

/// Opens the repository whose marker directory is `marker`, then checks that
/// it has history and that HEAD resolves to a commit.
///
/// Emptiness is checked before HEAD, since an empty repository has no HEAD
/// commit to resolve.
///
/// # Errors
///
/// - `GitqlError::Open` if libgit2 cannot open or inspect the repository.
/// - `GitqlError::EmptyRepository` if it has no commits.
/// - `GitqlError::Head` if HEAD does not resolve to a commit.
pub fn open_repository<P: AsRef<Path>>(marker: P) -> Result<(GitRepo, Oid)> {
    let repo = GitRepo::open(marker)?;

    if repo.is_empty()? {
        return Err(GitqlError::EmptyRepository(repo.path.display().to_string()));
    }

    let head = repo.head_id()?;
    tracing::debug!("resolved HEAD of {} to {}", repo.path.display(), head);

    Ok((repo, head))
}

impl GitRepo {
    /// Opens the repository at exactly `path` without searching upwards.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(GitqlError::Open)?;

        Ok(Self {
            repo,
            path: path.to_path_buf(),
        })
    }

    /// Returns the path the repository was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the working directory, or `None` for a bare repository.
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Returns a reference to the underlying `git2::Repository`.
    pub fn inner(&self) -> &Repository {
        &self.repo
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.repo.is_empty().map_err(GitqlError::Open)
    }

    /// Resolves HEAD to the id of the commit it points at.
    pub fn head_id(&self) -> Result<Oid> {
        let head = self.repo.head().map_err(GitqlError::Head)?;
        let commit = head.peel_to_commit().map_err(GitqlError::Head)?;
        Ok(commit.id())
    }

    /// Returns the symbolic name HEAD points at, e.g. `refs/heads/main`.
    pub fn head_name(&self) -> Option<String> {
        self.repo
            .head()
            .ok()
            .and_then(|head| head.name().map(str::to_string))
    }

    pub fn walk_commits(&self) -> Result<impl Iterator<Item = Result<Commit<'_>>>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(git2::Sort::TIME | git2::Sort::TOPOLOGICAL)?;

        Ok(revwalk.map(move |oid_result| match oid_result {
            Ok(oid) => self.repo.find_commit(oid).map_err(GitqlError::Git),
            Err(e) => Err(GitqlError::Git(e)),
        }))
    }

    pub fn references(&self) -> Result<git2::References<'_>> {
        Ok(self.repo.references()?)
    }

    pub fn tag_references(&self) -> Result<git2::References<'_>> {
        Ok(self.repo.references_glob("refs/tags/*")?)
    }
}
