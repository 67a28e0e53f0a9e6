//! Error types for gitql.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitqlError>;

#[derive(Error, Debug)]
pub enum GitqlError {
    #[error("Repository not found: unable to find a git repository above {0}")]
    RepoNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open repository: {0}")]
    Open(#[source] git2::Error),

    #[error("the repository is empty: {0}")]
    EmptyRepository(String),

    #[error("Failed to resolve HEAD: {0}")]
    Head(#[source] git2::Error),

    #[error("Query error: failed to read repository data: {0}")]
    Git(#[from] git2::Error),

    #[error("Query error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Query error: table not found: {0}")]
    TableNotFound(String),

    #[error("Query error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Output error: {0}")]
    Output(String),
}

impl GitqlError {
    /// Returns true for failures raised while loading or running a query,
    /// as opposed to failures finding or opening the repository.
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            GitqlError::Git(_)
                | GitqlError::Sql(_)
                | GitqlError::TableNotFound(_)
                | GitqlError::Regex(_)
        )
    }

    /// Process exit status for this error: 2 for query failures, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_query_error() {
            2
        } else {
            1
        }
    }
}

impl From<csv::Error> for GitqlError {
    fn from(e: csv::Error) -> Self {
        GitqlError::Output(e.to_string())
    }
}

impl From<serde_json::Error> for GitqlError {
    fn from(e: serde_json::Error) -> Self {
        GitqlError::Output(e.to_string())
    }
}
