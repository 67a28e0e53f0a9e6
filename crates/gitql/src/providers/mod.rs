//! Table providers that copy repository data into SQLite.

mod commits;
mod refs;
mod tags;

pub use commits::CommitsProvider;
pub use refs::RefsProvider;
pub use tags::TagsProvider;

use crate::error::Result;
use crate::git::GitRepo;
use chrono::DateTime;
use rusqlite::Connection;

/// Fills one table with rows read from a repository.
///
/// The table has already been created from its schema when `populate` runs.
pub trait Provider {
    fn populate(&self, conn: &Connection, repo: &GitRepo) -> Result<()>;
}

/// Returns the provider for `table_name`, if one exists.
pub fn provider_for(table_name: &str) -> Option<Box<dyn Provider>> {
    match table_name {
        "commits" => Some(Box::new(CommitsProvider)),
        "refs" => Some(Box::new(RefsProvider)),
        "tags" => Some(Box::new(TagsProvider)),
        _ => None,
    }
}

/// Format a git timestamp as a UTC ISO 8601 string.
fn format_git_time(time: git2::Time) -> String {
    DateTime::from_timestamp(time.seconds(), 0)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_default()
}
