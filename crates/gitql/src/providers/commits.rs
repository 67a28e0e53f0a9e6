use super::{format_git_time, Provider};
use crate::error::Result;
use crate::git::GitRepo;
use rusqlite::{params, Connection};

pub struct CommitsProvider;

impl Provider for CommitsProvider {
    fn populate(&self, conn: &Connection, repo: &GitRepo) -> Result<()> {
        let mut stmt = conn.prepare(
            "INSERT OR IGNORE INTO commits VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        )?;

        let mut count = 0usize;
        for commit in repo.walk_commits()? {
            let commit = commit?;
            let hash = commit.id().to_string();
            let short_hash = &hash[..7.min(hash.len())];
            let author = commit.author();
            let committer = commit.committer();

            stmt.execute(params![
                hash,
                short_hash,
                author.name(),
                author.email(),
                format_git_time(author.when()),
                committer.name(),
                committer.email(),
                format_git_time(committer.when()),
                commit.summary(),
                commit.message(),
                commit.parent_count() as i64,
                commit.tree_id().to_string(),
            ])?;
            count += 1;
        }

        tracing::debug!("loaded {} commits", count);
        Ok(())
    }
}
