use super::Provider;
use crate::error::Result;
use crate::git::GitRepo;
use git2::Reference;
use rusqlite::{params, Connection};

pub struct RefsProvider;

impl Provider for RefsProvider {
    fn populate(&self, conn: &Connection, repo: &GitRepo) -> Result<()> {
        let head_name = repo.head_name();
        let mut stmt = conn.prepare("INSERT OR IGNORE INTO refs VALUES (?1, ?2, ?3, ?4, ?5, ?6)")?;

        for reference in repo.references()? {
            let reference = reference?;
            // Names that are not valid UTF-8 cannot be represented as TEXT keys
            let Some(name) = reference.name() else {
                continue;
            };

            let is_head = head_name.as_deref() == Some(name);
            let is_symbolic = reference.kind() == Some(git2::ReferenceType::Symbolic);

            stmt.execute(params![
                name,
                reference.shorthand(),
                reference_kind(&reference),
                resolved_target(&reference),
                is_head as i64,
                is_symbolic as i64,
            ])?;
        }

        Ok(())
    }
}

fn reference_kind(reference: &Reference<'_>) -> &'static str {
    if reference.is_branch() {
        "branch"
    } else if reference.is_remote() {
        "remote"
    } else if reference.is_tag() {
        "tag"
    } else if reference.is_note() {
        "note"
    } else {
        "other"
    }
}

fn resolved_target(reference: &Reference<'_>) -> Option<String> {
    match reference.target() {
        Some(oid) => Some(oid.to_string()),
        None => reference
            .resolve()
            .ok()
            .and_then(|r| r.target())
            .map(|oid| oid.to_string()),
    }
}
