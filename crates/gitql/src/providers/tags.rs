use super::Provider;
use crate::error::Result;
use crate::git::GitRepo;
use rusqlite::{params, Connection};

pub struct TagsProvider;

impl Provider for TagsProvider {
    fn populate(&self, conn: &Connection, repo: &GitRepo) -> Result<()> {
        let mut stmt = conn.prepare("INSERT OR IGNORE INTO tags VALUES (?1, ?2, ?3, ?4, ?5, ?6)")?;

        for reference in repo.tag_references()? {
            let reference = reference?;
            let Some(name) = reference.shorthand() else {
                continue;
            };

            let direct = reference.resolve()?;
            let Some(oid) = direct.target() else {
                continue;
            };

            // Unreadable objects must fail the load, not pass as lightweight tags
            let object = repo.inner().find_object(oid, None)?;
            match object.into_tag() {
                Ok(tag) => {
                    let tagger = tag.tagger();
                    stmt.execute(params![
                        name,
                        tag.target_id().to_string(),
                        1i64,
                        tagger.as_ref().and_then(|t| t.name()),
                        tagger.as_ref().and_then(|t| t.email()),
                        tag.message(),
                    ])?;
                }
                Err(object) => {
                    stmt.execute(params![
                        name,
                        object.id().to_string(),
                        0i64,
                        Option::<&str>::None,
                        Option::<&str>::None,
                        Option::<&str>::None,
                    ])?;
                }
            }
        }

        Ok(())
    }
}
