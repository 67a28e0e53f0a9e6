use super::{OutputFormat, OutputWriter};
use crate::config::QueryConfig;
use crate::database::Database;
use crate::error::Result;
use crate::git::{find_dot_git, open_repository};
use crate::sql::{dispatch, TABLES};
use std::io::Write;

/// Locates, opens and binds the repository, then runs `sql` against it.
///
/// Results go to `out`; progress lines go to `progress` unless the config is
/// quiet. Nothing is written to `out` if any step fails. Progress is
/// best-effort: a failed write to `progress` does not fail the query.
pub fn query<W: Write, P: Write>(
    config: &QueryConfig,
    sql: &str,
    out: W,
    mut progress: P,
) -> Result<()> {
    let marker = find_dot_git(&config.path)?;

    if !config.quiet {
        let _ = writeln!(progress, "opening {:?} repository...", marker.display().to_string());
    }
    let (repo, head) = open_repository(&marker)?;
    if !config.quiet {
        let _ = writeln!(progress, "current HEAD {:?}", head.to_string());
    }

    let db = Database::bind(&marker, repo);
    if !config.quiet {
        let _ = writeln!(progress, "executing {:?} at {:?}", sql, db.name());
    }

    let result = dispatch(&db, sql)?;
    OutputWriter::new(out, config.format).write_result(&result, config.show_header)
}

pub fn tables<W: Write>(out: W) -> Result<()> {
    OutputWriter::new(out, OutputFormat::Table).write_tables(TABLES)
}
