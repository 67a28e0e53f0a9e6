//! Table definitions for repository data.

/// Schema information for a queryable table.
#[derive(Debug, Clone, Copy)]
pub struct TableInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub create_sql: &'static str,
    pub columns: &'static [ColumnInfo],
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub description: &'static str,
}

const fn col(name: &'static str, sql_type: &'static str, description: &'static str) -> ColumnInfo {
    ColumnInfo {
        name,
        sql_type,
        description,
    }
}

/// All tables that can be referenced in a query.
pub static TABLES: &[TableInfo] = &[
    TableInfo {
        name: "commits",
        description: "Commits reachable from HEAD",
        create_sql: "CREATE TABLE commits (
            hash TEXT PRIMARY KEY,
            short_hash TEXT NOT NULL,
            author_name TEXT,
            author_email TEXT,
            author_when TEXT,
            committer_name TEXT,
            committer_email TEXT,
            committer_when TEXT,
            summary TEXT,
            message TEXT,
            parent_count INTEGER NOT NULL,
            tree_hash TEXT NOT NULL
        )",
        columns: &[
            col("hash", "TEXT", "Full commit id"),
            col("short_hash", "TEXT", "First 7 characters of the commit id"),
            col("author_name", "TEXT", "Author name"),
            col("author_email", "TEXT", "Author email"),
            col("author_when", "TEXT", "Author time (UTC, RFC 3339)"),
            col("committer_name", "TEXT", "Committer name"),
            col("committer_email", "TEXT", "Committer email"),
            col("committer_when", "TEXT", "Commit time (UTC, RFC 3339)"),
            col("summary", "TEXT", "First line of the message"),
            col("message", "TEXT", "Full commit message"),
            col("parent_count", "INTEGER", "Number of parents (>1 for merges)"),
            col("tree_hash", "TEXT", "Root tree id"),
        ],
    },
    TableInfo {
        name: "refs",
        description: "All references (branches, remotes, tags, notes)",
        create_sql: "CREATE TABLE refs (
            name TEXT PRIMARY KEY,
            shorthand TEXT,
            kind TEXT NOT NULL,
            target TEXT,
            is_head INTEGER NOT NULL,
            is_symbolic INTEGER NOT NULL
        )",
        columns: &[
            col("name", "TEXT", "Full reference name, e.g. refs/heads/main"),
            col("shorthand", "TEXT", "Short name, e.g. main"),
            col("kind", "TEXT", "'branch' | 'remote' | 'tag' | 'note' | 'other'"),
            col("target", "TEXT", "Object id the reference resolves to"),
            col("is_head", "INTEGER", "1 if HEAD points at this reference"),
            col("is_symbolic", "INTEGER", "1 for symbolic references"),
        ],
    },
    TableInfo {
        name: "tags",
        description: "Lightweight and annotated tags",
        create_sql: "CREATE TABLE tags (
            name TEXT PRIMARY KEY,
            target TEXT,
            is_annotated INTEGER NOT NULL,
            tagger_name TEXT,
            tagger_email TEXT,
            message TEXT
        )",
        columns: &[
            col("name", "TEXT", "Tag name without refs/tags/"),
            col("target", "TEXT", "Id of the tagged object"),
            col("is_annotated", "INTEGER", "1 for annotated tags"),
            col("tagger_name", "TEXT", "Tagger name (annotated only)"),
            col("tagger_email", "TEXT", "Tagger email (annotated only)"),
            col("message", "TEXT", "Tag message (annotated only)"),
        ],
    },
];

pub fn get_table_info(name: &str) -> Option<&'static TableInfo> {
    TABLES.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sql_matches_columns() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        for table in TABLES {
            conn.execute(table.create_sql, []).unwrap();
            let stmt = conn
                .prepare(&format!("SELECT * FROM {}", table.name))
                .unwrap();
            let names: Vec<&str> = stmt.column_names();
            let expected: Vec<&str> = table.columns.iter().map(|c| c.name).collect();
            assert_eq!(names, expected, "columns of {}", table.name);
        }
    }

    #[test]
    fn test_get_table_info() {
        assert!(get_table_info("commits").is_some());
        assert!(get_table_info("nope").is_none());
    }
}
