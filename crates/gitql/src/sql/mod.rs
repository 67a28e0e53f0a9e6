//! SQL execution over repository data.

mod engine;
mod schema;

pub use engine::{QueryResult, SqlEngine};
pub use schema::{get_table_info, ColumnInfo, TableInfo, TABLES};

use crate::database::Database;
use crate::error::Result;

/// Runs `query` against the repository bound to `db`.
///
/// Only the tables the query mentions are loaded from the repository.
pub fn dispatch(db: &Database, query: &str) -> Result<QueryResult> {
    tracing::info!("executing {:?} at {:?}", query, db.name());

    let mut engine = SqlEngine::new()?;
    engine.load_tables_for_query(query, db.repo())?;
    engine.execute(query)
}
