//! SQL query engine for Git repositories.

use crate::error::{GitqlError, Result};
use crate::git::GitRepo;
use crate::providers::provider_for;
use crate::sql::schema::{get_table_info, TABLES};
use regex::Regex;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// The SQL query engine that executes queries against Git repository data.
///
/// `SqlEngine` uses an in-memory SQLite database to store Git data and execute
/// SQL queries. Tables are lazily loaded based on query requirements.
///
/// # Example
///
/// ```no_run
/// use gitql::{GitRepo, SqlEngine};
///
/// let repo = GitRepo::open(".git")?;
/// let mut engine = SqlEngine::new()?;
///
/// // Load only tables referenced in the query
/// engine.load_tables_for_query("SELECT * FROM commits LIMIT 10", &repo)?;
///
/// let result = engine.execute("SELECT * FROM commits LIMIT 10")?;
/// println!("Columns: {:?}", result.columns);
/// # Ok::<(), gitql::GitqlError>(())
/// ```
pub struct SqlEngine {
    conn: Connection,
    loaded_tables: HashSet<String>,
}

impl SqlEngine {
    /// Creates a new SQL engine with an empty in-memory database.
    pub fn new() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn,
            loaded_tables: HashSet::new(),
        })
    }

    /// Extracts the known table names referenced in a SQL query.
    ///
    /// Looks at FROM and JOIN clauses first, then at any standalone occurrence
    /// of a table name so subqueries and aliases are covered too.
    pub fn extract_table_names(query: &str) -> Result<HashSet<String>> {
        let mut tables = HashSet::new();
        let table_names: Vec<&str> = TABLES.iter().map(|t| t.name).collect();

        let clause = Regex::new(r"(?i)\b(FROM|JOIN)\s+(\w+)")?;
        for cap in clause.captures_iter(query) {
            if let Some(table_match) = cap.get(2) {
                let table_name = table_match.as_str().to_lowercase();
                if table_names.contains(&table_name.as_str()) {
                    tables.insert(table_name);
                }
            }
        }

        for table in &table_names {
            let word = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(table)))?;
            if word.is_match(query) {
                tables.insert(table.to_string());
            }
        }

        Ok(tables)
    }

    /// Loads a single table's data from the repository into the database.
    ///
    /// Tables are cached after first load; later calls for the same table are no-ops.
    pub fn load_table(&mut self, table_name: &str, repo: &GitRepo) -> Result<()> {
        if self.loaded_tables.contains(table_name) {
            return Ok(());
        }

        let table_info = get_table_info(table_name)
            .ok_or_else(|| GitqlError::TableNotFound(table_name.to_string()))?;
        let provider = provider_for(table_name)
            .ok_or_else(|| GitqlError::TableNotFound(table_name.to_string()))?;

        tracing::debug!("loading table {}", table_name);
        self.conn.execute(table_info.create_sql, [])?;
        provider.populate(&self.conn, repo)?;
        self.loaded_tables.insert(table_name.to_string());

        Ok(())
    }

    /// Loads all tables referenced in a query from the repository.
    pub fn load_tables_for_query(&mut self, query: &str, repo: &GitRepo) -> Result<()> {
        for table in Self::extract_table_names(query)? {
            self.load_table(&table, repo)?;
        }
        Ok(())
    }

    /// Executes a SQL query and returns the results.
    ///
    /// Anything SQLite accepts works here, including JOINs, CTEs, window
    /// functions and aggregations.
    pub fn execute(&self, query: &str) -> Result<QueryResult> {
        let mut stmt = self.conn.prepare(query)?;

        let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
        let col_count = columns.len();

        let rows = stmt
            .query_map([], |row| row_to_values(row, col_count))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(QueryResult { columns, rows })
    }
}

fn row_to_values(row: &Row, col_count: usize) -> rusqlite::Result<Vec<Value>> {
    (0..col_count)
        .map(|i| {
            let value = match row.get_ref(i)? {
                ValueRef::Null => Value::Null,
                ValueRef::Integer(n) => Value::Number(n.into()),
                ValueRef::Real(f) => serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(f.to_string())),
                ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
                ValueRef::Blob(bytes) => {
                    Value::String(bytes.iter().map(|b| format!("{:02x}", b)).collect())
                }
            };
            Ok(value)
        })
        .collect()
}

/// The result of a SQL query execution.
#[derive(Debug)]
pub struct QueryResult {
    /// Column names from the query.
    pub columns: Vec<String>,
    /// Row data as JSON values.
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Converts the result to a JSON array of objects keyed by column name.
    pub fn to_json_array(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for (i, col) in self.columns.iter().enumerate() {
                    obj.insert(col.clone(), row.get(i).cloned().unwrap_or(Value::Null));
                }
                Value::Object(obj)
            })
            .collect()
    }
}
