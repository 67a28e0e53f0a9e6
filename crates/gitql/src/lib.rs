//! # gitql
//!
//! Query a local Git repository using SQL.
//!
//! A query runs through four steps: find the `.git` marker by walking up from
//! a starting directory, open the repository and check it has history, bind it
//! to a database named after its working directory, then hand the SQL to the
//! engine.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gitql::{dispatch, find_dot_git, open_repository, Database, Result};
//!
//! fn main() -> Result<()> {
//!     let marker = find_dot_git("")?;
//!     let (repo, head) = open_repository(&marker)?;
//!     println!("HEAD is {}", head);
//!
//!     let db = Database::bind(&marker, repo);
//!     let result = dispatch(&db, "SELECT short_hash, summary FROM commits LIMIT 5")?;
//!     println!("{} rows from {}", result.row_count(), db.name());
//!     Ok(())
//! }
//! ```
//!
//! ## Available Tables
//!
//! - `commits`: history reachable from HEAD
//! - `refs`: branches, remotes, tags and notes
//! - `tags`: lightweight and annotated tags
//!
//! See [`TABLES`] for column details.

pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod git;
pub mod providers;
pub mod sql;

pub use cli::{Args, Command, OutputFormat};
pub use config::QueryConfig;
pub use database::Database;
pub use error::{GitqlError, Result};
pub use git::{find_dot_git, open_repository, GitRepo};
pub use sql::{dispatch, QueryResult, SqlEngine, TableInfo, TABLES};
