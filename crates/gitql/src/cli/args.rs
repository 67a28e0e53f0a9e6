use super::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const AFTER_HELP: &str = r#"TABLES
  commits   Commits reachable from HEAD
  refs      Branches, remotes, tags and notes
  tags      Lightweight and annotated tags

EXAMPLES
  gitql query "SELECT short_hash, summary FROM commits LIMIT 10"
  gitql query -p ~/src/project "SELECT author_name, COUNT(*) n FROM commits GROUP BY 1 ORDER BY n DESC"
  gitql query -f json "SELECT name, target FROM refs WHERE kind = 'branch'"
  gitql tables"#;

/// Command-line arguments for `gitql`.
#[derive(Parser, Debug)]
#[command(name = "gitql")]
#[command(version)]
#[command(about = "Run SQL queries against a local Git repository")]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Do not print progress lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a SQL query against the repository
    #[command(visible_alias = "q")]
    Query {
        /// Path where the git repository is located (default: search upwards from the current directory)
        #[arg(short, long, env = "GITQL_PATH")]
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Omit the header row (table and csv)
        #[arg(short = 'H', long)]
        no_header: bool,

        /// SQL query to execute
        #[arg(value_name = "SQL")]
        sql: String,
    },

    /// Show available tables and their columns
    Tables,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let args = Args::try_parse_from(["gitql", "query", "-p", "/tmp/repo", "SELECT 1"]).unwrap();
        match args.command {
            Command::Query { path, sql, format, no_header } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/repo")));
                assert_eq!(sql, "SELECT 1");
                assert_eq!(format, OutputFormat::Table);
                assert!(!no_header);
            }
            Command::Tables => panic!("expected query"),
        }
    }

    #[test]
    fn test_sql_is_required() {
        assert!(Args::try_parse_from(["gitql", "query"]).is_err());
    }

    #[test]
    fn test_long_path_flag() {
        let args = Args::try_parse_from(["gitql", "query", "--path", "x", "SELECT 1"]).unwrap();
        assert!(matches!(args.command, Command::Query { path: Some(_), .. }));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
