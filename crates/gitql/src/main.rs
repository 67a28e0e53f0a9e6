//! gitql CLI - run SQL queries against a local Git repository
//!
//! Exits 0 on success, 2 when the query itself fails, 1 for any other error.

use clap::Parser;
use gitql::cli::commands;
use gitql::{Args, Command, GitqlError, QueryConfig};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("gitql=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<GitqlError>()
                .map_or(1, GitqlError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Query {
            path,
            format,
            no_header,
            sql,
        } => {
            let config = QueryConfig::new(path)
                .with_format(format)
                .with_header(!no_header)
                .quiet(args.quiet);
            commands::query(&config, &sql, io::stdout().lock(), io::stderr().lock())?;
        }
        Command::Tables => {
            commands::tables(io::stdout().lock())?;
        }
    }

    Ok(())
}
