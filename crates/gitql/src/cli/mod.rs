//! Command-line surface: arguments, commands and output rendering.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command};
pub use output::{OutputFormat, OutputWriter};
