//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::path::Path;

use tracing::debug;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;
use crate::parse::{ParseReport, parse_report};
use crate::store::{ConfigSource, FsSource, filename_of};

pub mod extract;
pub mod parse;
pub mod show;
pub mod validate;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Parse(args) => parse::run(ctx, args),
        Commands::Validate(args) => validate::run(ctx, args),
        Commands::Extract(args) => extract::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
    }
}

/// Read and parse the menu file at `path`, keeping warnings.
fn read_report(path: &Path) -> Result<ParseReport> {
    let source = FsSource.read(path)?;
    debug!(path = %path.display(), bytes = source.contents.len(), "read menu file");
    parse_report(&filename_of(path), &source.contents)
}
