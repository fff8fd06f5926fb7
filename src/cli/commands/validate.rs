//! radial validate - Check a menu configuration

use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::parse::ParseWarning;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Menu file to check
    pub file: PathBuf,
}

#[derive(Serialize)]
struct ValidateOutput<'a> {
    valid: bool,
    format: &'static str,
    items: usize,
    actions: usize,
    depth: usize,
    block_found: bool,
    warnings: &'a [ParseWarning],
}

/// Structural errors propagate to the caller and fail the command.
pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<()> {
    let path = ctx.project_root.join(&args.file);
    let report = super::read_report(&path)?;
    let menu = &report.configuration.actions;

    if ctx.is_json() {
        return emit_json(&ValidateOutput {
            valid: true,
            format: report.configuration.format.as_str(),
            items: menu.len(),
            actions: menu.actions().len(),
            depth: menu.depth(),
            block_found: report.block_found,
            warnings: &report.warnings,
        });
    }

    for warning in &report.warnings {
        println!("{} {warning}", style("warning:").yellow().bold());
    }
    if !report.block_found {
        println!(
            "{} no configuration block found",
            style("warning:").yellow().bold()
        );
    }
    println!(
        "{} {}: {} actions, depth {}",
        style("ok").green().bold(),
        args.file.display(),
        menu.actions().len(),
        menu.depth()
    );
    Ok(())
}
