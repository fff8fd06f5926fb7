//! radial parse - Parse a menu configuration and print its tree

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;
use crate::menu::RadialMenuConfiguration;
use crate::parse::ParseWarning;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Menu file (.yaml/.yml parsed directly, anything else as Markdown)
    pub file: PathBuf,
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    path: &'a Path,
    block_found: bool,
    configuration: &'a RadialMenuConfiguration,
    warnings: &'a [ParseWarning],
}

pub fn run(ctx: &AppContext, args: &ParseArgs) -> Result<()> {
    let path = ctx.project_root.join(&args.file);
    let report = super::read_report(&path)?;

    if ctx.is_json() {
        return emit_json(&ParseOutput {
            path: &args.file,
            block_found: report.block_found,
            configuration: &report.configuration,
            warnings: &report.warnings,
        });
    }

    let mut layout = HumanLayout::new();
    if !report.block_found {
        layout.push_line("No configuration block found; the menu is empty.");
        layout.blank();
    }
    layout.tree(&report.configuration.actions);
    emit_human(layout);
    Ok(())
}
