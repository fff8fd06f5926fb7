//! radial extract - Print the configuration block of a Markdown file

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::parse::find_yaml_block;
use crate::store::{ConfigSource, FsSource};

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Markdown file to scan
    pub file: PathBuf,
}

#[derive(Serialize)]
struct ExtractOutput<'a> {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
}

pub fn run(ctx: &AppContext, args: &ExtractArgs) -> Result<()> {
    let path = ctx.project_root.join(&args.file);
    let source = FsSource.read(&path)?;
    let block = find_yaml_block(&source.contents);

    if ctx.is_json() {
        let output = block.as_ref().map_or(
            ExtractOutput {
                found: false,
                tag: None,
                start: None,
                end: None,
                body: None,
            },
            |block| ExtractOutput {
                found: true,
                tag: Some(block.tag.trim()),
                start: Some(block.span.start),
                end: Some(block.span.end),
                body: Some(block.body),
            },
        );
        return emit_json(&output);
    }

    match block {
        Some(block) => print!("{}", block.body.trim_start_matches(['\r', '\n'])),
        None => {
            info!(path = %path.display(), "no configuration block found");
            eprintln!("No configuration block found in {}", args.file.display());
        }
    }
    Ok(())
}
