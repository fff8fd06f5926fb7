//! Configuration parsing from YAML or Markdown into a menu tree.
//!
//! Every call builds a fresh tree from scratch and holds no state between
//! calls. A structural error anywhere aborts the parse.

pub mod classify;
pub mod markdown;
pub mod normalize;
pub mod value;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::Result;
use crate::menu::{ActionGroup, ConfigurationFormat, RadialMenuConfiguration};

pub use classify::{ParseWarning, TreeBuilder, split_string_action};
pub use markdown::{YamlBlock, extract_yaml, find_yaml_block};
pub use normalize::normalize_aliases;
pub use value::{RawMap, RawValue};

/// A parsed configuration together with the non-fatal warnings raised while
/// building it.
#[derive(Debug, Clone)]
pub struct ParseReport {
    pub configuration: RadialMenuConfiguration,
    pub warnings: Vec<ParseWarning>,
    /// `false` when a Markdown document held no complete configuration block.
    pub block_found: bool,
}

/// Parse `contents` according to `filename`'s extension.
pub fn parse_configuration(filename: &str, contents: &str) -> Result<RadialMenuConfiguration> {
    parse_report(filename, contents).map(|report| report.configuration)
}

/// Like [`parse_configuration`], keeping warnings.
pub fn parse_report(filename: &str, contents: &str) -> Result<ParseReport> {
    parse_report_at(filename, contents, Utc::now())
}

/// Like [`parse_report`] with an explicit build timestamp.
pub fn parse_report_at(
    filename: &str,
    contents: &str,
    updated_at: DateTime<Utc>,
) -> Result<ParseReport> {
    let format = ConfigurationFormat::from_filename(filename);
    debug!(filename, %format, "parsing menu configuration");

    let mut builder = TreeBuilder::new();
    let (actions, block_found) = match format {
        ConfigurationFormat::Yaml => (build_yaml(contents, &mut builder)?, true),
        ConfigurationFormat::Markdown => match extract_yaml(contents) {
            Some(body) => (build_yaml(body, &mut builder)?, true),
            None => {
                info!(filename, "no configuration block found; using an empty menu");
                (ActionGroup::root(), false)
            }
        },
    };

    Ok(ParseReport {
        configuration: RadialMenuConfiguration::new(actions, format, updated_at),
        warnings: builder.into_warnings(),
        block_found,
    })
}

/// Parse a standalone YAML document into its root group.
pub fn parse_yaml(contents: &str) -> Result<ActionGroup> {
    build_yaml(contents, &mut TreeBuilder::new())
}

/// Parse the first configuration block of a Markdown document.
///
/// `Ok(None)` means the document holds no complete block.
pub fn parse_markdown(contents: &str) -> Result<Option<ActionGroup>> {
    extract_yaml(contents).map(parse_yaml).transpose()
}

fn build_yaml(text: &str, builder: &mut TreeBuilder) -> Result<ActionGroup> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
    let raw = RawValue::from_yaml(yaml, "")?;
    builder.build_document(raw)
}
