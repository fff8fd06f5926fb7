//! Fenced YAML block extraction from Markdown documents.
//!
//! The scan walks fence marker lines (three backticks plus an optional info
//! string) in document order. A block opened with a foreign language tag is
//! skipped whole: the next marker is taken as its closer, whatever it says.
//! The first closed block tagged `yaml` or `yml`, or left untagged, wins.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static FENCE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^```(.*)$").expect("fence marker pattern is valid"));

/// Info strings (trimmed, lower-cased) that mark a configuration block.
pub const ACCEPTED_TAGS: &[&str] = &["yaml", "yml", ""];

/// A located configuration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlBlock<'a> {
    /// Text strictly between the opening marker line and the closing marker.
    pub body: &'a str,
    /// Byte range of `body` within the document.
    pub span: Range<usize>,
    /// The opening marker's info string, as written.
    pub tag: &'a str,
}

enum Scan<'a> {
    Searching,
    Skipping,
    Open { body_start: usize, tag: &'a str },
}

fn is_accepted(tag: &str) -> bool {
    let tag = tag.trim().to_lowercase();
    ACCEPTED_TAGS.contains(&tag.as_str())
}

/// Locate the first complete configuration block.
///
/// Returns `None` when no accepted block is opened, or when the accepted
/// block is never closed.
#[must_use]
pub fn find_yaml_block(contents: &str) -> Option<YamlBlock<'_>> {
    let mut state = Scan::Searching;

    for marker in FENCE_MARKER.captures_iter(contents) {
        let (Some(line), Some(tag)) = (marker.get(0), marker.get(1)) else {
            continue;
        };

        state = match state {
            Scan::Skipping => Scan::Searching,
            Scan::Searching if is_accepted(tag.as_str()) => Scan::Open {
                body_start: line.end(),
                tag: tag.as_str(),
            },
            Scan::Searching => {
                debug!(tag = tag.as_str().trim(), offset = line.start(), "skipping foreign code block");
                Scan::Skipping
            }
            Scan::Open { body_start, tag } => {
                let span = body_start..line.start();
                debug!(start = span.start, end = span.end, "found configuration block");
                return Some(YamlBlock {
                    body: &contents[span.clone()],
                    span,
                    tag,
                });
            }
        };
    }

    if matches!(state, Scan::Open { .. }) {
        debug!("configuration block is never closed");
    }
    None
}

/// Raw YAML text of the first complete configuration block.
#[must_use]
pub fn extract_yaml(contents: &str) -> Option<&str> {
    find_yaml_block(contents).map(|block| block.body)
}
