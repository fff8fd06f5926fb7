//! Radial menu configuration parsing.
//!
//! Turns YAML documents, or YAML blocks fenced inside Markdown, into a
//! validated tree of [`menu::Action`] and [`menu::ActionGroup`] nodes.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod parse;
pub mod store;

pub use error::{MenuError, Result};
pub use menu::{Action, ActionGroup, ConfigurationFormat, MenuItem, RadialMenuConfiguration};
pub use parse::{parse_configuration, parse_report};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
