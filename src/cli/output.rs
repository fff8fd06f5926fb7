use clap::ValueEnum;
use console::style;
use serde::Serialize;

use crate::error::{MenuError, Result, StructuredError};
use crate::menu::{ActionGroup, MenuItem};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

/// Print `err` in the requested format. JSON goes to stdout.
pub fn emit_error(err: &MenuError, format: OutputFormat) {
    let structured = StructuredError::from_menu_error(err);
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&structured).unwrap_or_default()
            );
        }
        OutputFormat::Human => {
            eprintln!("{} {err}", style("Error:").red().bold());
            eprintln!("{} {}", style("hint:").dim(), structured.suggestion);
        }
    }
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
    color: bool,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::with_color(console::colors_enabled())
    }

    #[must_use]
    pub const fn with_color(color: bool) -> Self {
        Self {
            lines: Vec::new(),
            key_width: 12,
            color,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines
            .push(style(text).bold().force_styling(self.color).to_string());
        self.lines.push(String::new());
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let key = format!("{key:width$}", width = self.key_width);
        let key_style = style(key).dim().force_styling(self.color);
        self.lines.push(format!("{key_style} {value}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Append the indented rendering of `group`.
    pub fn tree(&mut self, group: &ActionGroup) -> &mut Self {
        let root = style(&group.name).bold().force_styling(self.color);
        self.lines.push(format!("{root} ({})", count(group.len())));
        self.group_items(group, 1);
        self
    }

    fn group_items(&mut self, group: &ActionGroup, depth: usize) {
        for item in &group.items {
            let indent = "  ".repeat(depth);
            let key = item.keycode().map_or_else(String::new, |keycode| {
                format!("{} ", style(format!("[{keycode}]")).cyan().force_styling(self.color))
            });
            match item {
                MenuItem::Action(action) => {
                    let line = if action.name.is_some() {
                        let id = style(format!("({})", action.id)).dim().force_styling(self.color);
                        format!("{indent}{key}{} {id}", action.label())
                    } else {
                        format!("{indent}{key}{}", action.id)
                    };
                    self.lines.push(line);
                }
                MenuItem::Group(child) => {
                    let name = style(format!("{}/", child.name)).bold().force_styling(self.color);
                    self.lines.push(format!("{indent}{key}{name}"));
                    self.group_items(child, depth + 1);
                }
            }
        }
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

fn count(items: usize) -> String {
    if items == 1 {
        "1 item".to_string()
    } else {
        format!("{items} items")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}

/// Plain indented tree of `group`, without styling.
#[must_use]
pub fn render_tree(group: &ActionGroup) -> String {
    let mut layout = HumanLayout::with_color(false);
    layout.tree(group);
    layout.build()
}
