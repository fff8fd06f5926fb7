//! Shared state for CLI commands.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::config::Settings;
use crate::error::Result;

pub struct AppContext {
    /// Directory relative menu paths resolve against.
    pub project_root: PathBuf,
    pub settings: Settings,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let settings = Settings::load(cli.config.as_deref(), &project_root)?;
        debug!(
            project_root = %project_root.display(),
            configuration_path = ?settings.configuration_path,
            "loaded settings"
        );

        Ok(Self {
            project_root,
            settings,
            output_format: cli.output_format(),
        })
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.output_format, OutputFormat::Json)
    }

    /// The menu file to use: `explicit` if given, else the configured one.
    #[must_use]
    pub fn menu_path(&self, explicit: Option<&std::path::Path>) -> Option<PathBuf> {
        explicit
            .map(|path| self.project_root.join(path))
            .or_else(|| self.settings.resolve_configuration_path(&self.project_root))
    }
}
