//! Settings for the radial menu.
//!
//! Layers, lowest to highest: built-in defaults, the global file
//! (`<config dir>/radial/config.toml`), the project file
//! (`./.radial/config.toml`), then environment variables. An explicit path
//! (`--config` or `RADIAL_CONFIG`) replaces the global and project files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MenuError, Result};
use crate::menu::ConfigurationFormat;

/// Environment variable naming an explicit settings file.
pub const ENV_CONFIG: &str = "RADIAL_CONFIG";
pub const ENV_MENU_FILE: &str = "RADIAL_MENU_FILE";
pub const ENV_MENU_RADIUS: &str = "RADIAL_MENU_RADIUS";
pub const ENV_BUTTON_SIZE: &str = "RADIAL_BUTTON_SIZE";

const GLOBAL_DIR: &str = "radial";
const PROJECT_DIR: &str = ".radial";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Menu configuration file, relative to the project root unless absolute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_path: Option<PathBuf>,
    pub radial_menu: RadialMenuSettings,
}

/// Visual sizing passed to the host UI as style overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialMenuSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_size: Option<String>,
}

impl RadialMenuSettings {
    /// CSS custom properties for the configured sizes, unset ones omitted.
    #[must_use]
    pub fn style_overrides(&self) -> Vec<(&'static str, String)> {
        [
            ("--radial-menu-radius-config", &self.radius),
            ("--radial-button-diameter-config", &self.button_size),
        ]
        .into_iter()
        .filter_map(|(property, value)| value.clone().map(|value| (property, value)))
        .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsPatch {
    configuration_path: Option<PathBuf>,
    radial_menu: Option<RadialMenuPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RadialMenuPatch {
    radius: Option<String>,
    button_size: Option<String>,
}

impl Settings {
    /// Load layered settings for a project rooted at `project_root`.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        Self::load_with(explicit_path, project_root, |key| std::env::var(key).ok())
    }

    /// Like [`load`](Self::load), reading environment variables through `env`.
    pub fn load_with(
        explicit_path: Option<&Path>,
        project_root: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut settings = Self::default();

        let explicit = explicit_path
            .map(Path::to_path_buf)
            .or_else(|| non_empty(env(ENV_CONFIG)).map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = load_patch(&path)? {
                settings.merge_patch(patch);
            }
        } else {
            if let Some(patch) = load_global()? {
                settings.merge_patch(patch);
            }
            if let Some(patch) = load_patch(&project_root.join(PROJECT_DIR).join(CONFIG_FILE))? {
                settings.merge_patch(patch);
            }
        }

        settings.apply_env_overrides(&env);
        Ok(settings)
    }

    /// Format the configured menu file will be parsed as.
    #[must_use]
    pub fn configuration_format(&self) -> Option<ConfigurationFormat> {
        let path = self.configuration_path.as_ref()?;
        let name = path.file_name()?.to_string_lossy();
        Some(ConfigurationFormat::from_filename(&name))
    }

    /// The configured menu file resolved against `project_root`.
    #[must_use]
    pub fn resolve_configuration_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.configuration_path
            .as_ref()
            .map(|path| project_root.join(path))
    }

    fn merge_patch(&mut self, patch: SettingsPatch) {
        if let Some(path) = patch.configuration_path {
            self.configuration_path = Some(path);
        }
        if let Some(menu) = patch.radial_menu {
            if let Some(radius) = menu.radius {
                self.radial_menu.radius = Some(radius);
            }
            if let Some(button_size) = menu.button_size {
                self.radial_menu.button_size = Some(button_size);
            }
        }
    }

    fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(path) = non_empty(env(ENV_MENU_FILE)) {
            self.configuration_path = Some(PathBuf::from(path));
        }
        if let Some(radius) = non_empty(env(ENV_MENU_RADIUS)) {
            self.radial_menu.radius = Some(radius);
        }
        if let Some(size) = non_empty(env(ENV_BUTTON_SIZE)) {
            self.radial_menu.button_size = Some(size);
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn load_global() -> Result<Option<SettingsPatch>> {
    let Some(dir) = dirs::config_dir() else {
        debug!("no user config directory; skipping global settings");
        return Ok(None);
    };
    load_patch(&dir.join(GLOBAL_DIR).join(CONFIG_FILE))
}

fn load_patch(path: &Path) -> Result<Option<SettingsPatch>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)
        .map_err(|err| MenuError::Config(format!("read config {}: {err}", path.display())))?;
    let patch = toml::from_str(&raw)
        .map_err(|err| MenuError::Config(format!("parse config {}: {err}", path.display())))?;
    debug!(path = %path.display(), "loaded settings file");
    Ok(Some(patch))
}
