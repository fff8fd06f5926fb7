//! radial show - Show the configured menu

use std::collections::BTreeMap;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;
use crate::menu::RadialMenuConfiguration;
use crate::store::ConfigurationStore;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Ignore the configured menu file and show the built-in default
    #[arg(long)]
    pub builtin: bool,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    source: String,
    configuration: &'a RadialMenuConfiguration,
    style_overrides: BTreeMap<&'static str, String>,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let store = ConfigurationStore::new();
    let path = if args.builtin { None } else { ctx.menu_path(None) };

    let (source, configuration) = match &path {
        Some(path) => (path.display().to_string(), store.load(path)?),
        None => (
            "builtin".to_string(),
            store.publish(RadialMenuConfiguration::builtin()),
        ),
    };
    let overrides = ctx.settings.radial_menu.style_overrides();

    if ctx.is_json() {
        return emit_json(&ShowOutput {
            source,
            configuration: &configuration,
            style_overrides: overrides.into_iter().collect(),
        });
    }

    show_human(&source, &configuration, &overrides);
    Ok(())
}

fn show_human(
    source: &str,
    configuration: &Arc<RadialMenuConfiguration>,
    overrides: &[(&'static str, String)],
) {
    let mut layout = HumanLayout::new();
    layout
        .title("Radial Menu")
        .kv("source", source)
        .kv("format", configuration.format.as_str());
    for (property, value) in overrides {
        layout.kv(property, value);
    }
    layout.blank().tree(&configuration.actions);
    emit_human(layout);
}
