//! Stock menu shipped when no configuration file is set.

use chrono::Utc;

use super::types::{Action, ActionGroup, ConfigurationFormat, MenuItem, RadialMenuConfiguration};

const TOP_LEVEL: &[&str] = &[
    "command-palette:open",
    "editor:focus",
    "global-search:open",
    "editor:context-menu",
    "switcher:open",
    "app:go-back",
    "app:go-forward",
    "spacekeys:repeat-last",
];

const WORKSPACE: &[&str] = &[
    "editor:focus",
    "workspace:close",
    "file-explorer:open",
    "editor:focus-left",
    "editor:focus-right",
    "editor:focus-top",
    "editor:focus-bottom",
    "workspace:next-tab",
    "workspace:new-tab",
    "outline:open",
    "workspace:previous-tab",
    "workspace:toggle-pin",
    "workspace:split-horizontal",
    "workspace:toggle-stacked-tabs",
    "tag-pane:open",
    "workspace:undo-close-pane",
    "workspace:split-vertical",
    "app:toggle-left-sidebar",
    "app:toggle-right-sidebar",
    "app:toggle-ribbon",
    "workspace:open-in-new-window",
    "workspace:move-to-new-window",
];

const CLOSE: &[&str] = &[
    "workspace:close-tab-group",
    "workspace:close-others-tab-group",
];

fn actions(ids: &[&str]) -> impl Iterator<Item = MenuItem> {
    ids.iter().map(|id| MenuItem::Action(Action::new(*id)))
}

impl RadialMenuConfiguration {
    /// The default menu: common commands plus `Workspace` and `Close` submenus.
    #[must_use]
    pub fn builtin() -> Self {
        let root = ActionGroup::root().with_items(
            actions(TOP_LEVEL)
                .chain([
                    ActionGroup::new("Workspace")
                        .with_items(actions(WORKSPACE))
                        .into(),
                    ActionGroup::new("Close").with_items(actions(CLOSE)).into(),
                ]),
        );
        Self::new(root, ConfigurationFormat::Yaml, Utc::now())
    }
}
