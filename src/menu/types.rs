//! Menu tree types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name given to the root group when the document does not set one.
pub const ROOT_GROUP_NAME: &str = "Radial Menu";

/// A leaf menu entry bound to a command id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Action {
    /// Opaque command id, conventionally `namespace:action-name`.
    pub id: String,

    /// Display override. Renderers fall back to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Key sequence selecting this entry from its parent group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keycode: Option<String>,
}

impl Action {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_keycode(mut self, keycode: impl Into<String>) -> Self {
        self.keycode = Some(keycode.into());
        self
    }

    /// Name shown to the user: the override if present, otherwise the id.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A named, ordered collection of menu items forming a submenu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionGroup {
    pub name: String,

    /// Children in render order.
    pub items: Vec<MenuItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keycode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for ActionGroup {
    fn default() -> Self {
        Self::root()
    }
}

impl ActionGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            keycode: None,
            icon: None,
            color: None,
        }
    }

    /// An empty root group carrying the default root name.
    #[must_use]
    pub fn root() -> Self {
        Self::new(ROOT_GROUP_NAME)
    }

    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_keycode(mut self, keycode: impl Into<String>) -> Self {
        self.keycode = Some(keycode.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Direct child selected by `keycode`, if any.
    #[must_use]
    pub fn find_by_keycode(&self, keycode: &str) -> Option<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.keycode() == Some(keycode))
    }

    /// All actions in the tree, depth-first in document order.
    #[must_use]
    pub fn actions(&self) -> Vec<&Action> {
        let mut out = Vec::new();
        collect_actions(self, &mut out);
        out
    }

    /// Number of group levels below this one (0 for a flat group).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.items
            .iter()
            .filter_map(MenuItem::as_group)
            .map(|group| group.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

fn collect_actions<'a>(group: &'a ActionGroup, out: &mut Vec<&'a Action>) {
    for item in &group.items {
        match item {
            MenuItem::Action(action) => out.push(action),
            MenuItem::Group(group) => collect_actions(group, out),
        }
    }
}

/// A node of the menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuItem {
    Action(Action),
    Group(ActionGroup),
}

impl MenuItem {
    #[must_use]
    pub fn keycode(&self) -> Option<&str> {
        match self {
            Self::Action(action) => action.keycode.as_deref(),
            Self::Group(group) => group.keycode.as_deref(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Action(action) => action.label(),
            Self::Group(group) => &group.name,
        }
    }

    #[must_use]
    pub const fn as_action(&self) -> Option<&Action> {
        match self {
            Self::Action(action) => Some(action),
            Self::Group(_) => None,
        }
    }

    #[must_use]
    pub const fn as_group(&self) -> Option<&ActionGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::Action(_) => None,
        }
    }
}

impl From<Action> for MenuItem {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<ActionGroup> for MenuItem {
    fn from(group: ActionGroup) -> Self {
        Self::Group(group)
    }
}

/// Source format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigurationFormat {
    Markdown,
    Yaml,
}

impl ConfigurationFormat {
    /// `.yaml`/`.yml` (any case) select YAML; everything else is Markdown.
    #[must_use]
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Self::Yaml
        } else {
            Self::Markdown
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for ConfigurationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed menu plus the format it came from and when it was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadialMenuConfiguration {
    pub actions: ActionGroup,
    pub format: ConfigurationFormat,
    pub updated_at: DateTime<Utc>,
}

impl RadialMenuConfiguration {
    #[must_use]
    pub const fn new(
        actions: ActionGroup,
        format: ConfigurationFormat,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            actions,
            format,
            updated_at,
        }
    }
}
