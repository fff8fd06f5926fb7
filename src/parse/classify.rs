//! Node classification and tree construction.
//!
//! Each deserialized value is classified once into a [`Shape`], then built
//! into a [`MenuItem`]. Structural checks happen at each construction site,
//! and the first failure aborts the whole build.
//!
//! | value                          | shape          | result                              |
//! |--------------------------------|----------------|-------------------------------------|
//! | `"ns:cmd Tail"`                | `Text`         | action, tail as name                |
//! | `[...]`                        | `List`         | group named by context              |
//! | empty map / map with >1 entry  | `Record`       | group if `items`, action if `id`    |
//! | `Key: [...]`                   | `NamedList`    | group named `Key`                   |
//! | `k: "ns:cmd Tail"`             | `KeyedText`    | action with keycode `k`             |
//! | `"ns:cmd Tail":` (null)        | `BareKey`      | action                              |
//! | `k: {items: ...}`              | `KeyedGroup`   | group, `k` as keycode or name       |
//! | `"ns:cmd": {...}`              | `QualifiedKey` | action with id from key             |
//! | `k: {id: ...}`                 | `KeyedAction`  | action, `k` as keycode or name      |

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::error::{MenuError, Result};
use crate::menu::{Action, ActionGroup, MenuItem, ROOT_GROUP_NAME};

use super::normalize::normalize_aliases;
use super::value::{RawMap, RawValue, display_path, index_path, key_path};

/// Bare command names accepted without a `namespace:` prefix.
pub const LEGACY_COMMAND_IDS: &[&str] = &[
    "undo",
    "redo",
    "copy",
    "cut",
    "paste",
    "select-all",
    "save",
    "close",
];

static STRING_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    let legacy = LEGACY_COMMAND_IDS
        .iter()
        .map(|id| regex::escape(id))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?s)^(?P<id>(?:{legacy})|\S*:\S*)(?:\s+(?P<name>.*))?$"))
        .expect("string action pattern is valid")
});

/// Command id and optional display name parsed from a string item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringAction {
    pub id: String,
    pub name: Option<String>,
}

/// Split `"ns:cmd Display name"` into id and name.
///
/// The head must be a legacy bare name or a token containing a colon.
#[must_use]
pub fn split_string_action(text: &str) -> Option<StringAction> {
    let caps = STRING_ACTION.captures(text.trim())?;
    let id = caps.name("id")?.as_str().to_string();
    let name = caps
        .name("name")
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty());
    Some(StringAction { id, name })
}

/// Whether `text` starts with a `namespace:command` token.
#[must_use]
pub fn is_qualified_id(text: &str) -> bool {
    split_string_action(text).is_some_and(|action| action.id.contains(':'))
}

/// A non-fatal problem found while building the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Name and keycode handed down from an enclosing key.
#[derive(Debug, Default)]
struct Context {
    name: Option<String>,
    keycode: Option<String>,
}

impl Context {
    fn named(name: String) -> Self {
        Self {
            name: Some(name),
            keycode: None,
        }
    }
}

#[derive(Debug)]
enum Shape {
    Text(String),
    List(Vec<RawValue>),
    Record(RawMap),
    NamedList { name: String, items: Vec<RawValue> },
    KeyedText { keycode: String, text: String },
    BareKey(String),
    KeyedGroup { key: String, body: RawMap },
    QualifiedKey { key: String, body: RawMap },
    KeyedAction { key: String, body: RawMap },
}

fn classify(value: RawValue, path: &str) -> Result<Shape> {
    match value {
        RawValue::String(text) => Ok(Shape::Text(text)),
        RawValue::List(items) => Ok(Shape::List(items)),
        RawValue::Map(mut map) => {
            normalize_aliases(&mut map);
            match map.into_single() {
                Ok((key, value)) => classify_tuple(key, value, path),
                Err(map) => Ok(Shape::Record(map)),
            }
        }
        scalar @ (RawValue::Null | RawValue::Bool(_) | RawValue::Number(_)) => {
            Err(MenuError::UnknownStringFormat {
                path: display_path(path).to_string(),
                value: scalar.as_text().unwrap_or_else(|| "null".to_string()),
            })
        }
    }
}

fn classify_tuple(key: String, value: RawValue, path: &str) -> Result<Shape> {
    match value {
        RawValue::List(items) => Ok(Shape::NamedList { name: key, items }),
        RawValue::String(text) => Ok(Shape::KeyedText { keycode: key, text }),
        RawValue::Null => Ok(Shape::BareKey(key)),
        RawValue::Map(mut body) => {
            normalize_aliases(&mut body);
            if body.contains_key("items") {
                Ok(Shape::KeyedGroup { key, body })
            } else if is_qualified_id(&key) {
                Ok(Shape::QualifiedKey { key, body })
            } else if body.contains_key("id") {
                Ok(Shape::KeyedAction { key, body })
            } else {
                Err(ambiguous(path, key))
            }
        }
        RawValue::Bool(_) | RawValue::Number(_) => Err(ambiguous(path, key)),
    }
}

fn ambiguous(path: &str, key: String) -> MenuError {
    MenuError::AmbiguousTupleObject {
        path: display_path(path).to_string(),
        key,
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}

/// An outer key fills the keycode when the body names itself but has no
/// keycode; otherwise it becomes the name.
fn apply_outer_key(body: &mut RawMap, key: String) {
    let field = if body.contains_key("name") && !body.contains_key("keycode") {
        "keycode"
    } else {
        "name"
    };
    body.insert(field, RawValue::String(key));
}

/// Builds a validated menu tree from deserialized values.
///
/// Holds only the warnings of the current build; create one per parse.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    warnings: Vec<ParseWarning>,
}

impl TreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the root group of a document.
    ///
    /// The root must be a list of items or a map with `items`; its name
    /// defaults to [`ROOT_GROUP_NAME`].
    pub fn build_document(&mut self, value: RawValue) -> Result<ActionGroup> {
        match value {
            RawValue::List(items) => {
                let items = self.build_list(items, "")?;
                Ok(ActionGroup::root().with_items(items))
            }
            RawValue::Map(mut map) => {
                normalize_aliases(&mut map);
                if !map.contains_key("items") {
                    return Err(MenuError::MalformedDocument {
                        found: "a map without `items`".to_string(),
                    });
                }
                let items = self.build_items(map.remove("items"), "items")?;
                Ok(ActionGroup {
                    name: map
                        .text("name")
                        .unwrap_or_else(|| ROOT_GROUP_NAME.to_string()),
                    items,
                    keycode: map.text("keycode"),
                    icon: map.text("icon"),
                    color: map.text("color"),
                })
            }
            other => Err(MenuError::MalformedDocument {
                found: other.kind().to_string(),
            }),
        }
    }

    /// Build a single item outside any group.
    pub fn build_item(&mut self, value: RawValue) -> Result<MenuItem> {
        self.item(value, Context::default(), "")
    }

    #[must_use]
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn into_warnings(self) -> Vec<ParseWarning> {
        self.warnings
    }

    fn warn(&mut self, path: &str, message: String) {
        let path = display_path(path).to_string();
        warn!(path = %path, "{message}");
        self.warnings.push(ParseWarning { path, message });
    }

    fn item(&mut self, value: RawValue, ctx: Context, path: &str) -> Result<MenuItem> {
        let shape = classify(value, path)?;
        self.build(shape, ctx, path)
    }

    fn build(&mut self, shape: Shape, ctx: Context, path: &str) -> Result<MenuItem> {
        match shape {
            Shape::Text(text) => string_action(&text, ctx.keycode, path).map(MenuItem::from),
            Shape::List(items) => self.list_group(items, ctx, path).map(MenuItem::from),
            Shape::Record(map) => self.record(map, ctx, path),
            Shape::NamedList { name, items } => {
                let path = key_path(path, &name);
                self.list_group(items, Context::named(name), &path)
                    .map(MenuItem::from)
            }
            Shape::KeyedText { keycode, text } => {
                string_action(&text, Some(keycode), path).map(MenuItem::from)
            }
            Shape::BareKey(key) => string_action(&key, None, path).map(MenuItem::from),
            Shape::KeyedGroup { key, mut body } => {
                let path = key_path(path, &key);
                apply_outer_key(&mut body, key);
                self.record_group(body, Context::default(), &path)
                    .map(MenuItem::from)
            }
            Shape::QualifiedKey { key, body } => {
                qualified_action(&key, &body, &key_path(path, &key)).map(MenuItem::from)
            }
            Shape::KeyedAction { key, mut body } => {
                let path = key_path(path, &key);
                apply_outer_key(&mut body, key);
                record_action(&body, Context::default(), &path).map(MenuItem::from)
            }
        }
    }

    fn record(&mut self, map: RawMap, ctx: Context, path: &str) -> Result<MenuItem> {
        if map.contains_key("items") {
            self.record_group(map, ctx, path).map(MenuItem::from)
        } else if map.contains_key("id") {
            record_action(&map, ctx, path).map(MenuItem::from)
        } else {
            Err(MenuError::MissingActionId {
                path: display_path(path).to_string(),
            })
        }
    }

    fn record_group(&mut self, mut map: RawMap, ctx: Context, path: &str) -> Result<ActionGroup> {
        let name = require_group_name(map.text("name").or(ctx.name), path)?;
        let items = self.build_items(map.remove("items"), &key_path(path, "items"))?;
        Ok(ActionGroup {
            name,
            items,
            keycode: map.text("keycode").or(ctx.keycode),
            icon: map.text("icon"),
            color: map.text("color"),
        })
    }

    fn list_group(&mut self, items: Vec<RawValue>, ctx: Context, path: &str) -> Result<ActionGroup> {
        let name = require_group_name(ctx.name, path)?;
        let items = self.build_list(items, path)?;
        Ok(ActionGroup {
            name,
            items,
            keycode: ctx.keycode,
            icon: None,
            color: None,
        })
    }

    fn build_items(&mut self, value: Option<RawValue>, path: &str) -> Result<Vec<MenuItem>> {
        match value {
            Some(RawValue::List(items)) => self.build_list(items, path),
            Some(other) => {
                self.warn(
                    path,
                    format!("`items` is {}, not a list; the group is left empty", other.kind()),
                );
                Ok(Vec::new())
            }
            None => {
                self.warn(path, "group has no `items`".to_string());
                Ok(Vec::new())
            }
        }
    }

    fn build_list(&mut self, items: Vec<RawValue>, path: &str) -> Result<Vec<MenuItem>> {
        if items.is_empty() {
            self.warn(path, "group has no items".to_string());
        }
        items
            .into_iter()
            .enumerate()
            .map(|(i, value)| self.item(value, Context::default(), &index_path(path, i)))
            .collect()
    }
}

fn require_group_name(name: Option<String>, path: &str) -> Result<String> {
    name.and_then(non_blank)
        .ok_or_else(|| MenuError::MissingGroupName {
            path: display_path(path).to_string(),
        })
}

fn string_action(text: &str, keycode: Option<String>, path: &str) -> Result<Action> {
    let parsed = split_string_action(text).ok_or_else(|| MenuError::UnknownStringFormat {
        path: display_path(path).to_string(),
        value: text.to_string(),
    })?;
    Ok(Action {
        id: parsed.id,
        name: parsed.name,
        keycode: keycode.and_then(non_blank),
        ..Action::default()
    })
}

fn record_action(map: &RawMap, ctx: Context, path: &str) -> Result<Action> {
    let id = map.text("id").ok_or_else(|| MenuError::MissingActionId {
        path: display_path(path).to_string(),
    })?;
    Ok(Action {
        id,
        name: map.text("name"),
        color: map.text("color"),
        icon: map.text("icon"),
        keycode: map.text("keycode").or(ctx.keycode),
    })
}

/// `"ns:cmd Tail": {...}`: the key supplies the id (and a default name),
/// the body supplies everything else.
fn qualified_action(key: &str, body: &RawMap, path: &str) -> Result<Action> {
    let head = split_string_action(key).ok_or_else(|| MenuError::MissingActionId {
        path: display_path(path).to_string(),
    })?;
    Ok(Action {
        id: head.id,
        name: body.text("name").or(head.name),
        color: body.text("color"),
        icon: body.text("icon"),
        keycode: body.text("keycode"),
    })
}
