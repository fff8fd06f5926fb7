//! Closed value model the classifier matches on.
//!
//! `serde_yaml::Value` is converted once into [`RawValue`]. Tags are
//! unwrapped and map keys become strings; map entries keep document order.

use serde_yaml::Value as YamlValue;

use crate::error::{MenuError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(serde_yaml::Number),
    String(String),
    List(Vec<RawValue>),
    Map(RawMap),
}

impl RawValue {
    /// Convert a deserialized YAML value. `path` locates the value for errors.
    pub fn from_yaml(value: YamlValue, path: &str) -> Result<Self> {
        Ok(match value {
            YamlValue::Null => Self::Null,
            YamlValue::Bool(b) => Self::Bool(b),
            YamlValue::Number(n) => Self::Number(n),
            YamlValue::String(s) => Self::String(s),
            YamlValue::Sequence(seq) => Self::List(
                seq.into_iter()
                    .enumerate()
                    .map(|(i, v)| Self::from_yaml(v, &index_path(path, i)))
                    .collect::<Result<_>>()?,
            ),
            YamlValue::Mapping(mapping) => {
                let mut map = RawMap::default();
                for (key, value) in mapping {
                    let key = scalar_key(key).ok_or_else(|| MenuError::UnsupportedKey {
                        path: display_path(path).to_string(),
                    })?;
                    let value = Self::from_yaml(value, &key_path(path, &key))?;
                    map.insert(key, value);
                }
                Self::Map(map)
            }
            YamlValue::Tagged(tagged) => Self::from_yaml(tagged.value, path)?,
        })
    }

    /// Short description of the value's shape for messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "a boolean",
            Self::Number(_) => "a number",
            Self::String(_) => "a string",
            Self::List(_) => "a list",
            Self::Map(_) => "a map",
        }
    }

    /// Scalars rendered as text; `None` for null, lists and maps.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Number(n) => Some(n.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Null | Self::List(_) | Self::Map(_) => None,
        }
    }
}

fn scalar_key(key: YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Tagged(tagged) => scalar_key(tagged.value),
        YamlValue::Null | YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
    }
}

/// String-keyed map preserving insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawMap {
    entries: Vec<(String, RawValue)>,
}

impl RawMap {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace. A replaced entry keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: RawValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Text value of `key`, if it is a scalar with non-blank text.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(RawValue::as_text)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The sole entry, if the map has exactly one.
    pub fn into_single(mut self) -> std::result::Result<(String, RawValue), Self> {
        if self.entries.len() == 1 {
            if let Some(entry) = self.entries.pop() {
                return Ok(entry);
            }
        }
        Err(self)
    }
}

impl FromIterator<(String, RawValue)> for RawMap {
    fn from_iter<T: IntoIterator<Item = (String, RawValue)>>(iter: T) -> Self {
        let mut map = Self::default();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

pub(crate) fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

pub(crate) fn key_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

pub(crate) fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}
