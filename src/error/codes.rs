//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Document errors (syntax and menu structure)
//! - 2xx: Source errors (reading the configuration file)
//! - 3xx: Config errors (host settings)
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for JSON output.
///
/// Each variant maps to a numeric code (e.g., `MalformedDocument` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Document errors (1xx)
    // ========================================
    /// E101: Root is neither a list nor a map with `items`
    MalformedDocument,
    /// E102: A group resolved without a usable name
    MissingGroupName,
    /// E103: An action resolved without a usable id
    MissingActionId,
    /// E104: A map matched none of the recognized shapes
    AmbiguousTupleObject,
    /// E105: A string item is neither a legacy name nor a qualified id
    UnknownStringFormat,
    /// E106: A map key is a list or a map
    UnsupportedKey,
    /// E107: The YAML text could not be deserialized
    YamlSyntax,

    // ========================================
    // Source errors (2xx)
    // ========================================
    /// E201: The configuration file could not be read
    SourceReadError,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Settings file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Serialization of output failed
    SerializationError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `MalformedDocument` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::MalformedDocument => 101,
            Self::MissingGroupName => 102,
            Self::MissingActionId => 103,
            Self::AmbiguousTupleObject => 104,
            Self::UnknownStringFormat => 105,
            Self::UnsupportedKey => 106,
            Self::YamlSyntax => 107,

            Self::SourceReadError => 201,

            Self::ConfigInvalid => 301,

            Self::SerializationError => 901,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::MalformedDocument => "Start the document with a list of items, or a map with an `items` list",
            Self::MissingGroupName => "Give the group a `name`, or nest it under a key (`Name: [...]`)",
            Self::MissingActionId => "Add an `id` (or legacy `command`) field holding a command id such as `editor:focus`",
            Self::AmbiguousTupleObject => "Use `key: command:id`, `Name: [items]`, or a map with `id` or `items` under the key",
            Self::UnknownStringFormat => "Write string items as `namespace:command Optional display name`",
            Self::UnsupportedKey => "Use plain strings or numbers as map keys",
            Self::YamlSyntax => "Fix the YAML syntax at the reported line and column",
            Self::SourceReadError => "Check the configuration path exists and is readable",
            Self::ConfigInvalid => "Check TOML syntax in the settings file and the RADIAL_* environment variables",
            Self::SerializationError => "Output could not be encoded. Please report this issue with the input file",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::MalformedDocument
            | Self::MissingGroupName
            | Self::MissingActionId
            | Self::AmbiguousTupleObject
            | Self::UnknownStringFormat
            | Self::UnsupportedKey
            | Self::YamlSyntax
            | Self::SourceReadError
            | Self::ConfigInvalid => true,

            Self::SerializationError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "document",
            2 => "source",
            3 => "config",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::MalformedDocument,
            Self::MissingGroupName,
            Self::MissingActionId,
            Self::AmbiguousTupleObject,
            Self::UnknownStringFormat,
            Self::UnsupportedKey,
            Self::YamlSyntax,
            Self::SourceReadError,
            Self::ConfigInvalid,
            Self::SerializationError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
