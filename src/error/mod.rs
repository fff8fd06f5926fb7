//! Error handling for radial-menu.
//!
//! This module provides:
//! - [`MenuError`]: The main error enum for all parse and load operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Serializable error with suggestion and context

mod codes;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for radial-menu operations.
///
/// The structural variants are fatal to the parse that raised them: the
/// caller never receives a partial tree.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML syntax error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Malformed document: expected a list or a map with `items` at the root, found {found}")]
    MalformedDocument { found: String },

    #[error("Group at `{path}` has no name")]
    MissingGroupName { path: String },

    #[error("Action at `{path}` has no id")]
    MissingActionId { path: String },

    #[error("Failed to handle tuple-object `{key}` at `{path}`")]
    AmbiguousTupleObject { path: String, key: String },

    #[error("Unknown string item at `{path}`: {value:?}")]
    UnknownStringFormat { path: String, value: String },

    #[error("Unsupported map key at `{path}`: keys must be scalars")]
    UnsupportedKey { path: String },
}

impl MenuError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::SourceReadError,
            Self::Yaml(_) => ErrorCode::YamlSyntax,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MalformedDocument { .. } => ErrorCode::MalformedDocument,
            Self::MissingGroupName { .. } => ErrorCode::MissingGroupName,
            Self::MissingActionId { .. } => ErrorCode::MissingActionId,
            Self::AmbiguousTupleObject { .. } => ErrorCode::AmbiguousTupleObject,
            Self::UnknownStringFormat { .. } => ErrorCode::UnknownStringFormat,
            Self::UnsupportedKey { .. } => ErrorCode::UnsupportedKey,
        }
    }

    /// Whether this error describes a structural problem in the menu document.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MalformedDocument { .. }
                | Self::MissingGroupName { .. }
                | Self::MissingActionId { .. }
                | Self::AmbiguousTupleObject { .. }
                | Self::UnknownStringFormat { .. }
                | Self::UnsupportedKey { .. }
        )
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::MalformedDocument { found } => Some(serde_json::json!({ "found": found })),
            Self::MissingGroupName { path }
            | Self::MissingActionId { path }
            | Self::UnsupportedKey { path } => Some(serde_json::json!({ "path": path })),
            Self::AmbiguousTupleObject { path, key } => {
                Some(serde_json::json!({ "path": path, "key": key }))
            }
            Self::UnknownStringFormat { path, value } => {
                Some(serde_json::json!({ "path": path, "value": value }))
            }
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_menu_error(self)
    }
}

/// A serializable error with a stable code and a recovery hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "MISSING_ACTION_ID")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 103)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "document", "config")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from a [`MenuError`].
    #[must_use]
    pub fn from_menu_error(err: &MenuError) -> Self {
        let mut structured = Self::new(err.code(), err.to_string());
        structured.context = err.context();
        structured
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<MenuError> for StructuredError {
    fn from(err: MenuError) -> Self {
        Self::from_menu_error(&err)
    }
}

impl From<&MenuError> for StructuredError {
    fn from(err: &MenuError) -> Self {
        Self::from_menu_error(err)
    }
}

/// Result type alias using MenuError.
pub type Result<T> = std::result::Result<T, MenuError>;
