//! Error types for component parsing, configuration, and theming.
//!
//! This module defines the centralized error type [`ComponentError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Parse-time variants never escape [`crate::schema::parse_component`]: the
//! factory logs them through the diagnostic sink and turns them into an omitted
//! node. Only configuration, theme, and file errors reach callers as `Err`.

use super::component::ComponentType;
use thiserror::Error;

/// The main error type for component operations.
///
/// The first group of variants describes malformed server payloads (schema and
/// structural errors). They are recoverable by construction: the offending
/// subtree is dropped and its siblings keep parsing.
///
/// # Examples
///
/// ```
/// use component_kit::domain::ComponentError;
/// use component_kit::domain::ComponentType;
///
/// let err = ComponentError::MissingField {
///     component: ComponentType::Label,
///     field: "text",
///     content: "{}".to_string(),
/// };
/// assert_eq!(err.to_string(), "label is missing required field `text`: {}");
/// ```
#[derive(Debug, Error)]
pub enum ComponentError {
    /// The component JSON is not an object.
    #[error("component is not a JSON object: {0}")]
    NotAnObject(String),

    /// The component JSON has no string `type` field.
    #[error("component is missing `type`: {0}")]
    MissingType(String),

    /// The `type` tag is not in the registry.
    ///
    /// `suggestion` carries the closest known tag, if any, for the diagnostic.
    #[error("unknown component type `{tag}`{}", .suggestion.map(|s| format!(" (did you mean `{s}`?)")).unwrap_or_default())]
    UnknownType {
        tag: String,
        suggestion: Option<&'static str>,
    },

    /// The component has no `content` object.
    #[error("{component} is missing `content` object: {raw}")]
    MissingContent { component: ComponentType, raw: String },

    /// A required field of the content object is absent or has the wrong JSON type.
    #[error("{component} is missing required field `{field}`: {content}")]
    MissingField {
        component: ComponentType,
        field: &'static str,
        content: String,
    },

    /// A required child collection is empty after dropping invalid elements.
    #[error("{component} has no valid `{field}`")]
    EmptyCollection {
        component: ComponentType,
        field: &'static str,
    },

    /// A nested slot resolved to a component of the wrong type.
    #[error("{component}.{field} expects {expected}, found {found}")]
    UnexpectedType {
        component: ComponentType,
        field: &'static str,
        expected: ComponentType,
        found: ComponentType,
    },

    /// Nesting went past the configured maximum depth.
    #[error("component nesting exceeds maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },

    /// Configuration is invalid or could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for component operations.
pub type Result<T> = std::result::Result<T, ComponentError>;
