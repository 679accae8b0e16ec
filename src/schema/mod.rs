//! Schema layer: untyped JSON → typed component tree.
//!
//! # Organization
//!
//! - [`factory`]: [`ComponentFactory`], [`ParseContext`], [`parse_component`]
//! - [`registry`]: tag resolution and the tag → parser table
//! - [`layout`]: [`parse_layout`] for the layout descriptor
//! - [`json`]: typed accessors with an explicit default policy per field
//! - [`parsers`]: one parser per component type
//!
//! # Error Policy
//!
//! | Problem                          | Outcome                                   |
//! |----------------------------------|-------------------------------------------|
//! | missing/unknown `type`, no `content`, missing required field | node omitted, warning |
//! | unrecognized enum value          | default substituted, debug diagnostic     |
//! | required collection empty after filtering | parent omitted, warning          |
//! | nesting past the depth bound     | subtree omitted, warning                  |
//!
//! Nothing in this layer panics or returns an error on malformed payloads.

pub mod factory;
pub mod json;
pub mod layout;
pub mod parsers;
pub mod registry;

pub use crate::domain::ComponentType;
pub use factory::{parse_component, ComponentFactory, ParseContext, ParsedHeader, ParserFn};
pub use json::{Content, ContentExt};
pub use layout::parse_layout;
pub use registry::{resolve_type, suggest, ComponentRegistry};
