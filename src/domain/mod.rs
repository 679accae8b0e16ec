//! Domain layer: the typed component tree and its value types.
//!
//! This module contains the data model that parsing produces and layout
//! consumes, independent of JSON decoding and of any rendering surface.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`geometry`]: Insets, sizes, rectangles, and pixel rounding
//! - [`layout`]: Layout descriptor attached to every component
//! - [`component`]: Component nodes, type tags, and per-type payloads
//! - [`action`]: Opaque interaction payloads
//! - [`color`]: Hex color values
//! - [`wire`]: Closed string enumerations with defaults
//!
//! # Examples
//!
//! ```
//! use component_kit::domain::{Component, ComponentKind, Label, LayoutDescriptor, Result};
//!
//! fn greeting() -> Result<Component> {
//!     Ok(Component::new(None, LayoutDescriptor::default(), ComponentKind::Label(Label::new("Hi"))))
//! }
//! # assert!(greeting().is_ok());
//! ```

pub mod action;
pub mod color;
pub mod component;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod wire;

pub use action::Action;
pub use color::Color;
pub use component::{
    BasicListItem, Button, ButtonStyle, CarouselView, Component, ComponentKind, ComponentType,
    FontStyle, Icon, Label, Orientation, ScrollView, Separator, SeparatorStyle, StackView,
    TableSection, TableView, TextAlignment,
};
pub use error::{ComponentError, Result};
pub use geometry::{EdgeInsets, PixelScale, Point, Rect, Size};
pub use layout::{ContentAlignment, Gravity, HorizontalAlignment, LayoutDescriptor};
pub use wire::WireEnum;
