//! One parser per component type.
//!
//! Every parser has the [`ParserFn`](super::ParserFn) signature and is
//! registered in [`ComponentRegistry::standard`](super::ComponentRegistry::standard).
//! Parsers only read `content`; the header (`id`, `layout`) has already been
//! extracted by the factory.

pub mod button;
pub mod carousel;
pub mod icon;
pub mod label;
pub mod list_item;
pub mod scroll;
pub mod separator;
pub mod stack;
pub mod table;

use super::factory::ParseContext;
use super::json::{Content, ContentExt};
use crate::diagnostics::Level;
use crate::domain::{Color, ComponentType};

/// Optional hex color at `key`; malformed values are dropped with a debug diagnostic.
fn color_field(content: &Content, key: &str, component: ComponentType, ctx: &ParseContext<'_>) -> Option<Color> {
    let raw = content.str_field(key)?;
    let color = Color::from_hex(raw);
    if color.is_none() {
        ctx.log(
            Level::Debug,
            component.tag(),
            &format!("ignoring malformed {key} `{raw}`"),
        );
    }
    color
}

/// First numeric value among `keys` that is strictly positive.
fn positive_f64(content: &Content, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| content.f64_field(key))
        .filter(|v| *v > 0.0)
}

/// First numeric value among `keys` that is zero or more.
fn non_negative_f64(content: &Content, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| content.f64_field(key))
        .filter(|v| *v >= 0.0)
}
