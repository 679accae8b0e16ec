//! Layout descriptor parsing.
//!
//! ```json
//! { "margin": {"left": 8, "top": 4},
//!   "padding": "8 16",
//!   "align_content": "center",
//!   "gravity": "middle" }
//! ```
//!
//! Parsing never fails. Every field that is absent or malformed keeps its
//! default, and each inset edge is read on its own.

use super::json::{Content, ContentExt};
use crate::domain::{
    ContentAlignment, EdgeInsets, Gravity, HorizontalAlignment, LayoutDescriptor, WireEnum,
};
use serde_json::Value;

/// Builds a [`LayoutDescriptor`] from an optional `layout` object.
///
/// # Examples
///
/// ```
/// use component_kit::domain::{EdgeInsets, LayoutDescriptor};
/// use component_kit::schema::parse_layout;
/// use serde_json::json;
///
/// assert_eq!(parse_layout(None), LayoutDescriptor::default());
///
/// let layout = parse_layout(Some(&json!({"margin": {"left": 5}})));
/// assert_eq!(layout.margin, EdgeInsets::new(5.0, 0.0, 0.0, 0.0));
/// ```
#[must_use]
pub fn parse_layout(json: Option<&Value>) -> LayoutDescriptor {
    let Some(object) = json.and_then(Value::as_object) else {
        return LayoutDescriptor::default();
    };

    LayoutDescriptor {
        margin: parse_insets(object, "margin"),
        padding: parse_insets(object, "padding"),
        align_content: enum_or_default(object, &["align_content", "alignContent"]),
        alignment: enum_or_default(object, &["align", "alignment"]),
        gravity: enum_or_default(object, &["gravity"]),
        weight: parse_weight(object),
    }
}

/// `weight` truncated to a whole number in `0..=MAX_WEIGHT`.
fn parse_weight(object: &Content) -> u32 {
    object.f64_field("weight").map_or(0, |weight| {
        weight.clamp(0.0, f64::from(LayoutDescriptor::MAX_WEIGHT)) as u32
    })
}

fn enum_or_default<E: WireEnum>(object: &Content, keys: &[&str]) -> E {
    object
        .first_str_field(keys)
        .and_then(E::from_wire)
        .unwrap_or_default()
}

/// Reads the `name` inset from a layout object.
///
/// Accepted forms, applied in order:
/// 1. object `{"left":N,"top":N,"right":N,"bottom":N}` (any subset)
/// 2. number applied to all four edges
/// 3. shorthand string `"T"`, `"T R"`, `"T R B"`, `"T R B L"`
/// 4. edge-suffixed keys on the layout object (`marginTop`, `paddingLeft`, ...)
///    overriding whatever the previous forms produced
fn parse_insets(layout: &Content, name: &str) -> EdgeInsets {
    let mut edges = Edges::default();

    match layout.get(name) {
        Some(Value::Object(sides)) => {
            edges.left = sides.f64_field("left");
            edges.top = sides.f64_field("top");
            edges.right = sides.f64_field("right");
            edges.bottom = sides.f64_field("bottom");
        }
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_f64() {
                edges = Edges::uniform(v);
            }
        }
        Some(Value::String(s)) => edges = Edges::from_shorthand(s),
        _ => {}
    }

    for (suffix, slot) in [
        ("Left", &mut edges.left),
        ("Top", &mut edges.top),
        ("Right", &mut edges.right),
        ("Bottom", &mut edges.bottom),
    ] {
        if let Some(v) = layout.f64_field(&format!("{name}{suffix}")) {
            *slot = Some(v);
        }
    }

    edges.resolve()
}

#[derive(Debug, Default)]
struct Edges {
    left: Option<f64>,
    top: Option<f64>,
    right: Option<f64>,
    bottom: Option<f64>,
}

impl Edges {
    fn uniform(v: f64) -> Self {
        Self {
            left: Some(v),
            top: Some(v),
            right: Some(v),
            bottom: Some(v),
        }
    }

    fn from_shorthand(s: &str) -> Self {
        let values: Vec<f64> = s
            .split_whitespace()
            .map(|token| token.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0))
            .collect();

        match values.as_slice() {
            [] => Self::default(),
            [all] => Self::uniform(*all),
            [vertical, horizontal] => Self {
                top: Some(*vertical),
                bottom: Some(*vertical),
                left: Some(*horizontal),
                right: Some(*horizontal),
            },
            [top, right, bottom] => Self {
                top: Some(*top),
                right: Some(*right),
                bottom: Some(*bottom),
                left: None,
            },
            [top, right, bottom, left, ..] => Self {
                top: Some(*top),
                right: Some(*right),
                bottom: Some(*bottom),
                left: Some(*left),
            },
        }
    }

    fn resolve(self) -> EdgeInsets {
        EdgeInsets::new(
            self.left.unwrap_or(0.0),
            self.top.unwrap_or(0.0),
            self.right.unwrap_or(0.0),
            self.bottom.unwrap_or(0.0),
        )
    }
}
