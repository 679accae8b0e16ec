//! Layout metadata attached to every component.
//!
//! A [`LayoutDescriptor`] is built once at parse time (see
//! [`crate::schema::parse_layout`]) and never mutated afterwards.

use super::geometry::EdgeInsets;
use super::wire::wire_enum;
use serde::Serialize;

wire_enum! {
    /// Alignment of a component's content inside its own frame.
    pub enum ContentAlignment {
        Start => "start",
        Center => "center",
        End => "end",
    }
    default = Start;
}

wire_enum! {
    /// Main-axis placement of a child that is narrower than its column.
    pub enum HorizontalAlignment {
        Left => "left",
        Center => "center",
        Right => "right",
        Fill => "fill",
    }
    default = Left;
}

wire_enum! {
    /// Distribution of leftover vertical space.
    ///
    /// `Fill` behaves like `Top` when translating a frame set and stretches
    /// children to the tallest sibling in a horizontal row.
    pub enum Gravity {
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
        Fill => "fill",
    }
    default = Top;
}

/// Margin, padding, and alignment of one component.
///
/// # Examples
///
/// ```
/// use component_kit::domain::{ContentAlignment, EdgeInsets, LayoutDescriptor};
///
/// let layout = LayoutDescriptor::default();
/// assert_eq!(layout.margin, EdgeInsets::ZERO);
/// assert_eq!(layout.align_content, ContentAlignment::Start);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LayoutDescriptor {
    /// Space outside the component's frame.
    pub margin: EdgeInsets,
    /// Space between the frame and the component's content.
    pub padding: EdgeInsets,
    /// Vertical placement of a container's children when its frame is taller
    /// than they need.
    pub align_content: ContentAlignment,
    /// Placement inside a horizontal column.
    pub alignment: HorizontalAlignment,
    /// Cross-axis placement in rows; shift policy for frame sets.
    pub gravity: Gravity,
    /// Share of the leftover width in a horizontal row; `0` means "measured width".
    pub weight: u32,
}

impl LayoutDescriptor {
    /// Largest weight a payload can declare; larger values are clamped.
    pub const MAX_WEIGHT: u32 = u16::MAX as u32;

    /// Descriptor with the given margin and defaults everywhere else.
    #[must_use]
    pub fn with_margin(margin: EdgeInsets) -> Self {
        Self {
            margin,
            ..Self::default()
        }
    }
}
