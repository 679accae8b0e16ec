//! The output of rendering: an ordered list of draw commands.
//!
//! A display list is what a host surface replays. Commands are in paint
//! order (parents before children), and every command remembers which
//! component produced it so hosts can hit-test by id.

use crate::domain::{
    Action, ButtonStyle, Color, ComponentType, FontStyle, Rect, TextAlignment,
};
use serde::Serialize;

/// What to paint inside a command's frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// The frame a component occupies; paints nothing by itself.
    Container,
    Text {
        text: String,
        font_style: FontStyle,
        size: f64,
        alignment: TextAlignment,
        color: Color,
        lines: usize,
    },
    Glyph {
        icon: String,
    },
    Fill {
        color: Color,
    },
    Rule {
        color: Color,
    },
    /// A tappable area carrying the component's opaque action.
    Hit {
        #[serde(skip_serializing_if = "Option::is_none")]
        action: Option<Action>,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<ButtonStyle>,
    },
}

/// One painted element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub component_type: ComponentType,
    pub frame: Rect,
    pub primitive: Primitive,
}

/// Draw commands in paint order.
///
/// # Examples
///
/// ```
/// use component_kit::domain::{ComponentType, Rect};
/// use component_kit::render::{DisplayList, DrawCommand, Primitive};
///
/// let mut list = DisplayList::default();
/// list.push(DrawCommand {
///     id: Some("header".to_string()),
///     component_type: ComponentType::StackView,
///     frame: Rect::new(0.0, 0.0, 320.0, 40.0),
///     primitive: Primitive::Container,
/// });
/// assert_eq!(list.frame_of("header"), Some(Rect::new(0.0, 0.0, 320.0, 40.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// First command produced by the component with `id`.
    ///
    /// Every component emits its outer frame first, so this is the
    /// component's own frame.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&DrawCommand> {
        self.commands.iter().find(|c| c.id.as_deref() == Some(id))
    }

    #[must_use]
    pub fn frame_of(&self, id: &str) -> Option<Rect> {
        self.find(id).map(|c| c.frame)
    }

    /// Every text run, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Rect)> + '_ {
        self.commands.iter().filter_map(|c| match &c.primitive {
            Primitive::Text { text, .. } => Some((text.as_str(), c.frame)),
            _ => None,
        })
    }

    /// Topmost command with an action whose frame contains the point.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&DrawCommand> {
        self.commands.iter().rev().find(|c| {
            matches!(c.primitive, Primitive::Hit { .. })
                && x >= c.frame.min_x()
                && x < c.frame.max_x()
                && y >= c.frame.min_y()
                && y < c.frame.max_y()
        })
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
