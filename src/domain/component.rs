//! The typed component tree.
//!
//! A [`Component`] is one node of the UI tree produced from a server payload.
//! Shared attributes (`id`, `layout`) live on the node; everything that is
//! specific to a component type lives in its [`ComponentKind`] payload. The
//! tree owns its children and exposes no mutation: re-rendering means parsing
//! a new tree.

use super::action::Action;
use super::color::Color;
use super::layout::LayoutDescriptor;
use super::wire::wire_enum;
use serde::Serialize;
use std::fmt;

/// The closed set of component type tags.
///
/// Tags mix `snake_case` and `camelCase` because two schema generations are
/// served side by side; both spellings are matched exactly as listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentType {
    Button,
    Icon,
    Label,
    Separator,
    BasicListItem,
    StackView,
    TableView,
    CarouselView,
    ScrollView,
}

impl ComponentType {
    /// Every known type, in registry order.
    pub const ALL: [Self; 9] = [
        Self::Button,
        Self::Icon,
        Self::Label,
        Self::Separator,
        Self::BasicListItem,
        Self::StackView,
        Self::TableView,
        Self::CarouselView,
        Self::ScrollView,
    ];

    /// The wire tag for this type.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Icon => "icon",
            Self::Label => "label",
            Self::Separator => "separator",
            Self::BasicListItem => "basic_list_item",
            Self::StackView => "stack_view",
            Self::TableView => "tableView",
            Self::CarouselView => "carouselView",
            Self::ScrollView => "scrollView",
        }
    }

    /// Case-sensitive exact match on the wire tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }

    /// True for types that hold nested components.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(
            self,
            Self::BasicListItem
                | Self::StackView
                | Self::TableView
                | Self::CarouselView
                | Self::ScrollView
        )
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for ComponentType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

wire_enum! {
    /// Horizontal alignment of label text.
    pub enum TextAlignment {
        Left => "left",
        Center => "center",
        Right => "right",
        Justified => "justified",
    }
    default = Center;
}

wire_enum! {
    /// Font weight key resolved by the theme.
    pub enum FontStyle {
        Light => "light",
        Regular => "regular",
        Bold => "bold",
        Black => "black",
    }
    default = Regular;
}

wire_enum! {
    /// Lines drawn between rows or as a standalone separator.
    pub enum SeparatorStyle {
        None => "none",
        Line => "line" | "singleLine",
        InsetLine => "inset-line" | "inset_line" | "insetLine",
    }
    default = None;
}

wire_enum! {
    /// Main axis of a stack.
    pub enum Orientation {
        Vertical => "vertical",
        Horizontal => "horizontal",
    }
    default = Vertical;
}

wire_enum! {
    /// Visual emphasis of a button.
    pub enum ButtonStyle {
        Primary => "primary",
        Secondary => "secondary",
        Text => "text" | "textPrimary",
    }
    default = Primary;
}

/// One node of the component tree.
///
/// # Examples
///
/// ```
/// use component_kit::domain::{Component, ComponentKind, ComponentType, Label, LayoutDescriptor};
///
/// let label = Component::new(
///     Some("greeting".to_string()),
///     LayoutDescriptor::default(),
///     ComponentKind::Label(Label::new("Hi")),
/// );
/// assert_eq!(label.component_type(), ComponentType::Label);
/// assert_eq!(label.find_by_id("greeting"), Some(&label));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    layout: LayoutDescriptor,
    #[serde(flatten)]
    kind: ComponentKind,
}

impl Component {
    #[must_use]
    pub fn new(id: Option<String>, layout: LayoutDescriptor, kind: ComponentKind) -> Self {
        Self { id, layout, kind }
    }

    /// Opaque identifier, unique only within one render target.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub const fn layout(&self) -> &LayoutDescriptor {
        &self.layout
    }

    #[must_use]
    pub const fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    #[must_use]
    pub const fn component_type(&self) -> ComponentType {
        self.kind.component_type()
    }

    /// Direct children in document order (headers before rows, page control last).
    #[must_use]
    pub fn children(&self) -> Vec<&Component> {
        match &self.kind {
            ComponentKind::Label(_)
            | ComponentKind::Icon(_)
            | ComponentKind::Button(_)
            | ComponentKind::Separator(_) => Vec::new(),
            ComponentKind::BasicListItem(item) => [&item.icon, &item.title, &item.detail, &item.value]
                .into_iter()
                .filter_map(|slot| slot.as_deref())
                .collect(),
            ComponentKind::StackView(stack) => stack.items.iter().collect(),
            ComponentKind::TableView(table) => table
                .sections
                .iter()
                .flat_map(|section| section.header.as_deref().into_iter().chain(section.rows.iter()))
                .collect(),
            ComponentKind::CarouselView(carousel) => carousel
                .cards
                .iter()
                .chain(carousel.page_control.as_deref())
                .collect(),
            ComponentKind::ScrollView(scroll) => vec![scroll.root.as_ref()],
        }
    }

    /// Depth-first search for the first node carrying `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Component> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children().into_iter().find_map(|child| child.find_by_id(id))
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Component::node_count)
            .sum::<usize>()
    }

    /// Label payload, if this node is a label.
    #[must_use]
    pub const fn as_label(&self) -> Option<&Label> {
        match &self.kind {
            ComponentKind::Label(label) => Some(label),
            _ => None,
        }
    }

    /// Icon payload, if this node is an icon.
    #[must_use]
    pub const fn as_icon(&self) -> Option<&Icon> {
        match &self.kind {
            ComponentKind::Icon(icon) => Some(icon),
            _ => None,
        }
    }
}

/// Type-specific payload of a component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "content")]
pub enum ComponentKind {
    #[serde(rename = "label")]
    Label(Label),
    #[serde(rename = "icon")]
    Icon(Icon),
    #[serde(rename = "button")]
    Button(Button),
    #[serde(rename = "separator")]
    Separator(Separator),
    #[serde(rename = "basic_list_item")]
    BasicListItem(BasicListItem),
    #[serde(rename = "stack_view")]
    StackView(StackView),
    #[serde(rename = "tableView")]
    TableView(TableView),
    #[serde(rename = "carouselView")]
    CarouselView(CarouselView),
    #[serde(rename = "scrollView")]
    ScrollView(ScrollView),
}

impl ComponentKind {
    #[must_use]
    pub const fn component_type(&self) -> ComponentType {
        match self {
            Self::Label(_) => ComponentType::Label,
            Self::Icon(_) => ComponentType::Icon,
            Self::Button(_) => ComponentType::Button,
            Self::Separator(_) => ComponentType::Separator,
            Self::BasicListItem(_) => ComponentType::BasicListItem,
            Self::StackView(_) => ComponentType::StackView,
            Self::TableView(_) => ComponentType::TableView,
            Self::CarouselView(_) => ComponentType::CarouselView,
            Self::ScrollView(_) => ComponentType::ScrollView,
        }
    }
}

/// A run of styled text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub alignment: TextAlignment,
    pub font_style: FontStyle,
    pub size: f64,
    pub color: Option<Color>,
    pub letter_spacing: f64,
}

impl Label {
    pub const DEFAULT_SIZE: f64 = 15.0;
    pub const DEFAULT_LETTER_SPACING: f64 = 0.0;

    /// Label with default styling.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: TextAlignment::default(),
            font_style: FontStyle::default(),
            size: Self::DEFAULT_SIZE,
            color: None,
            letter_spacing: Self::DEFAULT_LETTER_SPACING,
        }
    }
}

/// A named glyph from the host's icon set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    /// Icon key; resolving it to an image is the renderer's job.
    pub icon: String,
    pub width: f64,
    pub height: f64,
}

impl Icon {
    pub const DEFAULT_WIDTH: f64 = 16.0;
    pub const DEFAULT_HEIGHT: f64 = 16.0;
}

/// A tappable button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub title: String,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

/// A horizontal rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Separator {
    pub style: SeparatorStyle,
    pub color: Option<Color>,
}

/// A list row with up to three labels and an icon.
///
/// `title`, `detail`, and `value` always hold label nodes and `icon` always
/// holds an icon node; the parser enforces this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicListItem {
    pub title: Option<Box<Component>>,
    pub detail: Option<Box<Component>>,
    pub value: Option<Box<Component>>,
    pub icon: Option<Box<Component>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

/// Children laid out along one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackView {
    pub items: Vec<Component>,
    pub orientation: Orientation,
    pub separator_style: SeparatorStyle,
}

/// Rows grouped into sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub sections: Vec<TableSection>,
    pub separator_style: SeparatorStyle,
}

/// One section of a table: an optional header followed by rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSection {
    pub header: Option<Box<Component>>,
    pub rows: Vec<Component>,
}

/// Horizontally paged cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselView {
    pub cards: Vec<Component>,
    pub card_spacing: f64,
    /// Cards visible at once; fractional values peek at the next card.
    pub card_display_count: f64,
    pub paging_enabled: bool,
    pub page_control: Option<Box<Component>>,
}

impl CarouselView {
    pub const DEFAULT_CARD_SPACING: f64 = 8.0;
    pub const DEFAULT_CARD_DISPLAY_COUNT: f64 = 1.0;
}

/// A scrollable wrapper around a single root component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollView {
    pub root: Box<Component>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wire::WireEnum;

    fn label(id: &str, text: &str) -> Component {
        Component::new(
            Some(id.to_string()),
            LayoutDescriptor::default(),
            ComponentKind::Label(Label::new(text)),
        )
    }

    #[test]
    fn tags_round_trip_exactly() {
        for ty in ComponentType::ALL {
            assert_eq!(ComponentType::from_tag(ty.tag()), Some(ty));
        }
        assert_eq!(ComponentType::from_tag("TableView"), None);
        assert_eq!(ComponentType::from_tag("table_view"), None);
    }

    #[test]
    fn enums_accept_alternate_spellings() {
        assert_eq!(SeparatorStyle::from_wire("singleLine"), Some(SeparatorStyle::Line));
        assert_eq!(SeparatorStyle::from_wire("inset_line"), Some(SeparatorStyle::InsetLine));
        assert_eq!(SeparatorStyle::InsetLine.as_wire(), "inset-line");
        assert_eq!(TextAlignment::default(), TextAlignment::Center);
    }

    #[test]
    fn find_by_id_searches_nested_sections() {
        let table = Component::new(
            None,
            LayoutDescriptor::default(),
            ComponentKind::TableView(TableView {
                sections: vec![TableSection {
                    header: Some(Box::new(label("header", "Header"))),
                    rows: vec![label("row-1", "One"), label("row-2", "Two")],
                }],
                separator_style: SeparatorStyle::Line,
            }),
        );

        assert_eq!(table.node_count(), 4);
        assert_eq!(
            table.find_by_id("row-2").and_then(Component::as_label).map(|l| l.text.as_str()),
            Some("Two")
        );
        assert!(table.find_by_id("missing").is_none());
    }

    #[test]
    fn serializes_with_wire_tags() {
        let json = serde_json::to_value(label("a", "Hi")).unwrap();
        assert_eq!(json["type"], "label");
        assert_eq!(json["id"], "a");
        assert_eq!(json["content"]["text"], "Hi");
        assert_eq!(json["content"]["alignment"], "center");
    }
}
