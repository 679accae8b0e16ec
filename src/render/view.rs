//! Binding of typed components to measurable, renderable views.
//!
//! [`Renderer::view`] wraps a [`Component`] in a [`ComponentView`], which
//! implements [`Measurable`] for the layout engine and [`Renderable`] for
//! producing draw commands. Container views place their children with the
//! same engine the host uses for the root, so nested layouts follow the
//! same collapsing and rounding rules.
//!
//! Measuring and rendering a container share one code path: both compute
//! an arrangement of child frames, measure keeps only its size, render paints
//! it. A rendered container therefore never disagrees with its measurement.

use super::display_list::{DisplayList, DrawCommand, Primitive};
use super::text::{measure_text, TextStyle};
use super::theme::Theme;
use crate::domain::{
    BasicListItem, Button, CarouselView, Component, ComponentKind, ContentAlignment, FontStyle,
    Icon, Label, LayoutDescriptor, Orientation, PixelScale, Point, Rect, SeparatorStyle, Size,
    TableView, TextAlignment,
};
use crate::layout::{
    adjust_for_gravity_scaled, layout_horizontal, vertical_layout_info, LayoutInfo, Measurable,
};
use std::sync::Arc;

/// Something that can paint itself into a frame.
pub trait Renderable {
    fn render(&self, frame: Rect, list: &mut DisplayList);
}

/// Creates views for components and lays out whole trees.
///
/// Holds the theme and pixel scale every view measures with. Cheap to clone;
/// the theme is shared.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Arc<Theme>,
    scale: PixelScale,
}

impl Renderer {
    #[must_use]
    pub fn new(theme: Theme, scale: PixelScale) -> Self {
        Self {
            theme: Arc::new(theme),
            scale,
        }
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub const fn scale(&self) -> PixelScale {
        self.scale
    }

    /// Wraps `component` in a view bound to this renderer.
    #[must_use]
    pub fn view<'a>(&'a self, component: &'a Component) -> ComponentView<'a> {
        ComponentView {
            component,
            renderer: self,
        }
    }

    /// Frames of `root` as the only child of a `width`-wide column.
    ///
    /// # Panics
    ///
    /// Panics if `width` is negative.
    #[must_use]
    pub fn layout(&self, root: &Component, width: f64) -> LayoutInfo {
        let view = self.view(root);
        vertical_layout_info(&[view], Rect::unbounded(Point::ORIGIN, width), self.scale)
    }

    /// Lays `root` out at `width` and paints it.
    ///
    /// # Panics
    ///
    /// Panics if `width` is negative.
    #[must_use]
    pub fn render(&self, root: &Component, width: f64) -> DisplayList {
        let _span = tracing::debug_span!("render", root = %root.component_type(), width).entered();

        let mut list = DisplayList::default();
        let info = self.layout(root, width);
        if let Some(frame) = info.frames.first().filter(|f| f.height > 0.0) {
            self.view(root).render(*frame, &mut list);
        }

        tracing::debug!(commands = list.len(), height = info.max_y, "display list built");
        list
    }

    /// Paints `root` inside `viewport`, placed vertically by its own gravity.
    ///
    /// # Panics
    ///
    /// Panics if `viewport.width` is negative.
    #[must_use]
    pub fn render_in(&self, root: &Component, viewport: Rect) -> DisplayList {
        let view = self.view(root);
        let info = vertical_layout_info(&[view], viewport, self.scale);
        let frames = adjust_for_gravity_scaled(&info.frames, root.layout().gravity, viewport, self.scale);

        let mut list = DisplayList::default();
        if let Some(frame) = frames.first().filter(|f| f.height > 0.0) {
            view.render(*frame, &mut list);
        }
        list
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Theme::default(), PixelScale::ONE)
    }
}

/// A component bound to the renderer that measures and paints it.
#[derive(Debug, Clone, Copy)]
pub struct ComponentView<'a> {
    component: &'a Component,
    renderer: &'a Renderer,
}

/// Child frames of a container, plus separator rules and the total size.
struct Arrangement<'a> {
    placed: Vec<(ComponentView<'a>, Rect)>,
    rules: Vec<Rect>,
    size: Size,
}

impl<'a> ComponentView<'a> {
    #[must_use]
    pub const fn component(&self) -> &'a Component {
        self.component
    }

    fn theme(&self) -> &'a Theme {
        &self.renderer.theme
    }

    fn scale(&self) -> PixelScale {
        self.renderer.scale
    }

    fn child(&self, component: &'a Component) -> ComponentView<'a> {
        self.renderer.view(component)
    }

    fn measure_content(&self, width: f64) -> Size {
        match self.component.kind() {
            ComponentKind::Label(label) => self.label_size(label, width),
            ComponentKind::Icon(icon) => icon_size(icon, width),
            ComponentKind::Button(button) => self.button_size(button, width),
            ComponentKind::Separator(separator) => match separator.style {
                SeparatorStyle::None => Size::ZERO,
                SeparatorStyle::Line | SeparatorStyle::InsetLine => {
                    Size::new(width, self.theme().metrics.separator_thickness)
                }
            },
            _ => self.arrange(Rect::unbounded(Point::ORIGIN, width)).size,
        }
    }

    fn label_size(&self, label: &Label, width: f64) -> Size {
        measure_text(&label.text, &TextStyle::of_label(label), width, self.theme()).size
    }

    fn button_style(&self) -> TextStyle {
        TextStyle {
            font_style: FontStyle::Bold,
            size: self.theme().metrics.button_font_size,
            letter_spacing: 0.0,
        }
    }

    fn button_size(&self, button: &Button, width: f64) -> Size {
        let metrics = &self.theme().metrics;
        let pad_x = metrics.button_padding_horizontal;
        let pad_y = metrics.button_padding_vertical;
        let title = measure_text(&button.title, &self.button_style(), (width - 2.0 * pad_x).max(0.0), self.theme());
        Size::new((title.size.width + 2.0 * pad_x).min(width), title.size.height + 2.0 * pad_y)
    }

    fn arrange(&self, area: Rect) -> Arrangement<'a> {
        let component: &'a Component = self.component;
        match component.kind() {
            ComponentKind::StackView(stack) => {
                let views: Vec<_> = stack.items.iter().map(|c| self.child(c)).collect();
                match stack.orientation {
                    Orientation::Vertical => self.arrange_rows(views, &[], stack.separator_style, area),
                    Orientation::Horizontal => {
                        let info = layout_horizontal(&views, area, self.scale());
                        Arrangement {
                            size: info.content_size(area),
                            placed: visible(views, &info.frames),
                            rules: Vec::new(),
                        }
                    }
                }
            }
            ComponentKind::TableView(table) => self.arrange_table(table, area),
            ComponentKind::CarouselView(carousel) => self.arrange_carousel(carousel, area),
            ComponentKind::ScrollView(scroll) => {
                self.arrange_rows(vec![self.child(&scroll.root)], &[], SeparatorStyle::None, area)
            }
            ComponentKind::BasicListItem(item) => self.arrange_list_item(item, area),
            ComponentKind::Label(_)
            | ComponentKind::Icon(_)
            | ComponentKind::Button(_)
            | ComponentKind::Separator(_) => Arrangement {
                placed: Vec::new(),
                rules: Vec::new(),
                size: Size::ZERO,
            },
        }
    }

    /// Vertical flow with optional rules under every visible child except the
    /// last and those listed in `no_rule_after`.
    fn arrange_rows(
        &self,
        views: Vec<ComponentView<'a>>,
        no_rule_after: &[usize],
        separators: SeparatorStyle,
        area: Rect,
    ) -> Arrangement<'a> {
        let info = vertical_layout_info(&views, area, self.scale());
        let size = info.content_size(area);

        let visible_indices: Vec<usize> = (0..views.len())
            .filter(|&i| info.frames[i].height > 0.0)
            .collect();

        let mut rules = Vec::new();
        if separators != SeparatorStyle::None {
            let metrics = &self.theme().metrics;
            let inset = if separators == SeparatorStyle::InsetLine {
                metrics.separator_inset.min(area.width)
            } else {
                0.0
            };
            for pair in visible_indices.windows(2) {
                let above = pair[0];
                if no_rule_after.contains(&above) {
                    continue;
                }
                let frame = info.frames[above];
                let bottom = frame.max_y() + views[above].margin().bottom;
                rules.push(Rect::new(
                    area.x + inset,
                    bottom,
                    area.width - inset,
                    metrics.separator_thickness,
                ));
            }
        }

        Arrangement {
            placed: visible(views, &info.frames),
            rules,
            size,
        }
    }

    fn arrange_table(&self, table: &'a TableView, area: Rect) -> Arrangement<'a> {
        let mut views = Vec::new();
        let mut headers = Vec::new();
        for section in &table.sections {
            if let Some(header) = &section.header {
                headers.push(views.len());
                views.push(self.child(header));
            }
            views.extend(section.rows.iter().map(|row| self.child(row)));
        }
        self.arrange_rows(views, &headers, table.separator_style, area)
    }

    fn arrange_carousel(&self, carousel: &'a CarouselView, area: Rect) -> Arrangement<'a> {
        let scale = self.scale();
        let count = carousel.card_display_count;
        let gaps = (count.ceil() - 1.0).max(0.0);
        let card_width = scale.floor(((area.width - carousel.card_spacing * gaps) / count).max(0.0));

        let mut placed = Vec::new();
        let mut cards_height = 0.0_f64;
        let mut max_x = area.min_x();
        for (index, card) in carousel.cards.iter().enumerate() {
            let view = self.child(card);
            let x = area.min_x() + index as f64 * (card_width + carousel.card_spacing);
            let info = vertical_layout_info(&[view], Rect::new(x, area.min_y(), card_width, area.height), scale);
            cards_height = cards_height.max(info.max_y - area.min_y());
            max_x = max_x.max(info.max_x);
            placed.extend(visible(vec![view], &info.frames));
        }

        let mut height = cards_height;
        if let Some(page_control) = &carousel.page_control {
            let view = self.child(page_control);
            let below = Rect::new(area.min_x(), area.min_y() + cards_height, area.width, area.height);
            let info = vertical_layout_info(&[view], below, scale);
            height = info.max_y - area.min_y();
            placed.extend(visible(vec![view], &info.frames));
        }

        Arrangement {
            placed,
            rules: Vec::new(),
            size: Size::new((max_x - area.min_x()).min(area.width), height.max(0.0)),
        }
    }

    /// Icon on the left, title over detail in the middle, value on the right;
    /// icon and value are centered against the text column.
    fn arrange_list_item(&self, item: &'a BasicListItem, area: Rect) -> Arrangement<'a> {
        let scale = self.scale();
        let metrics = &self.theme().metrics;
        let spacing = metrics.list_item_spacing;

        let mut left = area.min_x();
        let mut remaining = area.width;

        let icon = item.icon.as_deref().map(|icon| {
            let view = self.child(icon);
            let size = scale.ceil_size(view.measure(remaining));
            if size.width > 0.0 {
                left += size.width + spacing;
                remaining = (remaining - size.width - spacing).max(0.0);
            }
            (view, size)
        });

        let value = item.value.as_deref().map(|value| {
            let view = self.child(value);
            let size = scale.ceil_size(view.measure(remaining / 2.0));
            if size.width > 0.0 {
                remaining = (remaining - size.width - spacing).max(0.0);
            }
            (view, size)
        });

        let column: Vec<_> = [&item.title, &item.detail]
            .into_iter()
            .filter_map(|slot| slot.as_deref())
            .map(|label| self.child(label))
            .collect();
        let info = vertical_layout_info(&column, Rect::new(left, area.min_y(), remaining, area.height), scale);
        let mut frames = info.frames;
        let mut column_height = (info.max_y - area.min_y()).max(0.0);
        if frames.len() == 2 && frames[0].height > 0.0 && frames[1].height > 0.0 {
            frames[1].y += metrics.list_item_line_spacing;
            column_height += metrics.list_item_line_spacing;
        }

        let height = [
            Some(column_height),
            icon.map(|(_, size)| size.height),
            value.map(|(_, size)| size.height),
        ]
        .into_iter()
        .flatten()
        .fold(0.0_f64, f64::max);

        let centered = |size: Size| scale.floor((height - size.height) / 2.0) + area.min_y();

        let mut placed = Vec::new();
        if let Some((view, size)) = icon {
            placed.push((view, Rect::new(area.min_x(), centered(size), size.width, size.height)));
        }
        placed.extend(visible(column, &frames));
        if let Some((view, size)) = value {
            placed.push((view, Rect::new(area.max_x() - size.width, centered(size), size.width, size.height)));
        }
        placed.retain(|(_, frame)| frame.height > 0.0);

        Arrangement {
            placed,
            rules: Vec::new(),
            size: Size::new(area.width, height),
        }
    }

    fn command(&self, frame: Rect, primitive: Primitive) -> DrawCommand {
        DrawCommand {
            id: self.component.id().map(str::to_string),
            component_type: self.component.component_type(),
            frame,
            primitive,
        }
    }

    fn render_leaf(&self, content: Rect, list: &mut DisplayList) {
        let theme = self.theme();
        match self.component.kind() {
            ComponentKind::Label(label) => {
                let style = TextStyle::of_label(label);
                let lines = measure_text(&label.text, &style, content.width, theme).lines;
                list.push(self.command(
                    content,
                    Primitive::Text {
                        text: label.text.clone(),
                        font_style: label.font_style,
                        size: label.size,
                        alignment: label.alignment,
                        color: label.color.unwrap_or(theme.colors.text),
                        lines,
                    },
                ));
            }
            ComponentKind::Icon(icon) => {
                let size = icon_size(icon, content.width);
                list.push(self.command(
                    Rect::new(content.x, content.y, size.width, size.height),
                    Primitive::Glyph {
                        icon: icon.icon.clone(),
                    },
                ));
            }
            ComponentKind::Button(button) => {
                if let Some(color) = theme.button_fill(button.style) {
                    list.push(self.command(content, Primitive::Fill { color }));
                }
                let metrics = &theme.metrics;
                let title_frame = Rect::new(
                    content.x + metrics.button_padding_horizontal,
                    content.y + metrics.button_padding_vertical,
                    (content.width - 2.0 * metrics.button_padding_horizontal).max(0.0),
                    (content.height - 2.0 * metrics.button_padding_vertical).max(0.0),
                );
                let style = self.button_style();
                list.push(self.command(
                    title_frame,
                    Primitive::Text {
                        text: button.title.clone(),
                        font_style: style.font_style,
                        size: style.size,
                        alignment: TextAlignment::Center,
                        color: theme.button_title(button.style),
                        lines: measure_text(&button.title, &style, title_frame.width, theme).lines,
                    },
                ));
                list.push(self.command(
                    content,
                    Primitive::Hit {
                        action: button.action.clone(),
                        style: Some(button.style),
                    },
                ));
            }
            ComponentKind::Separator(separator) => {
                let inset = if separator.style == SeparatorStyle::InsetLine {
                    theme.metrics.separator_inset.min(content.width)
                } else {
                    0.0
                };
                if separator.style != SeparatorStyle::None {
                    list.push(self.command(
                        Rect::new(content.x + inset, content.y, content.width - inset, content.height),
                        Primitive::Rule {
                            color: separator.color.unwrap_or(theme.colors.separator),
                        },
                    ));
                }
            }
            _ => {}
        }
    }
}

fn icon_size(icon: &Icon, width: f64) -> Size {
    Size::new(icon.width.min(width.max(0.0)), icon.height)
}

/// Vertical shift of a container's children when its frame is taller than
/// their arrangement, as happens to a `fill`-gravity child in a row.
fn content_offset(alignment: ContentAlignment, leftover: f64, scale: PixelScale) -> f64 {
    if !leftover.is_finite() || leftover <= 0.0 {
        return 0.0;
    }
    match alignment {
        ContentAlignment::Start => 0.0,
        ContentAlignment::Center => scale.floor(leftover / 2.0),
        ContentAlignment::End => leftover,
    }
}

/// Pairs views with their frames, dropping collapsed ones.
fn visible<'a>(views: Vec<ComponentView<'a>>, frames: &[Rect]) -> Vec<(ComponentView<'a>, Rect)> {
    views
        .into_iter()
        .zip(frames.iter().copied())
        .filter(|(_, frame)| frame.height > 0.0 && frame.width > 0.0)
        .collect()
}

impl Measurable for ComponentView<'_> {
    fn layout(&self) -> &LayoutDescriptor {
        self.component.layout()
    }

    /// Content size at the width left after padding, plus padding. Content
    /// that measures to zero height collapses the whole view, padding included.
    fn measure(&self, max_width: f64) -> Size {
        let padding = self.component.layout().padding;
        let inner = (max_width - padding.horizontal()).max(0.0);
        let content = self.measure_content(inner);
        if content.height <= 0.0 {
            return Size::ZERO;
        }
        Size::new(
            (content.width + padding.horizontal()).min(max_width.max(0.0)),
            content.height + padding.vertical(),
        )
    }
}

impl Renderable for ComponentView<'_> {
    fn render(&self, frame: Rect, list: &mut DisplayList) {
        list.push(self.command(frame, Primitive::Container));

        let content = frame.inset_by(self.component.layout().padding);
        if !self.component.component_type().is_collection() {
            self.render_leaf(content, list);
            return;
        }

        let arrangement = self.arrange(content);
        let shift = content_offset(
            self.component.layout().align_content,
            content.height - arrangement.size.height,
            self.scale(),
        );
        for (view, child_frame) in &arrangement.placed {
            view.render(child_frame.offset(0.0, shift), list);
        }

        let color = self.theme().colors.separator;
        for rule in arrangement.rules {
            list.push(self.command(rule.offset(0.0, shift), Primitive::Rule { color }));
        }

        if let ComponentKind::BasicListItem(item) = self.component.kind() {
            if item.action.is_some() {
                list.push(self.command(
                    frame,
                    Primitive::Hit {
                        action: item.action.clone(),
                        style: None,
                    },
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ComponentFactory;
    use serde_json::{json, Value};

    fn parse(json: Value) -> Component {
        ComponentFactory::without_diagnostics()
            .parse(Some(&json))
            .expect("fixture should parse")
    }

    fn label(id: &str, text: &str) -> Value {
        json!({"type": "label", "content": {"id": id, "text": text}})
    }

    #[test]
    fn empty_label_measures_to_zero_even_with_padding() {
        let renderer = Renderer::default();
        let node = parse(json!({"type": "label", "content": {"text": "", "layout": {"padding": 8}}}));
        assert_eq!(renderer.view(&node).measure(200.0), Size::ZERO);
    }

    #[test]
    fn padding_wraps_content() {
        let renderer = Renderer::default();
        let plain = parse(label("a", "Hi"));
        let padded = parse(json!({"type": "label", "content": {"text": "Hi", "layout": {"padding": "4 8"}}}));

        let inner = renderer.view(&plain).measure(200.0);
        let outer = renderer.view(&padded).measure(200.0);
        assert!((outer.height - inner.height - 8.0).abs() < 1e-9);
        assert!((outer.width - inner.width - 16.0).abs() < 1e-9);
    }

    #[test]
    fn narrower_width_makes_wrapped_text_taller() {
        let renderer = Renderer::default();
        let node = parse(label("a", "the quick brown fox jumps over the lazy dog"));
        let view = renderer.view(&node);
        assert!(view.measure(60.0).height > view.measure(600.0).height);
    }

    #[test]
    fn stack_measure_matches_rendered_children() {
        let renderer = Renderer::default();
        let stack = parse(json!({"type": "stack_view", "content": {
            "separator_style": "line",
            "items": [label("one", "One"), label("gone", ""), label("two", "Two")]
        }}));

        let list = renderer.render(&stack, 320.0);
        let stack_frame = list.commands()[0].frame;
        let one = list.frame_of("one").unwrap();
        let two = list.frame_of("two").unwrap();

        assert!(list.find("gone").is_none());
        assert_eq!(two.y, one.max_y());
        assert_eq!(stack_frame.height, two.max_y());

        let rules = list.iter().filter(|c| matches!(c.primitive, Primitive::Rule { .. })).count();
        assert_eq!(rules, 1);
    }

    #[test]
    fn horizontal_stack_places_columns_side_by_side() {
        let renderer = Renderer::default();
        let stack = parse(json!({"type": "stack_view", "content": {
            "orientation": "horizontal",
            "items": [label("left", "L"), label("right", "R")]
        }}));

        let list = renderer.render(&stack, 200.0);
        let left = list.frame_of("left").unwrap();
        let right = list.frame_of("right").unwrap();
        assert_eq!(left.x, 0.0);
        assert_eq!(right.x, 100.0);
    }

    #[test]
    fn table_rules_skip_headers() {
        let renderer = Renderer::default();
        let table = parse(json!({"type": "tableView", "content": {"sections": [
            {"header": label("h", "Header"), "rows": [label("r1", "One"), label("r2", "Two")]},
            {"rows": [label("r3", "Three")]}
        ]}}));

        let list = renderer.render(&table, 300.0);
        let rules: Vec<Rect> = list
            .iter()
            .filter(|c| matches!(c.primitive, Primitive::Rule { .. }))
            .map(|c| c.frame)
            .collect();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].y, list.frame_of("r1").unwrap().max_y());
    }

    #[test]
    fn carousel_shows_fractional_cards() {
        let renderer = Renderer::default();
        let carousel = parse(json!({"type": "carouselView", "content": {
            "cardDisplayCount": 1.5,
            "cardSpacing": 10,
            "pagingEnabled": true,
            "pageControl": label("dots", "..."),
            "cards": [label("c1", "First"), label("c2", "Second")]
        }}));

        let list = renderer.render(&carousel, 310.0);
        let first = list.frame_of("c1").unwrap();
        let second = list.frame_of("c2").unwrap();
        let dots = list.frame_of("dots").unwrap();

        assert_eq!(first.width, 200.0);
        assert_eq!(second.x, 210.0);
        assert!(dots.y >= first.max_y());
    }

    #[test]
    fn list_item_puts_value_on_the_right() {
        let renderer = Renderer::default();
        let item = parse(json!({"type": "basic_list_item", "content": {
            "id": "row",
            "title": label("title", "Plan"),
            "detail": label("detail", "Unlimited"),
            "value": label("value", "$40"),
            "action": {"type": "link"}
        }}));

        let list = renderer.render(&item, 300.0);
        let title = list.frame_of("title").unwrap();
        let detail = list.frame_of("detail").unwrap();
        let value = list.frame_of("value").unwrap();

        assert_eq!(title.x, 0.0);
        assert!(detail.y > title.max_y() - 1e-9);
        assert_eq!(value.max_x(), 300.0);
        assert_eq!(list.hit_test(1.0, 1.0).and_then(|c| c.id.as_deref()), Some("row"));
    }

    #[test]
    fn render_in_applies_root_gravity() {
        let renderer = Renderer::default();
        let node = parse(json!({"type": "button", "content": {
            "id": "b",
            "title": "Go",
            "layout": {"gravity": "bottom"}
        }}));

        let list = renderer.render_in(&node, Rect::new(0.0, 0.0, 200.0, 500.0));
        assert_eq!(list.frame_of("b").unwrap().max_y(), 500.0);
    }

    #[test]
    fn align_content_places_children_in_a_stretched_frame() {
        let renderer = Renderer::default();
        let row = |align: &str| {
            parse(json!({"type": "stack_view", "content": {
                "orientation": "horizontal",
                "items": [
                    label("tall", "a\nb\nc"),
                    {"type": "stack_view", "content": {
                        "id": "inner",
                        "layout": {"gravity": "fill", "align_content": align},
                        "items": [label("short", "x")]
                    }}
                ]
            }}))
        };

        let list = renderer.render(&row("end"), 200.0);
        let tall = list.frame_of("tall").unwrap();
        let inner = list.frame_of("inner").unwrap();
        let short = list.frame_of("short").unwrap();
        assert_eq!(inner.height, tall.height);
        assert!(short.height < inner.height);
        assert_eq!(short.max_y(), inner.max_y());

        let list = renderer.render(&row("start"), 200.0);
        assert_eq!(list.frame_of("short").unwrap().y, list.frame_of("inner").unwrap().y);

        let list = renderer.render(&row("center"), 200.0);
        let inner = list.frame_of("inner").unwrap();
        let short = list.frame_of("short").unwrap();
        assert_eq!(short.y - inner.y, ((inner.height - short.height) / 2.0).floor());
    }

    #[test]
    fn separator_none_collapses() {
        let renderer = Renderer::default();
        let node = parse(json!({"type": "separator", "content": {"style": "none"}}));
        assert_eq!(renderer.view(&node).measure(100.0), Size::ZERO);

        let line = parse(json!({"type": "separator", "content": {}}));
        assert_eq!(renderer.view(&line).measure(100.0), Size::new(100.0, 1.0));
    }
}
