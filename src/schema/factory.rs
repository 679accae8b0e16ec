//! The component factory: JSON node → typed [`Component`].
//!
//! # Parse Pipeline
//!
//! ```text
//! Option<&Value>
//!   → null check            (None, silent)
//!   → depth guard           (DepthExceeded)
//!   → object / type / tag   (NotAnObject, MissingType, UnknownType)
//!   → content object        (MissingContent)
//!   → header (id, layout)
//!   → registry dispatch     (parser errors)
//!   → Option<Component>
//! ```
//!
//! Every error on that path is reported to the factory's [`DiagnosticSink`]
//! and becomes `None`. Callers treat `None` as "this subtree contributes
//! nothing"; siblings keep parsing.
//!
//! # Schema Generations
//!
//! Older payloads carry `id` and `layout` inside `content`. Newer payloads may
//! put `id` next to `type` and layout keys in a top-level `style` object. The
//! `content` values win when both are present.

use super::json::{raw_value, Content, ContentExt};
use super::layout::parse_layout;
use super::registry::{resolve_type, suggest, ComponentRegistry};
use crate::diagnostics::{DiagnosticSink, Level, TracingSink};
use crate::domain::{
    Component, ComponentError, ComponentKind, ComponentType, LayoutDescriptor, Result, WireEnum,
};
use serde_json::Value;
use std::sync::Arc;

/// Signature shared by every per-type parser.
///
/// Parsers receive the `content` object, the already-extracted header, and a
/// context for parsing nested components.
pub type ParserFn = fn(&Content, ParsedHeader, &ParseContext<'_>) -> Result<Component>;

/// Attributes every component carries regardless of type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedHeader {
    pub id: Option<String>,
    pub layout: LayoutDescriptor,
}

impl ParsedHeader {
    fn read(node: &Content, content: &Content) -> Self {
        let id = content
            .str_field("id")
            .or_else(|| node.str_field("id"))
            .map(str::to_string);
        let layout = parse_layout(content.get("layout").or_else(|| node.get("style")));
        Self { id, layout }
    }

    /// Finishes a component with this header.
    #[must_use]
    pub fn build(self, kind: ComponentKind) -> Component {
        Component::new(self.id, self.layout, kind)
    }
}

/// Builds component trees from JSON.
///
/// Immutable after construction and `Send + Sync`, so one factory can serve
/// every screen.
///
/// # Examples
///
/// ```
/// use component_kit::schema::ComponentFactory;
/// use serde_json::json;
///
/// let factory = ComponentFactory::without_diagnostics();
/// let label = factory.parse(Some(&json!({"type": "label", "content": {"text": "Hi"}})));
/// assert!(label.is_some());
/// assert!(factory.parse(Some(&json!({"type": "unknown_tag", "content": {}}))).is_none());
/// ```
#[derive(Clone)]
pub struct ComponentFactory {
    registry: ComponentRegistry,
    max_depth: usize,
    sink: Arc<dyn DiagnosticSink>,
}

impl ComponentFactory {
    /// Default nesting bound, counting the root as depth 1.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Standard registry, default depth, diagnostics sent to `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    #[must_use]
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            registry: ComponentRegistry::standard(),
            max_depth: Self::DEFAULT_MAX_DEPTH,
            sink,
        }
    }

    /// Factory that discards all diagnostics.
    #[must_use]
    pub fn without_diagnostics() -> Self {
        Self::with_sink(Arc::new(crate::diagnostics::NullSink))
    }

    /// Overrides the nesting bound; values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: ComponentRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub const fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Parses one component tree; `None` means nothing renderable survived.
    #[must_use]
    pub fn parse(&self, json: Option<&Value>) -> Option<Component> {
        let _span = tracing::debug_span!("parse_component", max_depth = self.max_depth).entered();

        let component = self.parse_at(json, 1);

        tracing::debug!(
            parsed = component.is_some(),
            nodes = component.as_ref().map_or(0, Component::node_count),
            "component tree parsed"
        );
        component
    }

    /// Decodes `text` as JSON, then parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Json`] if `text` is not valid JSON. Schema
    /// problems inside valid JSON still yield `Ok(None)`.
    pub fn parse_str(&self, text: &str) -> Result<Option<Component>> {
        let value: Value = serde_json::from_str(text)?;
        Ok(self.parse(Some(&value)))
    }

    fn parse_at(&self, json: Option<&Value>, depth: usize) -> Option<Component> {
        match self.try_parse(json, depth) {
            Ok(component) => component,
            Err(err) => {
                self.sink.log(Level::Warn, diagnostic_source(&err), &err.to_string());
                None
            }
        }
    }

    fn try_parse(&self, json: Option<&Value>, depth: usize) -> Result<Option<Component>> {
        let Some(value) = json.filter(|v| !v.is_null()) else {
            return Ok(None);
        };

        if depth > self.max_depth {
            return Err(ComponentError::DepthExceeded {
                max_depth: self.max_depth,
            });
        }

        let node = value
            .as_object()
            .ok_or_else(|| ComponentError::NotAnObject(raw_value(value)))?;

        let tag = node
            .str_field("type")
            .ok_or_else(|| ComponentError::MissingType(node.raw()))?;

        let unknown = || ComponentError::UnknownType {
            tag: tag.to_string(),
            suggestion: suggest(tag),
        };
        let component_type = resolve_type(tag).ok_or_else(unknown)?;
        let parser = self.registry.parser_for(component_type).ok_or_else(unknown)?;

        let content = node
            .object_field("content")
            .ok_or_else(|| ComponentError::MissingContent {
                component: component_type,
                raw: node.raw(),
            })?;

        let header = ParsedHeader::read(node, content);
        let ctx = ParseContext {
            factory: self,
            depth,
        };

        parser(content, header, &ctx).map(Some)
    }
}

impl Default for ComponentFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ComponentFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentFactory")
            .field("registry", &self.registry)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

fn diagnostic_source(err: &ComponentError) -> &'static str {
    match err {
        ComponentError::MissingContent { component, .. }
        | ComponentError::MissingField { component, .. }
        | ComponentError::EmptyCollection { component, .. }
        | ComponentError::UnexpectedType { component, .. } => component.tag(),
        _ => "factory",
    }
}

/// Parses `json` with a default factory that reports to `tracing`.
///
/// # Examples
///
/// ```
/// use component_kit::schema::parse_component;
/// use serde_json::json;
///
/// assert!(parse_component(None).is_none());
/// assert!(parse_component(Some(&json!({"type": "unknown_tag", "content": {}}))).is_none());
/// ```
#[must_use]
pub fn parse_component(json: Option<&Value>) -> Option<Component> {
    ComponentFactory::new().parse(json)
}

/// State handed to parsers for the node being built.
pub struct ParseContext<'a> {
    factory: &'a ComponentFactory,
    depth: usize,
}

impl ParseContext<'_> {
    /// Depth of the node being parsed; the root is 1.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Parses a nested component one level deeper.
    #[must_use]
    pub fn child(&self, json: Option<&Value>) -> Option<Component> {
        self.factory.parse_at(json, self.depth + 1)
    }

    /// Parses every element of `values`, keeping those that succeed.
    #[must_use]
    pub fn children(&self, values: &[Value]) -> Vec<Component> {
        values
            .iter()
            .filter_map(|value| self.child(Some(value)))
            .collect()
    }

    /// Parses `content[field]` and keeps it only if it is an `expected` node.
    ///
    /// A node of any other type is dropped with a warning naming `parent`.
    #[must_use]
    pub fn typed_child(
        &self,
        content: &Content,
        parent: ComponentType,
        field: &'static str,
        expected: ComponentType,
    ) -> Option<Box<Component>> {
        let child = self.child(content.get(field))?;
        if child.component_type() == expected {
            return Some(Box::new(child));
        }

        let err = ComponentError::UnexpectedType {
            component: parent,
            field,
            expected,
            found: child.component_type(),
        };
        self.log(Level::Warn, parent.tag(), &err.to_string());
        None
    }

    /// Reads an enumerated field from the first present key in `keys`.
    ///
    /// Absent keys give the default silently; unrecognized strings give the
    /// default and a `Debug` diagnostic.
    pub fn enum_field<E: WireEnum>(&self, content: &Content, component: ComponentType, keys: &[&str]) -> E {
        let field = keys.first().copied().unwrap_or("value");
        self.enum_value(content.first_str_field(keys), component, field)
    }

    /// Resolves an already extracted enum string with the same fallback rules
    /// as [`Self::enum_field`].
    pub fn enum_value<E: WireEnum>(&self, raw: Option<&str>, component: ComponentType, field: &str) -> E {
        self.enum_or(raw, E::default(), component, field)
    }

    /// Like [`Self::enum_value`], with a fallback other than the type's default.
    pub fn enum_or<E: WireEnum>(&self, raw: Option<&str>, fallback: E, component: ComponentType, field: &str) -> E {
        let Some(raw) = raw else {
            return fallback;
        };

        E::from_wire(raw).unwrap_or_else(|| {
            self.log(
                Level::Debug,
                component.tag(),
                &format!("unrecognized {field} `{raw}`, using `{}`", fallback.as_wire()),
            );
            fallback
        })
    }

    /// Reports a diagnostic through the factory's sink.
    pub fn log(&self, level: Level, source: &str, message: &str) {
        self.factory.sink.log(level, source, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use crate::domain::EdgeInsets;
    use serde_json::json;

    fn recording() -> (ComponentFactory, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        (ComponentFactory::with_sink(sink.clone()), sink)
    }

    #[test]
    fn null_input_is_silent() {
        let (factory, sink) = recording();
        assert!(factory.parse(None).is_none());
        assert!(factory.parse(Some(&Value::Null)).is_none());
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn schema_errors_are_logged_not_raised() {
        let (factory, sink) = recording();
        let cases = [
            json!([1, 2]),
            json!({"content": {"text": "Hi"}}),
            json!({"type": "unknown_tag", "content": {}}),
            json!({"type": "label"}),
            json!({"type": "label", "content": "text"}),
        ];
        for case in &cases {
            assert!(factory.parse(Some(case)).is_none(), "{case}");
        }
        assert_eq!(sink.count_at_least(Level::Warn), cases.len());
        assert!(sink.contains("unknown component type `unknown_tag`"));
        assert!(sink.contains("missing `content`"));
    }

    #[test]
    fn unknown_tag_diagnostic_suggests_a_close_tag() {
        let (factory, sink) = recording();
        assert!(factory.parse(Some(&json!({"type": "TableView", "content": {}}))).is_none());
        assert!(sink.contains("did you mean `tableView`?"));
    }

    #[test]
    fn header_prefers_content_then_falls_back_to_node() {
        let factory = ComponentFactory::without_diagnostics();

        let old = factory
            .parse(Some(&json!({
                "type": "label",
                "content": {"id": "a", "text": "Hi", "layout": {"margin": {"left": 5}}}
            })))
            .unwrap();
        assert_eq!(old.id(), Some("a"));
        assert_eq!(old.layout().margin, EdgeInsets::new(5.0, 0.0, 0.0, 0.0));

        let new = factory
            .parse(Some(&json!({
                "type": "label",
                "id": "b",
                "style": {"padding": 4},
                "content": {"text": "Hi"}
            })))
            .unwrap();
        assert_eq!(new.id(), Some("b"));
        assert_eq!(new.layout().padding, EdgeInsets::uniform(4.0));
    }

    #[test]
    fn non_string_id_is_ignored() {
        let factory = ComponentFactory::without_diagnostics();
        let label = factory
            .parse(Some(&json!({"type": "label", "content": {"id": 7, "text": "Hi"}})))
            .unwrap();
        assert_eq!(label.id(), None);
    }

    #[test]
    fn depth_guard_omits_deep_subtrees() {
        let (factory, sink) = recording();
        let factory = factory.with_max_depth(2);

        let shallow = json!({"type": "stack_view", "content": {"items": [
            {"type": "label", "content": {"text": "ok"}}
        ]}});
        assert!(factory.parse(Some(&shallow)).is_some());

        let deep = json!({"type": "stack_view", "content": {"items": [
            {"type": "stack_view", "content": {"items": [
                {"type": "label", "content": {"text": "too deep"}}
            ]}}
        ]}});
        assert!(factory.parse(Some(&deep)).is_none());
        assert!(sink.contains("maximum depth of 2"));
    }

    #[test]
    fn replaced_parser_is_used() {
        fn always_separator(_: &Content, header: ParsedHeader, _: &ParseContext<'_>) -> Result<Component> {
            Ok(header.build(ComponentKind::Separator(crate::domain::Separator {
                style: crate::domain::SeparatorStyle::Line,
                color: None,
            })))
        }

        let mut registry = ComponentRegistry::standard();
        assert!(registry.register(ComponentType::Label, always_separator).is_some());
        let factory = ComponentFactory::without_diagnostics().with_registry(registry);

        let node = factory
            .parse(Some(&json!({"type": "label", "content": {}})))
            .unwrap();
        assert_eq!(node.component_type(), ComponentType::Separator);
    }

    #[test]
    fn parse_str_reports_invalid_json() {
        let factory = ComponentFactory::without_diagnostics();
        assert!(matches!(factory.parse_str("{"), Err(ComponentError::Json(_))));
        assert!(factory.parse_str("null").unwrap().is_none());
    }

    #[test]
    fn factory_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ComponentFactory>();
    }
}
