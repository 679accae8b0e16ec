//! `scrollView`: a scrollable wrapper around one `root` component.

use crate::domain::{Component, ComponentError, ComponentKind, ComponentType, Result, ScrollView};
use crate::schema::{Content, ContentExt, ParseContext, ParsedHeader};

const TYPE: ComponentType = ComponentType::ScrollView;

pub fn parse(content: &Content, header: ParsedHeader, ctx: &ParseContext<'_>) -> Result<Component> {
    let root = ctx
        .child(content.get("root"))
        .ok_or_else(|| ComponentError::MissingField {
            component: TYPE,
            field: "root",
            content: content.raw(),
        })?;

    Ok(header.build(ComponentKind::ScrollView(ScrollView {
        root: Box::new(root),
    })))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use crate::domain::ComponentType;
    use serde_json::json;

    #[test]
    fn wraps_its_root() {
        let (node, _) = parse(&json!({
            "type": "scrollView",
            "content": {"root": {"type": "label", "content": {"id": "inner", "text": "Hi"}}}
        }));
        let node = node.unwrap();
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.find_by_id("inner").map(|c| c.component_type()), Some(ComponentType::Label));
    }

    #[test]
    fn missing_or_invalid_root_is_invalid() {
        let (node, sink) = parse(&json!({"type": "scrollView", "content": {}}));
        assert!(node.is_none());
        assert!(sink.contains("scrollView is missing required field `root`"));

        let (node, _) = parse(&json!({
            "type": "scrollView",
            "content": {"root": {"type": "label", "content": {}}}
        }));
        assert!(node.is_none());
    }
}
