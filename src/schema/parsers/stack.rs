//! `stack_view`: children along one axis.
//!
//! Older payloads say `orientation`, newer ones `direction`; both are read.

use crate::domain::{Component, ComponentError, ComponentKind, ComponentType, Result, StackView};
use crate::schema::{Content, ContentExt, ParseContext, ParsedHeader};

const TYPE: ComponentType = ComponentType::StackView;

pub fn parse(content: &Content, header: ParsedHeader, ctx: &ParseContext<'_>) -> Result<Component> {
    let items = ctx.children(content.required_array("items", TYPE)?);
    if items.is_empty() {
        return Err(ComponentError::EmptyCollection {
            component: TYPE,
            field: "items",
        });
    }

    let stack = StackView {
        items,
        orientation: ctx.enum_field(content, TYPE, &["orientation", "direction"]),
        separator_style: ctx.enum_field(content, TYPE, &["separator_style", "separatorStyle"]),
    };

    Ok(header.build(ComponentKind::StackView(stack)))
}
