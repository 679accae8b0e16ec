//! `basic_list_item`: up to three labels and an icon in one row.
//!
//! `title`, `detail`, and `value` must be labels and `icon` must be an icon;
//! a nested node of any other type is dropped with a warning. At least one
//! of the three labels has to survive.

use crate::domain::{
    Action, BasicListItem, Component, ComponentError, ComponentKind, ComponentType, Result,
};
use crate::schema::{Content, ContentExt, ParseContext, ParsedHeader};

const TYPE: ComponentType = ComponentType::BasicListItem;

pub fn parse(content: &Content, header: ParsedHeader, ctx: &ParseContext<'_>) -> Result<Component> {
    let label = |field| ctx.typed_child(content, TYPE, field, ComponentType::Label);

    let item = BasicListItem {
        title: label("title"),
        detail: label("detail"),
        value: label("value"),
        icon: ctx.typed_child(content, TYPE, "icon", ComponentType::Icon),
        action: content.get("action").and_then(Action::from_json),
    };

    if item.title.is_none() && item.detail.is_none() && item.value.is_none() {
        return Err(ComponentError::MissingField {
            component: TYPE,
            field: "title",
            content: content.raw(),
        });
    }

    Ok(header.build(ComponentKind::BasicListItem(item)))
}
