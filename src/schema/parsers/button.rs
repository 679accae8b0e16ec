//! `button`: a title with an optional action.
//!
//! The action is stored unopened; a button without one still renders.

use crate::domain::{Action, Button, ButtonStyle, Component, ComponentKind, ComponentType, Result};
use crate::schema::{Content, ContentExt, ParseContext, ParsedHeader};

const TYPE: ComponentType = ComponentType::Button;

pub fn parse(content: &Content, header: ParsedHeader, ctx: &ParseContext<'_>) -> Result<Component> {
    let button = Button {
        title: content.required_str("title", TYPE)?.to_string(),
        style: ctx.enum_field::<ButtonStyle>(content, TYPE, &["button_style", "buttonStyle"]),
        action: content.get("action").and_then(Action::from_json),
    };

    Ok(header.build(ComponentKind::Button(button)))
}
