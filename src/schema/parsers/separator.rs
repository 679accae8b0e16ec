//! `separator`: a horizontal rule; draws a plain line unless told otherwise.

use super::color_field;
use crate::domain::{Component, ComponentKind, ComponentType, Result, Separator, SeparatorStyle};
use crate::schema::{Content, ContentExt, ParseContext, ParsedHeader};

const TYPE: ComponentType = ComponentType::Separator;

pub fn parse(content: &Content, header: ParsedHeader, ctx: &ParseContext<'_>) -> Result<Component> {
    let raw = content.first_str_field(&["style", "separator_style", "separatorStyle"]);

    let separator = Separator {
        style: ctx.enum_or(raw, SeparatorStyle::Line, TYPE, "style"),
        color: color_field(content, "color", TYPE, ctx),
    };

    Ok(header.build(ComponentKind::Separator(separator)))
}
