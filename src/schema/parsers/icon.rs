//! `icon`: a named glyph with an explicit size.

use super::positive_f64;
use crate::domain::{Component, ComponentKind, ComponentType, Icon, Result};
use crate::schema::{Content, ContentExt, ParseContext, ParsedHeader};

const TYPE: ComponentType = ComponentType::Icon;

pub fn parse(content: &Content, header: ParsedHeader, _ctx: &ParseContext<'_>) -> Result<Component> {
    let icon = Icon {
        icon: content.required_str("icon", TYPE)?.to_string(),
        width: positive_f64(content, &["width"]).unwrap_or(Icon::DEFAULT_WIDTH),
        height: positive_f64(content, &["height"]).unwrap_or(Icon::DEFAULT_HEIGHT),
    };

    Ok(header.build(ComponentKind::Icon(icon)))
}
