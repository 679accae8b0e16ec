//! `tableView`: rows grouped into sections.
//!
//! A section survives if it has a header or at least one row. Separators
//! are single lines unless the payload names anything other than
//! `singleLine`.

use crate::domain::{
    Component, ComponentError, ComponentKind, ComponentType, Result, SeparatorStyle, TableSection,
    TableView,
};
use crate::schema::{Content, ContentExt, ParseContext, ParsedHeader};
use serde_json::Value;

const TYPE: ComponentType = ComponentType::TableView;

pub fn parse(content: &Content, header: ParsedHeader, ctx: &ParseContext<'_>) -> Result<Component> {
    let sections: Vec<TableSection> = content
        .required_array("sections", TYPE)?
        .iter()
        .filter_map(|section| parse_section(section, ctx))
        .collect();

    if sections.is_empty() {
        return Err(ComponentError::EmptyCollection {
            component: TYPE,
            field: "sections",
        });
    }

    let separator_style = match content.first_str_field(&["separatorStyle", "separator_style"]) {
        None | Some("singleLine") => SeparatorStyle::Line,
        Some(_) => SeparatorStyle::None,
    };

    Ok(header.build(ComponentKind::TableView(TableView {
        sections,
        separator_style,
    })))
}

fn parse_section(json: &Value, ctx: &ParseContext<'_>) -> Option<TableSection> {
    let section = json.as_object()?;
    let header = ctx.child(section.get("header")).map(Box::new);
    let rows = section
        .array_field("rows")
        .map(|rows| ctx.children(rows))
        .unwrap_or_default();

    if header.is_none() && rows.is_empty() {
        return None;
    }
    Some(TableSection { header, rows })
}
