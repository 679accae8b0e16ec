//! `label`: styled text.
//!
//! `text` is required but may be empty; an empty label measures to zero
//! height and collapses in vertical layout. `alignment` is matched
//! case-insensitively.

use super::color_field;
use crate::domain::{Component, ComponentKind, ComponentType, Label, Result};
use crate::schema::{Content, ContentExt, ParseContext, ParsedHeader};

const TYPE: ComponentType = ComponentType::Label;

pub fn parse(content: &Content, header: ParsedHeader, ctx: &ParseContext<'_>) -> Result<Component> {
    let text = content.required_str("text", TYPE)?;
    let alignment = content.str_field("alignment").map(str::to_lowercase);

    let label = Label {
        text: text.to_string(),
        alignment: ctx.enum_value(alignment.as_deref(), TYPE, "alignment"),
        font_style: ctx.enum_field(content, TYPE, &["font_style", "fontStyle"]),
        size: super::positive_f64(content, &["size", "font_size"]).unwrap_or(Label::DEFAULT_SIZE),
        color: color_field(content, "color", TYPE, ctx),
        letter_spacing: content
            .f64_field("letter_spacing")
            .or_else(|| content.f64_field("letterSpacing"))
            .unwrap_or(Label::DEFAULT_LETTER_SPACING),
    };

    Ok(header.build(ComponentKind::Label(label)))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::parse;
    use crate::diagnostics::Level;
    use crate::domain::{Color, FontStyle, TextAlignment};
    use serde_json::json;

    #[test]
    fn defaults_apply_to_bare_label() {
        let (node, _) = parse(&json!({"type": "label", "content": {"text": "Hi"}}));
        let node = node.unwrap();
        let label = node.as_label().unwrap();
        assert_eq!(label.text, "Hi");
        assert_eq!(label.alignment, TextAlignment::Center);
        assert_eq!(label.font_style, FontStyle::Regular);
        assert_eq!(label.size, 15.0);
        assert_eq!(label.color, None);
        assert_eq!(label.letter_spacing, 0.0);
    }

    #[test]
    fn missing_text_omits_the_node() {
        let (node, sink) = parse(&json!({"type": "label", "content": {"size": 12}}));
        assert!(node.is_none());
        assert!(sink.contains("missing required field `text`"));
        assert!(sink.contains("\"size\":12"));
    }

    #[test]
    fn invalid_alignment_falls_back_to_center() {
        let (node, sink) = parse(&json!({
            "type": "label",
            "content": {"text": "Hi", "alignment": "diagonal"}
        }));
        let node = node.unwrap();
        assert_eq!(node.as_label().unwrap().alignment, TextAlignment::Center);
        assert_eq!(sink.count_at_least(Level::Warn), 0);
        assert!(sink.contains("diagonal"));
    }

    #[test]
    fn explicit_styling_is_kept() {
        let (node, _) = parse(&json!({
            "type": "label",
            "content": {
                "text": "Total",
                "alignment": "RIGHT",
                "font_style": "bold",
                "size": 18,
                "color": "#1a2b3c",
                "letter_spacing": 0.5
            }
        }));
        let node = node.unwrap();
        let label = node.as_label().unwrap();
        assert_eq!(label.alignment, TextAlignment::Right);
        assert_eq!(label.font_style, FontStyle::Bold);
        assert_eq!(label.size, 18.0);
        assert_eq!(label.color, Some(Color::rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(label.letter_spacing, 0.5);
    }

    #[test]
    fn malformed_color_and_size_fall_back() {
        let (node, _) = parse(&json!({
            "type": "label",
            "content": {"text": "", "color": "red", "size": -3}
        }));
        let node = node.unwrap();
        let label = node.as_label().unwrap();
        assert_eq!(label.text, "");
        assert_eq!(label.color, None);
        assert_eq!(label.size, 15.0);
    }
}
