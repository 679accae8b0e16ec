//! `carouselView`: horizontally paged cards.
//!
//! The page control is only read when paging is enabled.

use super::{non_negative_f64, positive_f64};
use crate::domain::{CarouselView, Component, ComponentError, ComponentKind, ComponentType, Result};
use crate::schema::{Content, ContentExt, ParseContext, ParsedHeader};

const TYPE: ComponentType = ComponentType::CarouselView;

pub fn parse(content: &Content, header: ParsedHeader, ctx: &ParseContext<'_>) -> Result<Component> {
    let cards = ctx.children(content.required_array("cards", TYPE)?);
    if cards.is_empty() {
        return Err(ComponentError::EmptyCollection {
            component: TYPE,
            field: "cards",
        });
    }

    let paging_enabled = content
        .first_bool_field(&["pagingEnabled", "paging_enabled"])
        .unwrap_or(false);

    let page_control = if paging_enabled {
        ctx.child(content.get("pageControl").or_else(|| content.get("page_control")))
            .map(Box::new)
    } else {
        None
    };

    let carousel = CarouselView {
        cards,
        card_spacing: non_negative_f64(content, &["cardSpacing", "card_spacing"])
            .unwrap_or(CarouselView::DEFAULT_CARD_SPACING),
        card_display_count: positive_f64(content, &["cardDisplayCount", "card_display_count"])
            .unwrap_or(CarouselView::DEFAULT_CARD_DISPLAY_COUNT),
        paging_enabled,
        page_control,
    };

    Ok(header.build(ComponentKind::CarouselView(carousel)))
}
