//! Frame computation for stacks of measurable children.
//!
//! # Algorithms
//!
//! - [`layout_vertical`]: top-to-bottom flow; zero-height children collapse
//! - [`layout_horizontal`]: weighted columns with per-child alignment and gravity
//! - [`adjust_for_gravity`]: rigid vertical translation of a finished frame set
//!
//! All functions are pure. Measured sizes are rounded up to device pixels
//! before use; offsets derived by halving are rounded down.

use super::measure::Measurable;
use crate::domain::{Gravity, HorizontalAlignment, PixelScale, Rect, Size};
use serde::Serialize;

/// Frames plus the far extents they reach, trailing margins included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutInfo {
    pub frames: Vec<Rect>,
    pub max_x: f64,
    pub max_y: f64,
}

impl LayoutInfo {
    fn empty(bounds: Rect) -> Self {
        Self {
            frames: Vec::new(),
            max_x: bounds.min_x(),
            max_y: bounds.min_y(),
        }
    }

    /// Size from the bounds origin to the far extents.
    #[must_use]
    pub fn content_size(&self, bounds: Rect) -> Size {
        Size::new(
            (self.max_x - bounds.min_x()).max(0.0),
            (self.max_y - bounds.min_y()).max(0.0),
        )
    }
}

fn assert_width(bounds: Rect) {
    assert!(
        bounds.width >= 0.0,
        "layout bounds must have a non-negative width, got {}",
        bounds.width
    );
}

/// Stacks `children` top to bottom inside `bounds`.
///
/// Each child gets the full bounds width minus its horizontal margins and is
/// measured at that width. A child that measures to zero height gets a
/// zero-height frame at the current cursor and contributes no space, margins
/// included. `bounds.height` is not consulted.
///
/// Returns one frame per child, in order.
///
/// # Panics
///
/// Panics if `bounds.width` is negative.
///
/// # Examples
///
/// ```
/// use component_kit::domain::{EdgeInsets, LayoutDescriptor, PixelScale, Rect};
/// use component_kit::layout::{layout_vertical, FixedSize};
///
/// let margin = LayoutDescriptor::with_margin(EdgeInsets::new(0.0, 10.0, 0.0, 10.0));
/// let children = [FixedSize::height(margin, 20.0), FixedSize::height(margin, 0.0)];
/// let frames = layout_vertical(&children, Rect::new(0.0, 0.0, 100.0, 0.0), PixelScale::ONE);
///
/// assert_eq!(frames[0], Rect::new(0.0, 10.0, 100.0, 20.0));
/// assert_eq!(frames[1], Rect::new(0.0, 40.0, 100.0, 0.0));
/// ```
pub fn layout_vertical<M: Measurable>(children: &[M], bounds: Rect, scale: PixelScale) -> Vec<Rect> {
    assert_width(bounds);
    let _span = tracing::debug_span!(
        "layout_vertical",
        children = children.len(),
        width = bounds.width
    )
    .entered();

    let mut top = bounds.min_y();
    children
        .iter()
        .map(|child| {
            let margin = child.margin();
            let left = bounds.min_x() + margin.left;
            let width = (bounds.width - margin.horizontal()).max(0.0);
            let height = scale.ceil(child.measure(width).height.max(0.0));

            if height > 0.0 {
                top += margin.top;
                let frame = Rect::new(left, top, width, height);
                top += height + margin.bottom;
                frame
            } else {
                Rect::new(left, top, width, 0.0)
            }
        })
        .collect()
}

/// [`layout_vertical`] plus the extents needed to size the container.
///
/// Collapsed children do not extend the extents.
///
/// # Panics
///
/// Panics if `bounds.width` is negative.
pub fn vertical_layout_info<M: Measurable>(children: &[M], bounds: Rect, scale: PixelScale) -> LayoutInfo {
    let frames = layout_vertical(children, bounds, scale);
    let mut info = LayoutInfo::empty(bounds);

    for (child, frame) in children.iter().zip(&frames) {
        if frame.height > 0.0 {
            let margin = child.margin();
            info.max_x = info.max_x.max(frame.max_x() + margin.right);
            info.max_y = info.max_y.max(frame.max_y() + margin.bottom);
        }
    }

    info.frames = frames;
    info
}

/// Lays `children` out left to right in columns.
///
/// # Column Widths
///
/// The bounds width minus every child's horizontal margins is shared out:
/// children with `weight == 0` first take their measured width, then the
/// rest is split between weighted children in proportion to their weight
/// (each share floored to the pixel grid).
/// When no child has a weight every child counts as weight 1, which gives
/// even columns. Rounding remainders go to the last weighted column.
///
/// # Placement
///
/// A child narrower than its column is placed by its
/// [`HorizontalAlignment`]; `fill` stretches it to the column. Children that
/// measure to zero width or height collapse to an empty frame and take no
/// space. Finally each child's [`Gravity`] positions it against the tallest
/// frame in the row; `fill` stretches it to that height.
///
/// # Panics
///
/// Panics if `bounds.width` is negative.
pub fn layout_horizontal<M: Measurable>(children: &[M], bounds: Rect, scale: PixelScale) -> LayoutInfo {
    assert_width(bounds);
    let _span = tracing::debug_span!(
        "layout_horizontal",
        children = children.len(),
        width = bounds.width
    )
    .entered();

    if children.is_empty() {
        return LayoutInfo::empty(bounds);
    }

    let columns = column_sizes(children, bounds.width, scale);
    let top = bounds.min_y();
    let mut left = bounds.min_x();
    let mut frames = Vec::with_capacity(children.len());

    for (child, column) in children.iter().zip(&columns) {
        let layout = child.layout();
        let mut size = column.fitted;
        let mut offset_x = 0.0;

        if size.width < column.width {
            match layout.alignment {
                HorizontalAlignment::Left => {}
                HorizontalAlignment::Center => offset_x = scale.floor((column.width - size.width) / 2.0),
                HorizontalAlignment::Right => offset_x = column.width - size.width,
                HorizontalAlignment::Fill => size.width = column.width,
            }
        }

        if size.width > 0.0 && size.height > 0.0 {
            left += layout.margin.left;
            frames.push(Rect::new(left + offset_x, top + layout.margin.top, size.width, size.height));
            left += column.width + layout.margin.right;
        } else {
            frames.push(Rect::new(left, top, 0.0, 0.0));
        }
    }

    let tallest = frames.iter().map(|f| f.height).fold(0.0_f64, f64::max);
    let mut info = LayoutInfo::empty(bounds);
    if tallest <= 0.0 {
        info.frames = frames;
        return info;
    }

    for (child, frame) in children.iter().zip(frames.iter_mut()) {
        if frame.height <= 0.0 {
            continue;
        }

        let layout = child.layout();
        let row_top = top + layout.margin.top;
        match layout.gravity {
            Gravity::Top => {}
            Gravity::Middle => frame.y = row_top + scale.floor((tallest - frame.height) / 2.0),
            Gravity::Bottom => frame.y = row_top + tallest - frame.height,
            Gravity::Fill => frame.height = tallest,
        }

        info.max_x = info.max_x.max(frame.max_x() + layout.margin.right);
        info.max_y = info.max_y.max(frame.max_y() + layout.margin.bottom);
    }

    info.frames = frames;
    info
}

#[derive(Debug, Clone, Copy)]
struct Column {
    fitted: Size,
    width: f64,
}

fn column_sizes<M: Measurable>(children: &[M], total_width: f64, scale: PixelScale) -> Vec<Column> {
    let mut remaining = children
        .iter()
        .fold(total_width, |width, child| width - child.margin().horizontal())
        .max(0.0);

    let declared = children.iter().any(|c| c.layout().weight > 0);
    let weight_of = |child: &M| -> u64 {
        if declared {
            u64::from(child.layout().weight)
        } else {
            1
        }
    };

    let mut columns = vec![
        Column {
            fitted: Size::ZERO,
            width: 0.0,
        };
        children.len()
    ];

    for (child, column) in children.iter().zip(columns.iter_mut()) {
        if weight_of(child) != 0 {
            continue;
        }
        let fitted = scale.ceil_size(child.measure(remaining));
        *column = Column {
            fitted,
            width: fitted.width,
        };
        remaining = (remaining - fitted.width).max(0.0);
    }

    let total_weight = children
        .iter()
        .map(weight_of)
        .fold(0_u64, u64::saturating_add);
    if total_weight == 0 {
        return columns;
    }

    let total_weight = total_weight as f64;
    let mut widths: Vec<f64> = children
        .iter()
        .map(|child| scale.floor(remaining * weight_of(child) as f64 / total_weight))
        .collect();

    let allocated: f64 = widths.iter().sum();
    let rounding = remaining - allocated;
    if rounding > 0.0 {
        if let Some(last) = children.iter().rposition(|child| weight_of(child) > 0) {
            widths[last] += rounding;
        }
    }

    for ((child, column), width) in children.iter().zip(columns.iter_mut()).zip(widths) {
        if weight_of(child) == 0 || width <= 0.0 {
            continue;
        }
        let measured = scale.ceil_size(child.measure(width));
        *column = Column {
            fitted: Size::new(measured.width.min(width), measured.height),
            width,
        };
    }

    columns
}

/// Translates every frame by one vertical offset chosen by `gravity`.
///
/// | Gravity          | Result                                            |
/// |------------------|---------------------------------------------------|
/// | `top` / `fill`   | topmost frame starts at `bounds.min_y`            |
/// | `middle`         | block from `min(bounds.min_y, top)` to the bottom edge is centered |
/// | `bottom`         | lowest frame ends at `bounds.max_y`               |
///
/// The centering offset is rounded down to whole points; relative spacing
/// between frames never changes.
///
/// # Examples
///
/// ```
/// use component_kit::domain::{Gravity, Rect};
/// use component_kit::layout::adjust_for_gravity;
///
/// let frames = [Rect::new(0.0, 10.0, 100.0, 40.0)];
/// let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let moved = adjust_for_gravity(&frames, Gravity::Middle, bounds);
/// assert_eq!(moved[0].y, 35.0);
/// ```
#[must_use]
pub fn adjust_for_gravity(frames: &[Rect], gravity: Gravity, bounds: Rect) -> Vec<Rect> {
    adjust_for_gravity_scaled(frames, gravity, bounds, PixelScale::ONE)
}

/// [`adjust_for_gravity`] with the centering offset rounded to `scale`.
#[must_use]
pub fn adjust_for_gravity_scaled(frames: &[Rect], gravity: Gravity, bounds: Rect, scale: PixelScale) -> Vec<Rect> {
    if frames.is_empty() {
        return Vec::new();
    }

    let min_y = frames.iter().map(Rect::min_y).fold(f64::INFINITY, f64::min);
    let max_y = frames.iter().map(Rect::max_y).fold(f64::NEG_INFINITY, f64::max);

    let shift = match gravity {
        Gravity::Top | Gravity::Fill => bounds.min_y() - min_y,
        Gravity::Middle => {
            let block_start = bounds.min_y().min(min_y);
            let block_height = (max_y - block_start).max(0.0);
            bounds.min_y() - block_start + scale.floor((bounds.height - block_height) / 2.0)
        }
        Gravity::Bottom => bounds.max_y() - max_y,
    };

    if shift == 0.0 {
        return frames.to_vec();
    }
    frames.iter().map(|frame| frame.offset(0.0, shift)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EdgeInsets, LayoutDescriptor};
    use crate::layout::FixedSize;

    fn bounds(width: f64) -> Rect {
        Rect::new(0.0, 0.0, width, 0.0)
    }

    fn spaced(height: f64) -> FixedSize {
        FixedSize::height(
            LayoutDescriptor::with_margin(EdgeInsets::new(4.0, 10.0, 6.0, 10.0)),
            height,
        )
    }

    fn sized(width: f64, height: f64, layout: LayoutDescriptor) -> FixedSize {
        FixedSize::new(layout, Size::new(width, height))
    }

    #[test]
    fn empty_child_collapses_without_margins() {
        let children = [spaced(20.0), spaced(0.0), spaced(20.0)];
        let frames = layout_vertical(&children, bounds(100.0), PixelScale::ONE);

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], Rect::new(4.0, 10.0, 90.0, 20.0));
        assert_eq!(frames[1], Rect::new(4.0, 40.0, 90.0, 0.0));
        assert_eq!(frames[2], Rect::new(4.0, 50.0, 90.0, 20.0));
    }

    #[test]
    fn heights_round_up_to_device_pixels() {
        let children = [FixedSize::height(LayoutDescriptor::default(), 10.2); 2];

        let frames = layout_vertical(&children, bounds(50.0), PixelScale::ONE);
        assert_eq!(frames[1].y, 11.0);

        let frames = layout_vertical(&children, bounds(50.0), PixelScale::new(2.0));
        assert_eq!(frames[0].height, 10.5);
        assert_eq!(frames[1].y, 10.5);
    }

    #[test]
    fn margins_wider_than_bounds_give_zero_width() {
        let children = [spaced(20.0)];
        let frames = layout_vertical(&children, bounds(5.0), PixelScale::ONE);
        assert_eq!(frames[0].width, 0.0);
    }

    #[test]
    fn layout_info_includes_trailing_margins() {
        let children = [spaced(20.0), spaced(0.0)];
        let info = vertical_layout_info(&children, Rect::new(10.0, 5.0, 100.0, 0.0), PixelScale::ONE);
        assert_eq!(info.max_y, 5.0 + 10.0 + 20.0 + 10.0);
        assert_eq!(info.max_x, 110.0);
        assert_eq!(info.content_size(Rect::new(10.0, 5.0, 100.0, 0.0)), Size::new(100.0, 40.0));

        let empty: [FixedSize; 0] = [];
        let info = vertical_layout_info(&empty, bounds(100.0), PixelScale::ONE);
        assert!(info.frames.is_empty());
        assert_eq!((info.max_x, info.max_y), (0.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "non-negative width")]
    fn negative_width_is_a_programmer_error() {
        let _ = layout_vertical(&[spaced(10.0)], bounds(-1.0), PixelScale::ONE);
    }

    #[test]
    #[should_panic(expected = "non-negative width")]
    fn negative_width_panics_in_rows_too() {
        let _ = layout_horizontal(&[spaced(10.0)], bounds(-1.0), PixelScale::ONE);
    }

    #[test]
    fn middle_gravity_centers_the_block() {
        let frames = [Rect::new(0.0, 10.0, 100.0, 40.0)];
        let moved = adjust_for_gravity(&frames, Gravity::Middle, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(moved[0].y - frames[0].y, 25.0);
        assert_eq!(moved[0].height, 40.0);
    }

    #[test]
    fn gravity_moves_every_frame_rigidly() {
        let frames = [Rect::new(0.0, 10.0, 50.0, 20.0), Rect::new(0.0, 40.0, 50.0, 10.0)];
        let area = Rect::new(0.0, 0.0, 50.0, 100.0);

        let bottom = adjust_for_gravity(&frames, Gravity::Bottom, area);
        assert_eq!(bottom[1].max_y(), 100.0);
        assert_eq!(bottom[1].y - bottom[0].y, 30.0);

        let top = adjust_for_gravity(&frames, Gravity::Top, area);
        assert_eq!(top[0].y, 0.0);
        assert_eq!(adjust_for_gravity(&frames, Gravity::Fill, area), top);

        assert!(adjust_for_gravity(&[], Gravity::Middle, area).is_empty());
    }

    #[test]
    fn middle_gravity_recenters_frames_above_bounds() {
        let frames = [Rect::new(0.0, -20.0, 10.0, 20.0)];
        let moved = adjust_for_gravity(&frames, Gravity::Middle, Rect::new(0.0, 0.0, 10.0, 100.0));
        assert_eq!(moved[0].y, 40.0);
    }

    #[test]
    fn unweighted_children_share_even_columns() {
        let layout = LayoutDescriptor::default();
        let children = [sized(500.0, 20.0, layout), sized(500.0, 30.0, layout), sized(500.0, 10.0, layout)];
        let info = layout_horizontal(&children, bounds(300.0), PixelScale::ONE);

        let xs: Vec<f64> = info.frames.iter().map(|f| f.x).collect();
        assert_eq!(xs, [0.0, 100.0, 200.0]);
        assert!(info.frames.iter().all(|f| f.width == 100.0));
        assert_eq!(info.max_y, 30.0);
        assert_eq!(info.max_x, 300.0);
    }

    #[test]
    fn narrow_children_follow_alignment_and_gravity() {
        let centered = LayoutDescriptor {
            alignment: HorizontalAlignment::Center,
            gravity: Gravity::Middle,
            ..LayoutDescriptor::default()
        };
        let right_bottom = LayoutDescriptor {
            alignment: HorizontalAlignment::Right,
            gravity: Gravity::Bottom,
            ..LayoutDescriptor::default()
        };
        let filled = LayoutDescriptor {
            alignment: HorizontalAlignment::Fill,
            gravity: Gravity::Fill,
            ..LayoutDescriptor::default()
        };
        let children = [
            sized(40.0, 10.0, centered),
            sized(40.0, 40.0, right_bottom),
            sized(40.0, 20.0, filled),
            sized(40.0, 20.0, right_bottom),
        ];
        let info = layout_horizontal(&children, bounds(400.0), PixelScale::ONE);

        assert_eq!(info.frames[0], Rect::new(30.0, 15.0, 40.0, 10.0));
        assert_eq!(info.frames[1], Rect::new(160.0, 0.0, 40.0, 40.0));
        assert_eq!(info.frames[2], Rect::new(200.0, 0.0, 100.0, 40.0));
        assert_eq!(info.frames[3], Rect::new(360.0, 20.0, 40.0, 20.0));
    }

    #[test]
    fn fixed_children_keep_their_width_beside_weighted_ones() {
        let fixed = LayoutDescriptor::default();
        let weighted = |weight| LayoutDescriptor {
            weight,
            alignment: HorizontalAlignment::Fill,
            ..LayoutDescriptor::default()
        };
        let children = [
            sized(16.0, 16.0, fixed),
            sized(1000.0, 20.0, weighted(2)),
            sized(1000.0, 20.0, weighted(1)),
        ];
        let info = layout_horizontal(&children, bounds(117.0), PixelScale::ONE);

        assert_eq!(info.frames[0].width, 16.0);
        assert_eq!(info.frames[1], Rect::new(16.0, 0.0, 67.0, 20.0));
        assert_eq!(info.frames[2], Rect::new(83.0, 0.0, 34.0, 20.0));
    }

    #[test]
    fn extreme_weights_still_split_the_row() {
        let heavy = LayoutDescriptor {
            weight: u32::MAX,
            alignment: HorizontalAlignment::Fill,
            ..LayoutDescriptor::default()
        };
        let children = [sized(1000.0, 20.0, heavy), sized(1000.0, 20.0, heavy)];
        let info = layout_horizontal(&children, bounds(300.0), PixelScale::ONE);

        assert_eq!(info.frames[0], Rect::new(0.0, 0.0, 150.0, 20.0));
        assert_eq!(info.frames[1], Rect::new(150.0, 0.0, 150.0, 20.0));
        assert_eq!(info.max_x, 300.0);
    }

    #[test]
    fn zero_sized_children_collapse_in_rows() {
        let layout = LayoutDescriptor::with_margin(EdgeInsets::uniform(5.0));
        let children = [sized(10.0, 0.0, layout), sized(10.0, 10.0, layout)];
        let info = layout_horizontal(&children, bounds(100.0), PixelScale::ONE);

        assert_eq!(info.frames[0], Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(info.frames[1].x, 5.0);
        assert_eq!(info.frames[1].y, 5.0);
        assert_eq!(info.max_y, 20.0);
    }
}
