//! The measurement seam between the layout engine and whatever renders.

use crate::domain::{EdgeInsets, LayoutDescriptor, Size};

/// Something the layout engine can place.
///
/// `measure` returns the size the content needs when offered `max_width`
/// points of width. It must be pure: the same width always yields the same
/// size. Width may be less than `max_width`; height is unbounded. The engine
/// rounds the result up to whole device pixels, so implementations return
/// unrounded values.
pub trait Measurable {
    fn layout(&self) -> &LayoutDescriptor;

    fn margin(&self) -> EdgeInsets {
        self.layout().margin
    }

    fn measure(&self, max_width: f64) -> Size;
}

impl<M: Measurable + ?Sized> Measurable for &M {
    fn layout(&self) -> &LayoutDescriptor {
        (**self).layout()
    }

    fn measure(&self, max_width: f64) -> Size {
        (**self).measure(max_width)
    }
}

impl<M: Measurable + ?Sized> Measurable for Box<M> {
    fn layout(&self) -> &LayoutDescriptor {
        (**self).layout()
    }

    fn measure(&self, max_width: f64) -> Size {
        (**self).measure(max_width)
    }
}

/// A box of fixed intrinsic size; its width is capped at the offered width.
///
/// Useful for hosts that already know a child's size (images, native
/// widgets) and for exercising the engine.
///
/// # Examples
///
/// ```
/// use component_kit::domain::{LayoutDescriptor, Size};
/// use component_kit::layout::{FixedSize, Measurable};
///
/// let fixed = FixedSize::new(LayoutDescriptor::default(), Size::new(120.0, 20.0));
/// assert_eq!(fixed.measure(80.0), Size::new(80.0, 20.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSize {
    layout: LayoutDescriptor,
    size: Size,
}

impl FixedSize {
    #[must_use]
    pub const fn new(layout: LayoutDescriptor, size: Size) -> Self {
        Self { layout, size }
    }

    /// Fixed height, full available width.
    #[must_use]
    pub fn height(layout: LayoutDescriptor, height: f64) -> Self {
        Self::new(layout, Size::new(f64::INFINITY, height))
    }
}

impl Measurable for FixedSize {
    fn layout(&self) -> &LayoutDescriptor {
        &self.layout
    }

    fn measure(&self, max_width: f64) -> Size {
        Size::new(self.size.width.min(max_width.max(0.0)), self.size.height)
    }
}
