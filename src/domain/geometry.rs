//! Geometry value types shared by the layout engine and the view layer.
//!
//! All dimensions are `f64` points. Placement math rounds measured sizes up
//! to the surface's smallest addressable unit through [`PixelScale`].

use serde::{Deserialize, Serialize};

/// Offsets applied to the four edges of a rectangle.
///
/// Values are never negative; constructors clamp at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl EdgeInsets {
    /// All four edges set to zero.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Creates insets, clamping negative values to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use component_kit::domain::EdgeInsets;
    ///
    /// let insets = EdgeInsets::new(4.0, -2.0, 4.0, 8.0);
    /// assert_eq!(insets.top, 0.0);
    /// assert_eq!(insets.horizontal(), 8.0);
    /// ```
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: left.max(0.0),
            top: top.max(0.0),
            right: right.max(0.0),
            bottom: bottom.max(0.0),
        }
    }

    /// Same value on every edge.
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of left and right.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero (or below).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A point in the coordinate space of the render target.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at `origin` with the given width and unbounded height.
    ///
    /// Used for measurement passes where only the width constrains content.
    #[must_use]
    pub const fn unbounded(origin: Point, width: f64) -> Self {
        Self::new(origin.x, origin.y, width, f64::INFINITY)
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Shrinks the rectangle by `insets`, never below zero size.
    #[must_use]
    pub fn inset_by(&self, insets: EdgeInsets) -> Self {
        Self::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.horizontal()).max(0.0),
            (self.height - insets.vertical()).max(0.0),
        )
    }

    /// Same rectangle moved by `dx`, `dy`.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Number of device pixels per point on the rendering surface.
///
/// Measured sizes are rounded up to whole device pixels so that accumulating
/// fractional heights never leaves hairline gaps between siblings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelScale(f64);

impl PixelScale {
    /// One device pixel per point.
    pub const ONE: Self = Self(1.0);

    /// Creates a scale; non-finite or non-positive factors fall back to 1.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Self(factor)
        } else {
            Self::ONE
        }
    }

    #[must_use]
    pub const fn factor(self) -> f64 {
        self.0
    }

    /// Rounds `value` up to the next device pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use component_kit::domain::PixelScale;
    ///
    /// assert_eq!(PixelScale::new(2.0).ceil(10.2), 10.5);
    /// assert_eq!(PixelScale::ONE.ceil(10.2), 11.0);
    /// ```
    #[must_use]
    pub fn ceil(self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        (value * self.0).ceil() / self.0
    }

    /// Rounds `value` down to the previous device pixel.
    #[must_use]
    pub fn floor(self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        (value * self.0).floor() / self.0
    }

    /// Rounds both dimensions of `size` up.
    #[must_use]
    pub fn ceil_size(self, size: Size) -> Size {
        Size::new(self.ceil(size.width), self.ceil(size.height))
    }
}

impl Default for PixelScale {
    fn default() -> Self {
        Self::ONE
    }
}
