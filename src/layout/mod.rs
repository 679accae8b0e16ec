//! Layout layer: frames for heterogeneous, variable-height children.
//!
//! The engine never knows what it is placing. Children are anything that
//! implements [`Measurable`]; the engine asks each one for its size at a
//! given width and turns the answers into frames. It owns no state and
//! holds on to nothing between calls, so re-running layout after a size
//! change is always safe.
//!
//! # Modules
//!
//! - [`engine`]: vertical, horizontal, and gravity algorithms
//! - [`measure`]: the [`Measurable`] trait and [`FixedSize`]

pub mod engine;
pub mod measure;

pub use engine::{
    adjust_for_gravity, adjust_for_gravity_scaled, layout_horizontal, layout_vertical,
    vertical_layout_info, LayoutInfo,
};
pub use measure::{FixedSize, Measurable};
