//! Render layer: typed components → measured views → draw commands.
//!
//! # Organization
//!
//! - [`theme`]: fonts, colors, and spacing loaded from TOML
//! - [`text`]: deterministic text measurement against theme font metrics
//! - [`view`]: [`Renderer`] and [`ComponentView`], binding each component to
//!   the layout engine
//! - [`display_list`]: the flat, serializable output of a render pass
//!
//! A render pass never fails. Everything that could go wrong was decided at
//! parse time; what remains is arithmetic on frames.

pub mod display_list;
pub mod text;
pub mod theme;
pub mod view;

pub use display_list::{DisplayList, DrawCommand, Primitive};
pub use text::{measure_text, TextMeasure, TextStyle};
pub use theme::{FontMetrics, Theme, ThemeColors, ThemeMetrics};
pub use view::{ComponentView, Renderable, Renderer};
