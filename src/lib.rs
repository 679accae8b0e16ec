//! Component Kit: server-driven UI component trees.
//!
//! A chat client receives a JSON description of a card or panel, turns it
//! into a typed component tree, and lays that tree out into frames:
//! - Tolerant parsing: malformed subtrees are dropped with a diagnostic, never
//!   an error, so one bad node cannot take down a whole message
//! - Two schema generations accepted side by side
//! - A deterministic, pure frame layout engine with pixel rounding
//! - A render pass producing a flat, serializable display list
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Inspector CLI (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Pipeline (lib.rs)                                  │  ← Config, theme
//! │  parse → layout → render                            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Schema Layer  │   │ Layout Layer  │   │ Render Layer  │
//! │ (schema/)     │   │ (layout/)     │   │ (render/)     │
//! │ - Factory     │   │ - Measurable  │   │ - Views       │
//! │ - Registry    │   │ - Vertical    │   │ - Theming     │
//! │ - Parsers     │   │ - Horizontal  │   │ - Text        │
//! │               │   │ - Gravity     │   │ - Display list│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Component tree, layout descriptor, geometry      │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Diagnostics (diagnostics/)                         │
//! │  - Sink trait for parse warnings                    │
//! │  - tracing-subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Component tree, layout descriptor, geometry, errors
//! - [`schema`]: JSON → component tree
//! - [`layout`]: Frame layout engine
//! - [`render`]: Views, themes, and display lists
//! - [`diagnostics`]: Parse diagnostics and tracing setup
//!
//! # Configuration
//!
//! Configuration comes from a TOML file or a string map:
//!
//! ```toml
//! max_depth = 32
//! display_scale = 2.0
//! theme = "compact"
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use component_kit::{initialize, Config};
//! use serde_json::json;
//!
//! let pipeline = initialize(&Config::default());
//!
//! let payload = json!({
//!     "type": "stack_view",
//!     "content": {
//!         "items": [
//!             {"type": "label", "content": {"id": "greeting", "text": "Hi"}},
//!             {"type": "label", "content": {"text": ""}}
//!         ]
//!     }
//! });
//!
//! let root = pipeline.parse(&payload).expect("valid payload");
//! let list = pipeline.render(&root, 320.0);
//! assert!(list.frame_of("greeting").is_some());
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod domain;
pub mod layout;
pub mod render;
pub mod schema;

pub use domain::{Component, ComponentError, ComponentKind, ComponentType, Result};
pub use layout::LayoutInfo;
pub use render::{DisplayList, Renderer, Theme};
pub use schema::{parse_component, ComponentFactory};

use domain::{PixelScale, Rect};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Pipeline configuration.
///
/// # Example
///
/// ```toml
/// max_depth = 64
/// display_scale = 3.0
/// theme_file = "/path/to/theme.toml"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deepest nesting the factory accepts; the root is depth 1. Default: 64
    pub max_depth: usize,

    /// Device pixels per point, used to round measured heights. Default: 1.0
    pub display_scale: f64,

    /// Built-in theme name to use.
    ///
    /// Options: `default`, `compact`. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`render::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for the inspector's subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: ComponentFactory::DEFAULT_MAX_DEPTH,
            display_scale: 1.0,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map, as handed over by a host app.
    ///
    /// # Parsing Rules
    ///
    /// - `max_depth`: String → `usize` (falls back to 64 on parse error or 0)
    /// - `display_scale`: String → `f64` (falls back to 1.0 unless finite and positive)
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use component_kit::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("max_depth".to_string(), "12".to_string());
    /// map.insert("display_scale".to_string(), "abc".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.max_depth, 12);
    /// assert_eq!(config.display_scale, 1.0);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let max_depth = config
            .get("max_depth")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&depth| depth > 0)
            .unwrap_or(defaults.max_depth);

        let display_scale = config
            .get("display_scale")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|scale| scale.is_finite() && *scale > 0.0)
            .unwrap_or(defaults.display_scale);

        Self {
            max_depth,
            display_scale,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Loads configuration from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Io`] if the file cannot be read and
    /// [`ComponentError::Config`] if it is not valid TOML for this struct.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ComponentError::Config(format!("Failed to parse config TOML: {e}")))
    }

    fn theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(theme_file).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Parse, layout, and render with one factory and one renderer.
///
/// Immutable once built and `Send + Sync`, so a host can share it across
/// threads and re-run layout whenever the available width changes.
#[derive(Debug, Clone)]
pub struct Pipeline {
    factory: ComponentFactory,
    renderer: Renderer,
}

impl Pipeline {
    #[must_use]
    pub const fn new(factory: ComponentFactory, renderer: Renderer) -> Self {
        Self { factory, renderer }
    }

    #[must_use]
    pub const fn factory(&self) -> &ComponentFactory {
        &self.factory
    }

    #[must_use]
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Parses a component payload; malformed payloads yield `None`.
    #[must_use]
    pub fn parse(&self, json: &Value) -> Option<Component> {
        self.factory.parse(Some(json))
    }

    /// Decodes and parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Json`] if `text` is not JSON at all.
    pub fn parse_str(&self, text: &str) -> Result<Option<Component>> {
        self.factory.parse_str(text)
    }

    /// Frames of `root` in a column `width` points wide.
    ///
    /// # Panics
    ///
    /// Panics if `width` is negative.
    #[must_use]
    pub fn layout(&self, root: &Component, width: f64) -> LayoutInfo {
        self.renderer.layout(root, width)
    }

    /// Renders `root` into a display list at `width`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is negative.
    #[must_use]
    pub fn render(&self, root: &Component, width: f64) -> DisplayList {
        self.renderer.render(root, width)
    }

    /// Renders `root` inside `viewport`, honoring the root's gravity.
    ///
    /// # Panics
    ///
    /// Panics if `viewport.width` is negative.
    #[must_use]
    pub fn render_in(&self, root: &Component, viewport: Rect) -> DisplayList {
        self.renderer.render_in(root, viewport)
    }

    /// Parses `text` and renders it; a payload that parses to nothing renders
    /// to an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Json`] if `text` is not JSON.
    ///
    /// # Panics
    ///
    /// Panics if `width` is negative.
    pub fn render_json(&self, text: &str, width: f64) -> Result<DisplayList> {
        Ok(self
            .parse_str(text)?
            .map(|root| self.render(&root, width))
            .unwrap_or_default())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        initialize(&Config::default())
    }
}

/// Builds a [`Pipeline`] from configuration.
///
/// The theme is resolved from `theme_file`, then `theme`, then the built-in
/// default; a theme that fails to load logs a warning and falls back.
///
/// # Example
///
/// ```rust
/// use component_kit::{initialize, Config};
///
/// let config = Config {
///     theme_name: Some("compact".to_string()),
///     ..Default::default()
/// };
///
/// let pipeline = initialize(&config);
/// assert_eq!(pipeline.renderer().theme().name, "compact");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> Pipeline {
    tracing::debug!(max_depth = config.max_depth, scale = config.display_scale, "initializing pipeline");

    let factory = ComponentFactory::new().with_max_depth(config.max_depth);
    let renderer = Renderer::new(config.theme(), PixelScale::new(config.display_scale));

    Pipeline::new(factory, renderer)
}
