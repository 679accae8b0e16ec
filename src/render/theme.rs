//! Explicit styling parameters for measurement and drawing.
//!
//! Views never look styling up from a global; a [`Theme`] is handed to the
//! [`Renderer`](super::Renderer) at construction and read from there. Only
//! the metrics that change measured sizes live here, plus the handful of
//! colors a display list needs.
//!
//! # Built-in Themes
//!
//! - `default`: comfortable spacing (default)
//! - `compact`: tighter padding and line height
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [fonts]          # average glyph width as a fraction of the font size
//! light = 0.50
//! regular = 0.52
//! bold = 0.56
//! black = 0.60
//! line_height = 1.25
//!
//! [colors]
//! text = "#1f2933"
//! separator = "#e4e7eb"
//! button_primary = "#2f6fed"
//! button_secondary = "#e4e7eb"
//! button_title = "#ffffff"
//! button_text_title = "#2f6fed"
//!
//! [metrics]
//! button_padding_horizontal = 16.0
//! button_padding_vertical = 10.0
//! button_font_size = 15.0
//! separator_thickness = 1.0
//! separator_inset = 16.0
//! list_item_spacing = 12.0
//! list_item_line_spacing = 2.0
//! ```

use crate::domain::{ButtonStyle, Color, ComponentError, FontStyle, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Styling parameters consumed by views.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    pub fonts: FontMetrics,
    pub colors: ThemeColors,
    pub metrics: ThemeMetrics,
}

/// Approximate font geometry used by text measurement.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FontMetrics {
    pub light: f64,
    pub regular: f64,
    pub bold: f64,
    pub black: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Label text when the payload has no color override.
    pub text: Color,
    pub separator: Color,
    pub button_primary: Color,
    pub button_secondary: Color,
    /// Title on filled buttons.
    pub button_title: Color,
    /// Title on text-style buttons.
    pub button_text_title: Color,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeMetrics {
    pub button_padding_horizontal: f64,
    pub button_padding_vertical: f64,
    pub button_font_size: f64,
    pub separator_thickness: f64,
    /// Leading inset of `inset-line` separators.
    pub separator_inset: f64,
    /// Gap between the icon, the text column, and the value of a list item.
    pub list_item_spacing: f64,
    /// Gap between a list item's title and detail.
    pub list_item_line_spacing: f64,
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub const BUILT_IN: [&'static str; 2] = ["default", "compact"];

    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use component_kit::render::Theme;
    ///
    /// let theme = Theme::from_name("compact").unwrap();
    /// assert_eq!(theme.name, "compact");
    /// assert!(Theme::from_name("neon").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "default" => include_str!("../../themes/default.toml"),
            "compact" => include_str!("../../themes/compact.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Io`] if the file cannot be read and
    /// [`ComponentError::Theme`] if its contents are not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ComponentError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Average glyph width for `style` at `size` points.
    #[must_use]
    pub fn glyph_width(&self, style: FontStyle, size: f64) -> f64 {
        let factor = match style {
            FontStyle::Light => self.fonts.light,
            FontStyle::Regular => self.fonts.regular,
            FontStyle::Bold => self.fonts.bold,
            FontStyle::Black => self.fonts.black,
        };
        size * factor
    }

    #[must_use]
    pub fn line_height(&self, size: f64) -> f64 {
        size * self.fonts.line_height
    }

    /// Fill behind a button; `None` for text-style buttons.
    #[must_use]
    pub fn button_fill(&self, style: ButtonStyle) -> Option<Color> {
        match style {
            ButtonStyle::Primary => Some(self.colors.button_primary),
            ButtonStyle::Secondary => Some(self.colors.button_secondary),
            ButtonStyle::Text => None,
        }
    }

    #[must_use]
    pub fn button_title(&self, style: ButtonStyle) -> Color {
        match style {
            ButtonStyle::Primary => self.colors.button_title,
            ButtonStyle::Secondary => self.colors.text,
            ButtonStyle::Text => self.colors.button_text_title,
        }
    }
}

impl Default for Theme {
    /// Returns the `default` built-in theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("default").expect("Built-in default theme should always parse")
    }
}
