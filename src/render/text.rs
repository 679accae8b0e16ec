//! Text size estimation.
//!
//! There is no font rasterizer here. Every glyph is assumed to be the
//! theme's average glyph width for its weight, plus letter spacing, and
//! lines are broken greedily at whitespace. That is enough for layout to be
//! deterministic and for wrapped text to grow taller as the width shrinks.

use super::theme::Theme;
use crate::domain::{FontStyle, Label, Size};

/// Font parameters of one run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_style: FontStyle,
    pub size: f64,
    pub letter_spacing: f64,
}

impl TextStyle {
    #[must_use]
    pub fn of_label(label: &Label) -> Self {
        Self {
            font_style: label.font_style,
            size: label.size,
            letter_spacing: label.letter_spacing,
        }
    }
}

/// Result of measuring a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMeasure {
    pub size: Size,
    pub lines: usize,
}

impl TextMeasure {
    const EMPTY: Self = Self {
        size: Size::ZERO,
        lines: 0,
    };
}

/// Measures `text` wrapped to `max_width`.
///
/// Empty text, or no room at all, measures to zero. Explicit newlines start
/// new lines; a word wider than the line is broken between characters.
///
/// # Examples
///
/// ```
/// use component_kit::domain::Label;
/// use component_kit::render::{measure_text, TextStyle, Theme};
///
/// let theme = Theme::default();
/// let style = TextStyle::of_label(&Label::new("x"));
///
/// let wide = measure_text("one two three", &style, 1000.0, &theme);
/// let narrow = measure_text("one two three", &style, 40.0, &theme);
/// assert_eq!(wide.lines, 1);
/// assert!(narrow.lines > 1);
/// assert!(narrow.size.height > wide.size.height);
/// assert_eq!(measure_text("", &style, 1000.0, &theme).size.height, 0.0);
/// ```
#[must_use]
pub fn measure_text(text: &str, style: &TextStyle, max_width: f64, theme: &Theme) -> TextMeasure {
    let advance = (theme.glyph_width(style.font_style, style.size) + style.letter_spacing).max(0.0);
    if text.is_empty() || max_width <= 0.0 || advance <= 0.0 {
        return TextMeasure::EMPTY;
    }

    let per_line = (max_width / advance).floor().max(1.0);
    let mut lines = 0_usize;
    let mut widest = 0.0_f64;

    for paragraph in text.split('\n') {
        let mut line = 0.0_f64;
        let mut started = false;

        for word in paragraph.split_whitespace() {
            let chars = word.chars().count() as f64;
            let width = chars * advance;
            let joined = if started { line + advance + width } else { width };

            if joined <= max_width {
                line = joined;
                started = true;
                continue;
            }

            if started {
                widest = widest.max(line);
                lines += 1;
            }

            if width <= max_width {
                line = width;
            } else {
                let full_lines = ((chars - 1.0) / per_line).floor();
                lines += full_lines as usize;
                widest = widest.max(per_line * advance);
                line = (chars - full_lines * per_line) * advance;
            }
            started = true;
        }

        widest = widest.max(line);
        lines += 1;
    }

    TextMeasure {
        size: Size::new(widest.min(max_width), lines as f64 * theme.line_height(style.size)),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> TextStyle {
        TextStyle {
            font_style: FontStyle::Regular,
            size: 10.0,
            letter_spacing: 0.0,
        }
    }

    #[test]
    fn single_line_uses_glyph_widths() {
        let theme = Theme::default();
        let measured = measure_text("abcd", &style(), 100.0, &theme);
        assert_eq!(measured.lines, 1);
        assert!((measured.size.width - 4.0 * 5.2).abs() < 1e-9);
        assert_eq!(measured.size.height, 12.5);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let theme = Theme::default();
        // Five glyphs fit per 27-point line.
        let measured = measure_text("ab cd ef", &style(), 27.0, &theme);
        assert_eq!(measured.lines, 2);
    }

    #[test]
    fn long_words_break_between_characters() {
        let theme = Theme::default();
        let measured = measure_text("abcdefghijkl", &style(), 27.0, &theme);
        assert_eq!(measured.lines, 3);
        assert!(measured.size.width <= 27.0);
    }

    #[test]
    fn newlines_and_blank_paragraphs_count() {
        let theme = Theme::default();
        assert_eq!(measure_text("a\n\nb", &style(), 100.0, &theme).lines, 3);
    }

    #[test]
    fn nothing_to_draw_measures_zero() {
        let theme = Theme::default();
        assert_eq!(measure_text("", &style(), 100.0, &theme).size, Size::ZERO);
        assert_eq!(measure_text("abc", &style(), 0.0, &theme).size, Size::ZERO);
    }

    #[test]
    fn letter_spacing_widens_text() {
        let theme = Theme::default();
        let spaced = TextStyle {
            letter_spacing: 1.0,
            ..style()
        };
        let plain = measure_text("abcd", &style(), 100.0, &theme);
        let wide = measure_text("abcd", &spaced, 100.0, &theme);
        assert!(wide.size.width > plain.size.width);
    }
}
