//! Fully resolved styles and the built-in fallback values.

use once_cell::sync::Lazy;

use super::cursor::CursorStyle;
use super::paint::{Color, FillMode, FillStyle, StrokeStyle};

/// Every style attribute with a concrete value.
///
/// Produced by [`ControlStyle::resolve`](crate::ControlStyle::resolve) and
/// [`Theme::resolve_all`](crate::Theme::resolve_all).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font: String,
    pub text_fill_mode: FillMode,
    pub text_stroke_style: StrokeStyle,
    pub text_fill_style: FillStyle,
    pub foreground_stroke_style: StrokeStyle,
    pub background_fill_style: FillStyle,
    pub background_hover_fill_style: FillStyle,
    pub rounding_percentage: f64,
    pub padding: i32,
    pub normal_cursor_style: CursorStyle,
    pub hover_cursor_style: CursorStyle,
    pub labels_display_enclosing_rect: bool,
}

impl ResolvedStyle {
    /// The values used when neither a category style nor the theme's
    /// default style sets an attribute.
    pub fn builtin() -> &'static ResolvedStyle {
        &BUILTIN
    }
}

static BUILTIN: Lazy<ResolvedStyle> = Lazy::new(|| ResolvedStyle {
    font: "20px Arial".to_string(),
    text_fill_mode: FillMode::Fill,
    text_stroke_style: StrokeStyle::new(Color::BLACK),
    text_fill_style: FillStyle::new(Color::WHITE),
    foreground_stroke_style: StrokeStyle::new(Color::rgb(0x9F, 0xB4, 0xF2)),
    background_fill_style: FillStyle::new(Color::rgb(0x67, 0x85, 0xB4)),
    background_hover_fill_style: FillStyle::new(Color::rgb(0x77, 0x95, 0xD4)),
    rounding_percentage: 0.20,
    padding: 5,
    normal_cursor_style: CursorStyle::Default,
    hover_cursor_style: CursorStyle::Pointer,
    labels_display_enclosing_rect: false,
});
