//! Paint descriptors handed to the rendering layer.
//!
//! These are plain values. Nothing here draws; the renderer interprets them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;
use crate::util::{format_hex_rgba, parse_hex_rgba};

/// An sRGB color with alpha.
///
/// Serialized as a hex string (`"#9FB4F2"`, or `"#9FB4F280"` with alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Creates an opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 0xFF)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hex_rgba((self.red, self.green, self.blue, self.alpha)))
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_rgba(s)
            .map(|(r, g, b, a)| Color::rgba(r, g, b, a))
            .ok_or_else(|| ParseError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Paint used to fill a shape or glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillStyle {
    pub color: Color,
}

impl FillStyle {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

/// Paint used to outline a shape or glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    #[serde(default = "StrokeStyle::default_line_width")]
    pub line_width: f64,
}

impl StrokeStyle {
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

    /// Creates a stroke with the default line width.
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            line_width: Self::DEFAULT_LINE_WIDTH,
        }
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    fn default_line_width() -> f64 {
        Self::DEFAULT_LINE_WIDTH
    }
}

impl From<Color> for StrokeStyle {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

/// How glyph outlines are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    #[default]
    Fill,
    Stroke,
}

impl FromStr for FillMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fill" => Ok(FillMode::Fill),
            "stroke" => Ok(FillMode::Stroke),
            _ => Err(ParseError::UnknownFillMode(s.to_string())),
        }
    }
}
