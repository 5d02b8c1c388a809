//! Pointer shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// Pointer shape, named after the CSS `cursor` keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    /// The platform's default arrow
    #[default]
    Default,
    /// Hand, used over links and buttons
    Pointer,
    Text,
    Wait,
    Progress,
    Help,
    Crosshair,
    Move,
    NotAllowed,
    Grab,
    Grabbing,
    EwResize,
    NsResize,
    NeswResize,
    NwseResize,
    None,
}

impl CursorStyle {
    pub const ALL: [CursorStyle; 16] = [
        CursorStyle::Default,
        CursorStyle::Pointer,
        CursorStyle::Text,
        CursorStyle::Wait,
        CursorStyle::Progress,
        CursorStyle::Help,
        CursorStyle::Crosshair,
        CursorStyle::Move,
        CursorStyle::NotAllowed,
        CursorStyle::Grab,
        CursorStyle::Grabbing,
        CursorStyle::EwResize,
        CursorStyle::NsResize,
        CursorStyle::NeswResize,
        CursorStyle::NwseResize,
        CursorStyle::None,
    ];

    /// The CSS keyword for this cursor.
    pub fn as_css(&self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Pointer => "pointer",
            CursorStyle::Text => "text",
            CursorStyle::Wait => "wait",
            CursorStyle::Progress => "progress",
            CursorStyle::Help => "help",
            CursorStyle::Crosshair => "crosshair",
            CursorStyle::Move => "move",
            CursorStyle::NotAllowed => "not-allowed",
            CursorStyle::Grab => "grab",
            CursorStyle::Grabbing => "grabbing",
            CursorStyle::EwResize => "ew-resize",
            CursorStyle::NsResize => "ns-resize",
            CursorStyle::NeswResize => "nesw-resize",
            CursorStyle::NwseResize => "nwse-resize",
            CursorStyle::None => "none",
        }
    }
}

impl fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for CursorStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|cursor| cursor.as_css() == wanted)
            .ok_or_else(|| ParseError::UnknownCursor(s.to_string()))
    }
}
