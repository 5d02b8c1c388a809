//! # controlstyle - Style resolution for GUI controls
//!
//! Controls ask for visual attributes (font, fill and stroke paint, padding,
//! corner rounding, cursors) without knowing where the value came from.
//! Each attribute resolves through the same chain:
//!
//! 1. The control's own [`ControlStyle`], if it sets the attribute
//! 2. The [`Theme`] style for the control's [`ControlCategory`]
//! 3. The theme's default style
//! 4. A built-in value (see [`ResolvedStyle::builtin`])
//!
//! Resolution is a pure lookup and never fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use controlstyle::{Color, ControlCategory, ControlStyle, Stylable, Theme};
//!
//! struct Button {
//!     style: ControlStyle,
//! }
//!
//! impl Stylable for Button {
//!     const CATEGORY: ControlCategory = ControlCategory::Button;
//!
//!     fn control_style(&self) -> &ControlStyle {
//!         &self.style
//!     }
//! }
//!
//! let theme = Theme::new()
//!     .with_default(ControlStyle::new().padding(10))
//!     .with_style(ControlCategory::Button, ControlStyle::new().background_fill_style(Color::BLACK));
//!
//! let button = Button {
//!     style: Button::adopt_style(ControlStyle::new().font("16px Helvetica")),
//! };
//!
//! let resolved = button.resolved_style(&theme);
//! assert_eq!(resolved.font, "16px Helvetica");
//! assert_eq!(resolved.padding, 10);
//! assert_eq!(resolved.background_fill_style.color, Color::BLACK);
//! assert_eq!(resolved.rounding_percentage, 0.20);
//! ```
//!
//! ## Active Theme
//!
//! Pass a `&Theme` wherever possible. Embedders that prefer one shared theme
//! can [`install_theme`] once and resolve with
//! [`ControlStyle::resolve_active`]; readers get an immutable snapshot, so
//! swapping the theme never exposes a partially built one.
//!
//! ## Configuration
//!
//! Themes can be built in code or parsed with [`Theme::from_yaml`] and
//! [`Theme::from_json`].

mod style;
mod theme;
mod util;

pub use style::{
    Color, ControlStyle, CursorStyle, FillMode, FillStyle, ParseError, ResolvedStyle,
    StrokeStyle, StyleValidationError, Stylable,
};
pub use theme::{
    active_theme, install_theme, reset_active_theme, ControlCategory, Theme, ThemeLoadError,
};
pub use util::{format_hex_rgba, parse_hex_rgba};
