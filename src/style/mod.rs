//! Style system for per-control overrides.
//!
//! This module provides the styling primitives:
//!
//! - [`ControlStyle`]: Optional attribute overrides for one control
//! - [`ResolvedStyle`]: Every attribute with a concrete value
//! - [`Stylable`]: Trait for controls that carry a style
//! - [`Color`], [`FillStyle`], [`StrokeStyle`], [`FillMode`], [`CursorStyle`]:
//!   Attribute value types
//! - [`StyleValidationError`], [`ParseError`]: Errors from validation and parsing
//!
//! An attribute left unset on a control's style is taken from the theme,
//! which falls back to its default style and then to the built-in value.

mod control_style;
mod cursor;
mod error;
mod paint;
mod resolved;
mod stylable;

pub use control_style::ControlStyle;
pub use cursor::CursorStyle;
pub use error::{ParseError, StyleValidationError};
pub use paint::{Color, FillMode, FillStyle, StrokeStyle};
pub use resolved::ResolvedStyle;
pub use stylable::Stylable;
