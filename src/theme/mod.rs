//! Theme system for category defaults.
//!
//! This module provides:
//!
//! - [`Theme`]: One style per control category plus a default style
//! - [`ControlCategory`]: The closed set of lookup keys
//! - [`active_theme`] / [`install_theme`]: The process-wide theme slot
//! - [`ThemeLoadError`]: Errors from loading themes out of YAML or JSON

mod active;
mod category;
mod config;
#[allow(clippy::module_inception)]
mod theme;

pub use active::{active_theme, install_theme, reset_active_theme};
pub use category::ControlCategory;
pub use config::ThemeLoadError;
pub use theme::Theme;
