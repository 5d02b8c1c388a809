//! The process-wide active theme.
//!
//! Passing a [`Theme`] explicitly is the primary API. The active slot exists
//! for embedders that want one shared theme without threading a reference
//! through every control.

use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};

use super::theme::Theme;

static ACTIVE_THEME: Lazy<RwLock<Arc<Theme>>> =
    Lazy::new(|| RwLock::new(Arc::new(Theme::default())));

/// Returns a snapshot of the active theme.
///
/// The snapshot is unaffected by later calls to [`install_theme`], so a
/// resolution that started against it never sees a half-replaced theme.
pub fn active_theme() -> Arc<Theme> {
    let guard = ACTIVE_THEME.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Replaces the active theme, returning the previous one.
///
/// An invalid theme is still installed; the validation failure is logged.
///
/// # Example
///
/// ```rust
/// use controlstyle::{active_theme, install_theme, ControlCategory, ControlStyle, Theme};
///
/// install_theme(Theme::new().with_default(ControlStyle::new().padding(12)));
/// assert_eq!(active_theme().padding(ControlCategory::Button), 12);
/// ```
pub fn install_theme(theme: Theme) -> Arc<Theme> {
    if let Err(err) = theme.validate() {
        log::warn!("installing theme with out-of-range values: {}", err);
    }

    let mut guard = ACTIVE_THEME.write().unwrap_or_else(PoisonError::into_inner);
    log::debug!("installing active theme");
    std::mem::replace(&mut *guard, Arc::new(theme))
}

/// Restores the built-in theme, returning the previous one.
pub fn reset_active_theme() -> Arc<Theme> {
    install_theme(Theme::default())
}
