//! The trait implemented by controls that carry a [`ControlStyle`].

use super::control_style::ControlStyle;
use super::resolved::ResolvedStyle;
use crate::theme::{ControlCategory, Theme};

/// A control that exposes a style.
///
/// Each concrete control type names its category once. Styles handed to the
/// control go through [`Stylable::adopt_style`] so their lookups use that
/// category.
///
/// # Example
///
/// ```rust
/// use controlstyle::{ControlCategory, ControlStyle, Stylable, Theme};
///
/// struct Button {
///     style: ControlStyle,
/// }
///
/// impl Button {
///     fn new(style: ControlStyle) -> Self {
///         Self { style: Self::adopt_style(style) }
///     }
/// }
///
/// impl Stylable for Button {
///     const CATEGORY: ControlCategory = ControlCategory::Button;
///
///     fn control_style(&self) -> &ControlStyle {
///         &self.style
///     }
/// }
///
/// let theme = Theme::new().with_style(ControlCategory::Button, ControlStyle::new().padding(3));
/// let button = Button::new(ControlStyle::new());
/// assert_eq!(button.resolved_style(&theme).padding, 3);
/// ```
pub trait Stylable {
    const CATEGORY: ControlCategory;

    fn control_style(&self) -> &ControlStyle;

    /// Tags `style` with this control's category.
    fn adopt_style(style: ControlStyle) -> ControlStyle
    where
        Self: Sized,
    {
        style.with_category(Self::CATEGORY)
    }

    fn resolved_style(&self, theme: &Theme) -> ResolvedStyle {
        self.control_style().resolve(theme)
    }

    /// Resolves against a snapshot of the active theme.
    fn resolved_style_active(&self) -> ResolvedStyle {
        self.control_style().resolve_active()
    }
}
