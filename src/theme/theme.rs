//! Theme struct holding one style per control category.

use crate::style::{
    ControlStyle, CursorStyle, FillMode, FillStyle, ResolvedStyle, StrokeStyle,
    StyleValidationError,
};

use super::category::ControlCategory;

/// Category defaults used when a control's own style leaves an attribute
/// unset.
///
/// Each attribute is resolved on its own: the style registered for the
/// category, then the theme's default style, then the built-in value. A
/// category style that only sets `font` still gets every other attribute
/// from the default style or the built-ins.
///
/// Themes are replaced wholesale. Build a new one to change policy.
///
/// # Example
///
/// ```rust
/// use controlstyle::{ControlCategory, ControlStyle, Theme};
///
/// let theme = Theme::new()
///     .with_default(ControlStyle::new().padding(10))
///     .with_style(ControlCategory::Button, ControlStyle::new().padding(3));
///
/// assert_eq!(theme.padding(ControlCategory::Button), 3);
/// assert_eq!(theme.padding(ControlCategory::Panel), 10);
/// assert_eq!(theme.font(ControlCategory::Panel), "20px Arial");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    default: ControlStyle,
    button: ControlStyle,
    panel: ControlStyle,
    text_label: ControlStyle,
}

impl Theme {
    /// Creates a theme with no styles set, so every attribute resolves to
    /// its built-in value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style for `category`, returning an updated theme for chaining.
    ///
    /// Setting [`ControlCategory::Default`] replaces the default style.
    pub fn with_style(mut self, category: ControlCategory, style: ControlStyle) -> Self {
        let style = style.with_category(category);
        match category {
            ControlCategory::Default => self.default = style,
            ControlCategory::Button => self.button = style,
            ControlCategory::Panel => self.panel = style,
            ControlCategory::TextLabel => self.text_label = style,
        }
        self
    }

    /// Sets the default style, consulted for any category that leaves an
    /// attribute unset.
    pub fn with_default(self, style: ControlStyle) -> Self {
        self.with_style(ControlCategory::Default, style)
    }

    /// Returns the style registered for `category`.
    pub fn style(&self, category: ControlCategory) -> &ControlStyle {
        match category {
            ControlCategory::Default => &self.default,
            ControlCategory::Button => &self.button,
            ControlCategory::Panel => &self.panel,
            ControlCategory::TextLabel => &self.text_label,
        }
    }

    /// Returns the default style.
    pub fn default_style(&self) -> &ControlStyle {
        &self.default
    }

    /// Resolves one attribute for `category`.
    ///
    /// `select` reads the attribute from a style; `builtin` reads it from
    /// the built-in values. The first present value in category style,
    /// default style, built-ins order wins.
    ///
    /// ```rust
    /// use controlstyle::{ControlCategory, ControlStyle, Theme};
    ///
    /// let theme = Theme::new().with_default(ControlStyle::new().padding(8));
    /// let padding = theme.resolve(ControlCategory::Panel, |s| s.padding.as_ref(), |b| &b.padding);
    /// assert_eq!(padding, 8);
    /// ```
    pub fn resolve<T: Clone>(
        &self,
        category: ControlCategory,
        select: impl Fn(&ControlStyle) -> Option<&T>,
        builtin: impl FnOnce(&ResolvedStyle) -> &T,
    ) -> T {
        select(self.style(category))
            .or_else(|| select(&self.default))
            .unwrap_or_else(|| builtin(ResolvedStyle::builtin()))
            .clone()
    }

    pub fn font(&self, category: ControlCategory) -> String {
        self.resolve(category, |s| s.font.as_ref(), |b| &b.font)
    }

    pub fn text_fill_mode(&self, category: ControlCategory) -> FillMode {
        self.resolve(category, |s| s.text_fill_mode.as_ref(), |b| &b.text_fill_mode)
    }

    pub fn text_stroke_style(&self, category: ControlCategory) -> StrokeStyle {
        self.resolve(
            category,
            |s| s.text_stroke_style.as_ref(),
            |b| &b.text_stroke_style,
        )
    }

    pub fn text_fill_style(&self, category: ControlCategory) -> FillStyle {
        self.resolve(category, |s| s.text_fill_style.as_ref(), |b| &b.text_fill_style)
    }

    pub fn foreground_stroke_style(&self, category: ControlCategory) -> StrokeStyle {
        self.resolve(
            category,
            |s| s.foreground_stroke_style.as_ref(),
            |b| &b.foreground_stroke_style,
        )
    }

    pub fn background_fill_style(&self, category: ControlCategory) -> FillStyle {
        self.resolve(
            category,
            |s| s.background_fill_style.as_ref(),
            |b| &b.background_fill_style,
        )
    }

    pub fn background_hover_fill_style(&self, category: ControlCategory) -> FillStyle {
        self.resolve(
            category,
            |s| s.background_hover_fill_style.as_ref(),
            |b| &b.background_hover_fill_style,
        )
    }

    pub fn rounding_percentage(&self, category: ControlCategory) -> f64 {
        self.resolve(
            category,
            |s| s.rounding_percentage.as_ref(),
            |b| &b.rounding_percentage,
        )
    }

    pub fn padding(&self, category: ControlCategory) -> i32 {
        self.resolve(category, |s| s.padding.as_ref(), |b| &b.padding)
    }

    pub fn normal_cursor_style(&self, category: ControlCategory) -> CursorStyle {
        self.resolve(
            category,
            |s| s.normal_cursor_style.as_ref(),
            |b| &b.normal_cursor_style,
        )
    }

    pub fn hover_cursor_style(&self, category: ControlCategory) -> CursorStyle {
        self.resolve(
            category,
            |s| s.hover_cursor_style.as_ref(),
            |b| &b.hover_cursor_style,
        )
    }

    pub fn labels_display_enclosing_rect(&self, category: ControlCategory) -> bool {
        self.resolve(
            category,
            |s| s.labels_display_enclosing_rect.as_ref(),
            |b| &b.labels_display_enclosing_rect,
        )
    }

    /// Resolves every attribute for `category`, as seen by a control with
    /// an empty style.
    pub fn resolve_all(&self, category: ControlCategory) -> ResolvedStyle {
        ControlStyle::new().with_category(category).resolve(self)
    }

    /// Validates the numeric ranges of every stored style.
    ///
    /// Resolution does not call this; out-of-range values still resolve.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        ControlCategory::ALL
            .iter()
            .try_for_each(|category| self.style(*category).validate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_theme_default_is_empty() {
        let theme = Theme::default();
        for category in ControlCategory::ALL {
            assert!(theme.style(category).is_empty());
        }
    }

    #[test]
    fn test_no_overrides_uses_builtin() {
        let theme = Theme::new();
        assert_eq!(theme.padding(ControlCategory::Button), 5);
        assert_eq!(theme.font(ControlCategory::TextLabel), "20px Arial");
        assert_eq!(theme.resolve_all(ControlCategory::Panel), *ResolvedStyle::builtin());
    }

    #[test]
    fn test_default_style_beats_builtin() {
        let theme = Theme::new().with_default(ControlStyle::new().padding(10));
        assert_eq!(theme.padding(ControlCategory::Button), 10);
    }

    #[test]
    fn test_category_style_beats_default() {
        let theme = Theme::new()
            .with_default(ControlStyle::new().padding(10))
            .with_style(ControlCategory::Button, ControlStyle::new().padding(3));

        assert_eq!(theme.padding(ControlCategory::Button), 3);
        assert_eq!(theme.padding(ControlCategory::Panel), 10);
        assert_eq!(theme.padding(ControlCategory::Default), 10);
    }

    #[test]
    fn test_attributes_resolve_independently() {
        let theme = Theme::new()
            .with_default(ControlStyle::new().text_fill_style(Color::BLACK))
            .with_style(ControlCategory::Panel, ControlStyle::new().font("Courier"));

        assert_eq!(theme.font(ControlCategory::Panel), "Courier");
        assert_eq!(
            theme.text_fill_style(ControlCategory::Panel),
            FillStyle::new(Color::BLACK)
        );
        assert_eq!(theme.rounding_percentage(ControlCategory::Panel), 0.20);
    }

    #[test]
    fn test_categories_are_isolated() {
        let theme = Theme::new().with_style(
            ControlCategory::Button,
            ControlStyle::new().normal_cursor_style(CursorStyle::Move),
        );

        assert_eq!(theme.normal_cursor_style(ControlCategory::Button), CursorStyle::Move);
        assert_eq!(theme.normal_cursor_style(ControlCategory::Panel), CursorStyle::Default);
        assert_eq!(theme.normal_cursor_style(ControlCategory::TextLabel), CursorStyle::Default);
        assert_eq!(theme.normal_cursor_style(ControlCategory::Default), CursorStyle::Default);
    }

    #[test]
    fn test_with_style_tags_category() {
        let theme = Theme::new().with_style(ControlCategory::Panel, ControlStyle::new());
        assert_eq!(theme.style(ControlCategory::Panel).category(), ControlCategory::Panel);
    }

    #[test]
    fn test_with_style_replaces_wholesale() {
        let theme = Theme::new()
            .with_style(ControlCategory::Button, ControlStyle::new().padding(1).font("A"))
            .with_style(ControlCategory::Button, ControlStyle::new().padding(2));

        assert_eq!(theme.padding(ControlCategory::Button), 2);
        assert_eq!(theme.font(ControlCategory::Button), "20px Arial");
    }

    #[test]
    fn test_theme_validate_valid() {
        let theme = Theme::new().with_default(ControlStyle::new().rounding_percentage(0.5));
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_theme_validate_invalid() {
        let theme = Theme::new().with_style(ControlCategory::Panel, ControlStyle::new().padding(-2));
        assert_eq!(
            theme.validate(),
            Err(StyleValidationError::NegativePadding {
                category: ControlCategory::Panel,
                value: -2,
            })
        );
    }
}
