//! Per-control style overrides.

use serde::{Deserialize, Serialize};

use super::cursor::CursorStyle;
use super::error::StyleValidationError;
use super::paint::{FillMode, FillStyle, StrokeStyle};
use super::resolved::ResolvedStyle;
use crate::theme::{active_theme, ControlCategory, Theme};

/// Optional visual attributes for one control.
///
/// Every attribute is independently optional. An absent attribute defers to
/// the theme: first the theme's style for this style's category, then the
/// theme's default style, then the built-in value.
///
/// The category tag is assigned by the owning control through
/// [`Stylable::adopt_style`](crate::Stylable::adopt_style); a freshly built
/// style belongs to [`ControlCategory::Default`].
///
/// Styles are plain values. Cloning one and changing the clone leaves the
/// original untouched.
///
/// # Example
///
/// ```rust
/// use controlstyle::{ControlStyle, Theme};
///
/// let theme = Theme::new().with_default(ControlStyle::new().padding(10));
/// let style = ControlStyle::new().font("12px Helvetica");
///
/// assert_eq!(style.resolved_font(&theme), "12px Helvetica");
/// assert_eq!(style.resolved_padding(&theme), 10);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlStyle {
    #[serde(skip)]
    category: ControlCategory,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_fill_mode: Option<FillMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_stroke_style: Option<StrokeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_fill_style: Option<FillStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_stroke_style: Option<StrokeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_fill_style: Option<FillStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_hover_fill_style: Option<FillStyle>,

    /// 0.0 is square, 0.5 is fully rounded. Not clamped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding_percentage: Option<f64>,
    /// Space between the border and the content. Not clamped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_cursor_style: Option<CursorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_cursor_style: Option<CursorStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels_display_enclosing_rect: Option<bool>,
}

impl ControlStyle {
    /// Creates a style with no attributes set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The category this style is looked up under.
    pub fn category(&self) -> ControlCategory {
        self.category
    }

    pub(crate) fn with_category(mut self, category: ControlCategory) -> Self {
        self.category = category;
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn text_fill_mode(mut self, mode: FillMode) -> Self {
        self.text_fill_mode = Some(mode);
        self
    }

    pub fn text_stroke_style(mut self, style: impl Into<StrokeStyle>) -> Self {
        self.text_stroke_style = Some(style.into());
        self
    }

    pub fn text_fill_style(mut self, style: impl Into<FillStyle>) -> Self {
        self.text_fill_style = Some(style.into());
        self
    }

    pub fn foreground_stroke_style(mut self, style: impl Into<StrokeStyle>) -> Self {
        self.foreground_stroke_style = Some(style.into());
        self
    }

    pub fn background_fill_style(mut self, style: impl Into<FillStyle>) -> Self {
        self.background_fill_style = Some(style.into());
        self
    }

    pub fn background_hover_fill_style(mut self, style: impl Into<FillStyle>) -> Self {
        self.background_hover_fill_style = Some(style.into());
        self
    }

    pub fn rounding_percentage(mut self, percentage: f64) -> Self {
        self.rounding_percentage = Some(percentage);
        self
    }

    pub fn padding(mut self, padding: i32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn normal_cursor_style(mut self, cursor: CursorStyle) -> Self {
        self.normal_cursor_style = Some(cursor);
        self
    }

    pub fn hover_cursor_style(mut self, cursor: CursorStyle) -> Self {
        self.hover_cursor_style = Some(cursor);
        self
    }

    pub fn labels_display_enclosing_rect(mut self, display: bool) -> Self {
        self.labels_display_enclosing_rect = Some(display);
        self
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.font.is_none()
            && self.text_fill_mode.is_none()
            && self.text_stroke_style.is_none()
            && self.text_fill_style.is_none()
            && self.foreground_stroke_style.is_none()
            && self.background_fill_style.is_none()
            && self.background_hover_fill_style.is_none()
            && self.rounding_percentage.is_none()
            && self.padding.is_none()
            && self.normal_cursor_style.is_none()
            && self.hover_cursor_style.is_none()
            && self.labels_display_enclosing_rect.is_none()
    }

    /// Checks the numeric attributes against their documented ranges.
    ///
    /// Out-of-range values are accepted everywhere else; this only reports
    /// them. Absent attributes always pass.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        if let Some(value) = self.rounding_percentage {
            if !(0.0..=0.5).contains(&value) {
                return Err(StyleValidationError::RoundingOutOfRange {
                    category: self.category,
                    value,
                });
            }
        }

        if let Some(value) = self.padding {
            if value < 0 {
                return Err(StyleValidationError::NegativePadding {
                    category: self.category,
                    value,
                });
            }
        }

        Ok(())
    }

    pub fn resolved_font(&self, theme: &Theme) -> String {
        self.font
            .clone()
            .unwrap_or_else(|| theme.font(self.category))
    }

    pub fn resolved_text_fill_mode(&self, theme: &Theme) -> FillMode {
        self.text_fill_mode
            .unwrap_or_else(|| theme.text_fill_mode(self.category))
    }

    pub fn resolved_text_stroke_style(&self, theme: &Theme) -> StrokeStyle {
        self.text_stroke_style
            .unwrap_or_else(|| theme.text_stroke_style(self.category))
    }

    pub fn resolved_text_fill_style(&self, theme: &Theme) -> FillStyle {
        self.text_fill_style
            .unwrap_or_else(|| theme.text_fill_style(self.category))
    }

    pub fn resolved_foreground_stroke_style(&self, theme: &Theme) -> StrokeStyle {
        self.foreground_stroke_style
            .unwrap_or_else(|| theme.foreground_stroke_style(self.category))
    }

    pub fn resolved_background_fill_style(&self, theme: &Theme) -> FillStyle {
        self.background_fill_style
            .unwrap_or_else(|| theme.background_fill_style(self.category))
    }

    pub fn resolved_background_hover_fill_style(&self, theme: &Theme) -> FillStyle {
        self.background_hover_fill_style
            .unwrap_or_else(|| theme.background_hover_fill_style(self.category))
    }

    pub fn resolved_rounding_percentage(&self, theme: &Theme) -> f64 {
        self.rounding_percentage
            .unwrap_or_else(|| theme.rounding_percentage(self.category))
    }

    pub fn resolved_padding(&self, theme: &Theme) -> i32 {
        self.padding
            .unwrap_or_else(|| theme.padding(self.category))
    }

    pub fn resolved_normal_cursor_style(&self, theme: &Theme) -> CursorStyle {
        self.normal_cursor_style
            .unwrap_or_else(|| theme.normal_cursor_style(self.category))
    }

    pub fn resolved_hover_cursor_style(&self, theme: &Theme) -> CursorStyle {
        self.hover_cursor_style
            .unwrap_or_else(|| theme.hover_cursor_style(self.category))
    }

    pub fn resolved_labels_display_enclosing_rect(&self, theme: &Theme) -> bool {
        self.labels_display_enclosing_rect
            .unwrap_or_else(|| theme.labels_display_enclosing_rect(self.category))
    }

    /// Resolves every attribute against `theme`.
    pub fn resolve(&self, theme: &Theme) -> ResolvedStyle {
        ResolvedStyle {
            font: self.resolved_font(theme),
            text_fill_mode: self.resolved_text_fill_mode(theme),
            text_stroke_style: self.resolved_text_stroke_style(theme),
            text_fill_style: self.resolved_text_fill_style(theme),
            foreground_stroke_style: self.resolved_foreground_stroke_style(theme),
            background_fill_style: self.resolved_background_fill_style(theme),
            background_hover_fill_style: self.resolved_background_hover_fill_style(theme),
            rounding_percentage: self.resolved_rounding_percentage(theme),
            padding: self.resolved_padding(theme),
            normal_cursor_style: self.resolved_normal_cursor_style(theme),
            hover_cursor_style: self.resolved_hover_cursor_style(theme),
            labels_display_enclosing_rect: self.resolved_labels_display_enclosing_rect(theme),
        }
    }

    /// Resolves every attribute against a snapshot of the active theme.
    pub fn resolve_active(&self) -> ResolvedStyle {
        self.resolve(&active_theme())
    }
}
