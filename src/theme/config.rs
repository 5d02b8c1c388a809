//! Building themes from YAML or JSON text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::ControlCategory;
use super::theme::Theme;
use crate::style::ControlStyle;

/// Error returned when theme text cannot be parsed.
#[derive(Debug, Error)]
pub enum ThemeLoadError {
    #[error("invalid theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of a theme: one optional style per category key.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeConfig {
    #[serde(skip_serializing_if = "ControlStyle::is_empty")]
    default: ControlStyle,
    #[serde(skip_serializing_if = "ControlStyle::is_empty")]
    button: ControlStyle,
    #[serde(skip_serializing_if = "ControlStyle::is_empty")]
    panel: ControlStyle,
    #[serde(skip_serializing_if = "ControlStyle::is_empty")]
    text_label: ControlStyle,
}

impl From<ThemeConfig> for Theme {
    fn from(config: ThemeConfig) -> Self {
        Theme::new()
            .with_style(ControlCategory::Default, config.default)
            .with_style(ControlCategory::Button, config.button)
            .with_style(ControlCategory::Panel, config.panel)
            .with_style(ControlCategory::TextLabel, config.text_label)
    }
}

impl From<&Theme> for ThemeConfig {
    fn from(theme: &Theme) -> Self {
        Self {
            default: theme.style(ControlCategory::Default).clone(),
            button: theme.style(ControlCategory::Button).clone(),
            panel: theme.style(ControlCategory::Panel).clone(),
            text_label: theme.style(ControlCategory::TextLabel).clone(),
        }
    }
}

impl Theme {
    /// Parses a theme from YAML.
    ///
    /// Top-level keys are `default`, `button`, `panel` and `text_label`,
    /// all optional. Colors are hex strings and cursors are CSS keywords.
    ///
    /// # Example
    ///
    /// ```rust
    /// use controlstyle::{ControlCategory, Theme};
    ///
    /// let theme = Theme::from_yaml(r##"
    /// default:
    ///   padding: 10
    /// button:
    ///   padding: 3
    ///   hover_cursor_style: grab
    ///   background_fill_style:
    ///     color: "#102030"
    /// "##).unwrap();
    ///
    /// assert_eq!(theme.padding(ControlCategory::Button), 3);
    /// assert_eq!(theme.padding(ControlCategory::Panel), 10);
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ThemeLoadError> {
        let config: ThemeConfig = serde_yaml::from_str(source)?;
        log::debug!("loaded theme from YAML");
        Ok(config.into())
    }

    /// Parses a theme from JSON, with the same keys as [`Theme::from_yaml`].
    pub fn from_json(source: &str) -> Result<Self, ThemeLoadError> {
        let config: ThemeConfig = serde_json::from_str(source)?;
        log::debug!("loaded theme from JSON");
        Ok(config.into())
    }

    /// Writes the theme as YAML, omitting unset attributes and empty styles.
    pub fn to_yaml(&self) -> Result<String, ThemeLoadError> {
        Ok(serde_yaml::to_string(&ThemeConfig::from(self))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, CursorStyle, FillMode, StrokeStyle};

    #[test]
    fn test_from_yaml_empty_document() {
        let theme = Theme::from_yaml("{}").unwrap();
        assert_eq!(theme.padding(ControlCategory::Panel), 5);
    }

    #[test]
    fn test_from_yaml_full_style() {
        let theme = Theme::from_yaml(
            r##"
text_label:
  font: "14px Helvetica"
  text_fill_mode: stroke
  text_stroke_style:
    color: "#FF0000"
    line_width: 2.0
  rounding_percentage: 0.1
  normal_cursor_style: text
  labels_display_enclosing_rect: true
"##,
        )
        .unwrap();

        let label = ControlCategory::TextLabel;
        assert_eq!(theme.font(label), "14px Helvetica");
        assert_eq!(theme.text_fill_mode(label), FillMode::Stroke);
        assert_eq!(
            theme.text_stroke_style(label),
            StrokeStyle::new(Color::rgb(255, 0, 0)).with_line_width(2.0)
        );
        assert_eq!(theme.rounding_percentage(label), 0.1);
        assert_eq!(theme.normal_cursor_style(label), CursorStyle::Text);
        assert!(theme.labels_display_enclosing_rect(label));
        assert!(!theme.labels_display_enclosing_rect(ControlCategory::Button));
    }

    #[test]
    fn test_loaded_styles_are_tagged() {
        let theme = Theme::from_yaml("panel:\n  padding: 2\n").unwrap();
        assert_eq!(theme.style(ControlCategory::Panel).category(), ControlCategory::Panel);
    }

    #[test]
    fn test_from_yaml_unknown_category_key() {
        assert!(Theme::from_yaml("slider:\n  padding: 2\n").is_err());
    }

    #[test]
    fn test_from_yaml_bad_color() {
        let err = Theme::from_yaml("default:\n  text_fill_style:\n    color: red\n").unwrap_err();
        assert!(err.to_string().contains("red"));
    }

    #[test]
    fn test_from_yaml_signed_color_channels() {
        let err = Theme::from_yaml("default:\n  text_fill_style:\n    color: \"+1+2+3\"\n")
            .unwrap_err();
        assert!(err.to_string().contains("+1+2+3"));
    }

    #[test]
    fn test_from_json() {
        let theme = Theme::from_json(r#"{ "button": { "hover_cursor_style": "not-allowed" } }"#)
            .unwrap();
        assert_eq!(
            theme.hover_cursor_style(ControlCategory::Button),
            CursorStyle::NotAllowed
        );
        assert_eq!(
            theme.hover_cursor_style(ControlCategory::Panel),
            CursorStyle::Pointer
        );
    }

    #[test]
    fn test_from_json_syntax_error() {
        let err = Theme::from_json("{").unwrap_err();
        assert!(matches!(err, ThemeLoadError::Json(_)));
    }

    #[test]
    fn test_to_yaml_reloads() {
        let theme = Theme::new()
            .with_default(ControlStyle::new().padding(9))
            .with_style(ControlCategory::Button, ControlStyle::new().font("Courier"));

        let text = theme.to_yaml().unwrap();
        assert!(!text.contains("panel"));

        let reloaded = Theme::from_yaml(&text).unwrap();
        assert_eq!(reloaded.padding(ControlCategory::Panel), 9);
        assert_eq!(reloaded.font(ControlCategory::Button), "Courier");
    }
}
