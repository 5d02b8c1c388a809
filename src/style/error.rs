//! Style validation and parse errors.

use thiserror::Error;

use crate::theme::ControlCategory;

/// Error returned when an opt-in style validation fails.
///
/// Resolution never produces these; they only come from
/// [`ControlStyle::validate`](crate::ControlStyle::validate) and
/// [`Theme::validate`](crate::Theme::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleValidationError {
    /// Rounding percentage outside `0.0..=0.5`
    #[error("{category} style has rounding percentage {value}, expected 0.0..=0.5")]
    RoundingOutOfRange { category: ControlCategory, value: f64 },
    /// Padding below zero
    #[error("{category} style has negative padding {value}")]
    NegativePadding { category: ControlCategory, value: i32 },
}

/// Error returned when a style value cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid color '{0}', expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
    #[error("unknown cursor style '{0}'")]
    UnknownCursor(String),
    #[error("unknown fill mode '{0}', expected 'fill' or 'stroke'")]
    UnknownFillMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_error_display() {
        let err = StyleValidationError::RoundingOutOfRange {
            category: ControlCategory::Button,
            value: 0.75,
        };
        let msg = err.to_string();
        assert!(msg.contains("button"));
        assert!(msg.contains("0.75"));
    }

    #[test]
    fn test_negative_padding_error_display() {
        let err = StyleValidationError::NegativePadding {
            category: ControlCategory::TextLabel,
            value: -4,
        };
        let msg = err.to_string();
        assert!(msg.contains("text_label"));
        assert!(msg.contains("-4"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidColor("#12".to_string());
        assert!(err.to_string().contains("#12"));
    }
}
