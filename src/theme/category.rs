//! Control categories used as theme lookup keys.

use std::fmt;

/// The kind of control a style belongs to.
///
/// A category is only a lookup key into a [`Theme`](super::Theme); it never
/// selects behavior. There is no inheritance between categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlCategory {
    #[default]
    Default,
    Button,
    Panel,
    TextLabel,
}

impl ControlCategory {
    pub const ALL: [ControlCategory; 4] = [
        ControlCategory::Default,
        ControlCategory::Button,
        ControlCategory::Panel,
        ControlCategory::TextLabel,
    ];

    /// Canonical snake_case name, as used in theme config keys.
    pub fn name(&self) -> &'static str {
        match self {
            ControlCategory::Default => "default",
            ControlCategory::Button => "button",
            ControlCategory::Panel => "panel",
            ControlCategory::TextLabel => "text_label",
        }
    }

    /// Looks up a category by name, case-insensitively.
    ///
    /// `-` and `_` are ignored, so `"text-label"`, `"text_label"` and
    /// `"TextLabel"` all match. Names that match no category resolve to
    /// [`ControlCategory::Default`].
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "default" => ControlCategory::Default,
            "button" => ControlCategory::Button,
            "panel" => ControlCategory::Panel,
            "textlabel" => ControlCategory::TextLabel,
            _ => {
                log::debug!("unknown control category '{}', using default", name);
                ControlCategory::Default
            }
        }
    }
}

impl fmt::Display for ControlCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
