//! Runtime configuration.
//!
//! The operating window is fixed; only labelling and advisory-message
//! conventions are configurable.

use serde::{Deserialize, Serialize};

/// Default label for painted cells and unlabelled inbound slots.
pub const DEFAULT_LABEL: &str = "Class";

/// Substring that marks an advisory message as a hard conflict.
pub const HARD_CONFLICT_MARKER: &str = "❌";

/// Timetable configuration.
///
/// Deserializes from partial input; missing fields take their defaults.
///
/// # Example
/// ```
/// use u_timetable::TimetableConfig;
///
/// let config = TimetableConfig::default().with_default_label("Lecture");
/// assert_eq!(config.default_label, "Lecture");
/// assert_eq!(config.hard_conflict_marker, "❌");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Label written into newly painted cells.
    pub default_label: String,
    /// Marker substring for hard-conflict advisory messages.
    pub hard_conflict_marker: String,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            default_label: DEFAULT_LABEL.to_string(),
            hard_conflict_marker: HARD_CONFLICT_MARKER.to_string(),
        }
    }
}

impl TimetableConfig {
    /// Sets the label for painted cells.
    ///
    /// Surrounding whitespace is trimmed; a blank label leaves the current
    /// one in place.
    pub fn with_default_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        let label = label.trim();
        if !label.is_empty() {
            self.default_label = label.to_string();
        }
        self
    }

    /// Sets the hard-conflict marker.
    pub fn with_hard_conflict_marker(mut self, marker: impl Into<String>) -> Self {
        self.hard_conflict_marker = marker.into();
        self
    }

    /// Label written into newly painted cells. Never empty.
    ///
    /// Falls back to [`DEFAULT_LABEL`] when a deserialized config carries a
    /// blank `default_label`.
    pub fn cell_label(&self) -> &str {
        match self.default_label.trim() {
            "" => DEFAULT_LABEL,
            label => label,
        }
    }

    /// Returns `label` unless it is absent or blank, else the cell label.
    pub fn label_or_default(&self, label: Option<&str>) -> String {
        match label.map(str::trim) {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => self.cell_label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimetableConfig::default();
        assert_eq!(config.default_label, "Class");
        assert_eq!(config.hard_conflict_marker, "❌");
    }

    #[test]
    fn test_partial_deserialize() {
        let config: TimetableConfig =
            serde_json::from_str(r#"{"default_label": "Seminar"}"#).unwrap();
        assert_eq!(config.default_label, "Seminar");
        assert_eq!(config.hard_conflict_marker, HARD_CONFLICT_MARKER);
    }

    #[test]
    fn test_label_or_default() {
        let config = TimetableConfig::default();
        assert_eq!(config.label_or_default(Some("Lab")), "Lab");
        assert_eq!(config.label_or_default(Some("  ")), "Class");
        assert_eq!(config.label_or_default(None), "Class");
    }

    #[test]
    fn test_blank_default_label_rejected() {
        let config = TimetableConfig::default().with_default_label("   ");
        assert_eq!(config.default_label, "Class");

        let config = TimetableConfig::default().with_default_label("  Lab ");
        assert_eq!(config.default_label, "Lab");
    }

    #[test]
    fn test_blank_deserialized_label_falls_back() {
        let config: TimetableConfig = serde_json::from_str(r#"{"default_label": ""}"#).unwrap();
        assert_eq!(config.cell_label(), DEFAULT_LABEL);
        assert_eq!(config.label_or_default(None), DEFAULT_LABEL);
    }
}
