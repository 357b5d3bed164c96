//! Display options shared by body rendering and layout.

use serde::{Deserialize, Serialize};

use crate::text::display_width;

/// Options controlling how cell content is rendered.
///
/// All fields have defaults, so partial configuration files work:
///
/// ```rust
/// use peristyle::LayoutOptions;
///
/// let options: LayoutOptions = serde_json::from_str(r#"{"missing": "NA"}"#).unwrap();
/// assert_eq!(options.missing, "NA");
/// assert_eq!(options.marker, "\u{2026}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Sentinel shown for missing cells.
    pub missing: String,
    /// Marker appended when a line is truncated.
    pub marker: String,
    /// Widest fixed-notation rendering allowed for a float column before
    /// the whole column switches to scientific notation.
    pub max_fixed_width: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            missing: "-".to_string(),
            marker: "\u{2026}".to_string(),
            max_fixed_width: 13,
        }
    }
}

impl LayoutOptions {
    /// Sets the missing-value sentinel.
    pub fn missing(mut self, missing: impl Into<String>) -> Self {
        self.missing = missing.into();
        self
    }

    /// Sets the truncation marker.
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Sets the fixed-notation width limit for float columns.
    pub fn max_fixed_width(mut self, width: usize) -> Self {
        self.max_fixed_width = width;
        self
    }

    /// The narrowest width any body can be truncated to: one content
    /// column plus the marker.
    pub fn truncation_floor(&self) -> usize {
        1 + display_width(&self.marker)
    }
}

/// Queries the terminal width, returning `fallback` when there is no
/// attached terminal. Callers pass the result to the layout as its budget.
pub fn terminal_width(fallback: usize) -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(fallback)
}
