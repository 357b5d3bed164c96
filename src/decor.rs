//! The text-decoration collaborator handed to header and footer producers.
//!
//! Decoration is injected rather than looked up globally so a display call
//! fully owns its appearance. Styles degrade to plain text automatically
//! when the output is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

static SUBTLE: Lazy<Style> = Lazy::new(|| Style::new().dim());

/// Decoration for the quiet parts of a pillar (type lines, footers).
///
/// The default carries a dim "subtle" style. [`Decor::plain`] disables
/// decoration entirely, which byte-exact tests and non-ANSI sinks want.
#[derive(Clone, Debug)]
pub struct Decor {
    subtle: Option<Style>,
}

impl Decor {
    /// Decoration with the standard dim subtle style.
    pub fn standard() -> Self {
        Decor {
            subtle: Some(SUBTLE.clone()),
        }
    }

    /// No decoration; lines pass through untouched.
    pub fn plain() -> Self {
        Decor { subtle: None }
    }

    /// Decoration with a caller-supplied subtle style.
    pub fn with_subtle(style: Style) -> Self {
        Decor {
            subtle: Some(style),
        }
    }

    /// Applies the subtle style to one line.
    ///
    /// Applied before any padding so the escape sequences wrap the text
    /// only, never the surrounding spaces.
    pub fn subtle(&self, line: &str) -> String {
        match &self.subtle {
            Some(style) => style.apply_to(line).to_string(),
            None => line.to_string(),
        }
    }
}

impl Default for Decor {
    fn default() -> Self {
        Decor::standard()
    }
}
