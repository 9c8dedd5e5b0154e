//! Badges and color styling.

use owo_colors::OwoColorize;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",   // [✓]
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[\u{26A0}]", // [⚠]
            (Self::Warn, false) => "[WARN]",
            (Self::Err, true) => "[\u{2717}]",  // [✗]
            (Self::Err, false) => "[ERR]",
        }
    }

    /// Apply the badge color to `text` when color is enabled.
    pub fn paint(&self, text: &str, color: bool) -> String {
        if !color {
            return text.to_string();
        }
        match self {
            Self::Ok => text.green().to_string(),
            Self::Warn => text.yellow().to_string(),
            Self::Err => text.red().bold().to_string(),
        }
    }
}

/// Dim `text` when color is enabled.
pub fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
