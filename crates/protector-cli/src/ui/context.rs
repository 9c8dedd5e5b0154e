//! UI context for environment detection and configuration.

use std::io::IsTerminal;

/// Terminal and environment context for UI decisions.
///
/// Everything the CLI decorates goes to stderr; stdout carries only the
/// payload or decrypted content.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stderr is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Whether non-error output is suppressed
    pub quiet: bool,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(no_color_flag: bool, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self {
            is_tty,
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
            unicode: !term_is_dumb,
            quiet,
        }
    }

    /// Check if interactive prompts are allowed.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }

    /// Check if animations (spinners) are allowed.
    pub fn allows_animation(&self) -> bool {
        self.is_tty && !self.quiet
    }
}

#[cfg(test)]
pub(crate) fn plain() -> UiContext {
    UiContext {
        is_tty: false,
        color: false,
        unicode: false,
        quiet: false,
    }
}
