//! Progress indicators for long-running operations using indicatif.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};
use std::time::Duration;

use super::context::UiContext;

/// A spinner for indeterminate progress, drawn on stderr.
///
/// Without a TTY the spinner is a no-op so piped output stays clean.
pub struct Spinner {
    bar: Option<IndicatifBar>,
}

impl Spinner {
    /// Create a new spinner with the given message.
    pub fn new(ctx: &UiContext, message: &str) -> Self {
        let bar = if ctx.allows_animation() {
            let pb = IndicatifBar::new_spinner();
            let (template, ticks): (&str, &[&str]) = if ctx.unicode {
                (
                    "{spinner:.cyan} {msg}...",
                    &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", ""],
                )
            } else {
                ("{spinner} {msg}...", &["|", "/", "-", "\\", ""])
            };
            let style = ProgressStyle::default_spinner()
                .template(template)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(ticks);
            pb.set_style(style);
            pb.set_message(message.to_string());
            Some(pb)
        } else {
            None
        };

        Self { bar }
    }

    /// Start animating on a background tick.
    pub fn start(&self) {
        if let Some(bar) = &self.bar {
            bar.enable_steady_tick(Duration::from_millis(80));
        }
    }

    /// Stop and erase the spinner line.
    pub fn clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.clear();
    }
}
