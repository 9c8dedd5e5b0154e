//! Rendering primitives for CLI output.

use super::context::UiContext;
use super::theme::{dim, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = kind.paint(kind.display(ctx.unicode), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a hint line, adding the `Hint:` label when missing.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let body = text.strip_prefix("Hint:").unwrap_or(text).trim_start();
    format!("{} {}", dim("Hint:", ctx.color), body)
}

/// Render an error message with optional hint.
pub fn error_message(ctx: &UiContext, message: &str, hint_text: Option<&str>) -> String {
    let mut out = badge(ctx, Badge::Err, message);
    if let Some(h) = hint_text {
        out.push('\n');
        out.push_str(&hint(ctx, h));
    }
    out
}

/// Print an error to stderr.
pub fn print_error(ctx: &UiContext, message: &str, hint_text: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, hint_text));
}

/// Print a success line to stderr unless quiet.
pub fn print_success(ctx: &UiContext, message: &str) {
    if !ctx.quiet {
        eprintln!("{}", badge(ctx, Badge::Ok, message));
    }
}
