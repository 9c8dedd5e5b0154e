//! Hugo snippets wrapping a transport payload.

use crate::config::{OutputFormat, SnippetMode};

/// Render the snippet for `mode` around `payload`.
pub fn render_helper(mode: SnippetMode, payload: &str) -> String {
    match mode {
        SnippetMode::Shortcode => format!("{{{{< protector payload=\"{}\" >}}}}", payload),
        SnippetMode::Page => format!(
            "# front matter snippet\nprotector_full_page_payload: \"{}\"",
            payload
        ),
    }
}

/// Format the encrypt result for output.
pub fn format_output(format: OutputFormat, mode: SnippetMode, payload: &str) -> String {
    match format {
        OutputFormat::Raw => payload.to_string(),
        OutputFormat::Helper => render_helper(mode, payload),
    }
}
