//! Inline formatting for a single line of text.
//!
//! Recognized runs, applied in this order: `**bold**`, `*italic*`,
//! `` `code` ``, `[label](url)`. Each pass only looks at plain-text runs left
//! over by earlier passes, so generated tags are never re-matched. Inner
//! content is escaped when a run is wrapped; the remaining plain runs are
//! escaped once at the very end.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::escape::{escape_attribute, escape_html};

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid"));
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("italic pattern is valid"));
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("code pattern is valid"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

/// URL schemes that would execute script when followed.
const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

#[derive(Debug)]
enum Segment {
    /// Raw user text, not yet escaped
    Text(String),
    /// HTML produced by a formatting pass
    Markup(String),
}

/// Render one line of raw text to inline HTML.
///
/// # Examples
///
/// ```
/// use protector_core::render::render_inline;
///
/// assert_eq!(
///     render_inline("**Note:** see <docs>"),
///     "<strong>Note:</strong> see &lt;docs&gt;"
/// );
/// ```
pub fn render_inline(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let segments = vec![Segment::Text(text.to_string())];
    let segments = apply(segments, &BOLD, |caps| {
        format!("<strong>{}</strong>", escape_html(&caps[1]))
    });
    let segments = apply(segments, &ITALIC, |caps| {
        format!("<em>{}</em>", escape_html(&caps[1]))
    });
    let segments = apply(segments, &CODE, |caps| {
        format!("<code>{}</code>", escape_html(&caps[1]))
    });
    let segments = apply(segments, &LINK, |caps| {
        format!(
            "<a href=\"{}\" rel=\"noopener noreferrer\">{}</a>",
            escape_attribute(safe_href(&caps[2])),
            escape_html(&caps[1])
        )
    });

    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => escape_html(&text),
            Segment::Markup(html) => html,
        })
        .collect()
}

/// Split every plain-text segment around the matches of `pattern`.
fn apply<F>(segments: Vec<Segment>, pattern: &Regex, wrap: F) -> Vec<Segment>
where
    F: Fn(&Captures) -> String,
{
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        let text = match segment {
            Segment::Text(text) => text,
            markup => {
                out.push(markup);
                continue;
            }
        };

        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                out.push(Segment::Text(text[last..whole.start()].to_string()));
            }
            out.push(Segment::Markup(wrap(&caps)));
            last = whole.end();
        }
        if last < text.len() {
            out.push(Segment::Text(text[last..].to_string()));
        }
    }
    out
}

fn safe_href(url: &str) -> &str {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if BLOCKED_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
    {
        "#"
    } else {
        url
    }
}
