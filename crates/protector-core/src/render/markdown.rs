//! Line-oriented markdown renderer.
//!
//! Supports the small block subset protected content needs: ATX headings,
//! paragraphs, unordered lists, single-line blockquotes and fenced code
//! blocks. Each call starts from a fresh state and emits blocks in document
//! order with no separators between them.

use once_cell::sync::Lazy;
use regex::Regex;

use super::escape::escape_html;
use super::inline::render_inline;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading pattern is valid"));
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*+]\s+(.*)$").expect("list pattern is valid"));
static QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*>\s?(.*)$").expect("quote pattern is valid"));

const FENCE: &str = "```";

/// The block currently being accumulated. Only one can be open at a time.
#[derive(Debug, Default)]
enum Block {
    #[default]
    Idle,
    Paragraph(Vec<String>),
    List(Vec<String>),
    Code(Vec<String>),
}

struct Renderer {
    block: Block,
    html: String,
}

impl Renderer {
    fn new() -> Self {
        Self {
            block: Block::Idle,
            html: String::new(),
        }
    }

    /// Emit the open block, if any, and return to idle.
    fn flush(&mut self) {
        match std::mem::take(&mut self.block) {
            Block::Idle => {}
            Block::Paragraph(lines) => {
                self.html.push_str("<p>");
                self.html.push_str(&render_inline(&lines.join(" ")));
                self.html.push_str("</p>");
            }
            Block::List(items) => {
                self.html.push_str("<ul>");
                for item in items {
                    self.html.push_str(&item);
                }
                self.html.push_str("</ul>");
            }
            Block::Code(lines) => {
                if !lines.is_empty() {
                    self.html.push_str("<pre><code>");
                    self.html.push_str(&escape_html(&lines.join("\n")));
                    self.html.push_str("</code></pre>");
                }
            }
        }
    }

    fn line(&mut self, line: &str) {
        if line.trim().starts_with(FENCE) {
            let closing = matches!(self.block, Block::Code(_));
            self.flush();
            if !closing {
                self.block = Block::Code(Vec::new());
            }
            return;
        }

        if let Block::Code(lines) = &mut self.block {
            lines.push(line.to_string());
            return;
        }

        if line.trim().is_empty() {
            self.flush();
            return;
        }

        if let Some(caps) = HEADING.captures(line) {
            self.flush();
            let level = caps[1].len();
            self.html.push_str(&format!(
                "<h{level}>{}</h{level}>",
                render_inline(&caps[2])
            ));
            return;
        }

        if let Some(caps) = LIST_ITEM.captures(line) {
            let item = format!("<li>{}</li>", render_inline(&caps[1]));
            match &mut self.block {
                Block::List(items) => items.push(item),
                _ => {
                    self.flush();
                    self.block = Block::List(vec![item]);
                }
            }
            return;
        }

        if let Some(caps) = QUOTE.captures(line) {
            self.flush();
            self.html.push_str("<blockquote>");
            self.html.push_str(&render_inline(&caps[1]));
            self.html.push_str("</blockquote>");
            return;
        }

        let text = line.trim().to_string();
        match &mut self.block {
            Block::Paragraph(lines) => lines.push(text),
            _ => {
                self.flush();
                self.block = Block::Paragraph(vec![text]);
            }
        }
    }

    /// An unterminated fence is closed implicitly at end of input.
    fn finish(mut self) -> String {
        self.flush();
        self.html
    }
}

/// Render a markdown document to HTML.
///
/// # Examples
///
/// ```
/// use protector_core::render_markdown;
///
/// assert_eq!(
///     render_markdown("# Title\n\nBody *em*"),
///     "<h1>Title</h1><p>Body <em>em</em></p>"
/// );
/// ```
pub fn render_markdown(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let normalized = markdown.replace("\r\n", "\n").replace('\r', "\n");
    let mut renderer = Renderer::new();
    for line in normalized.split('\n') {
        renderer.line(line);
    }
    renderer.finish()
}
