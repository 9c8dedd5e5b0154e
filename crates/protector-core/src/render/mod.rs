//! Rendering of decrypted content into HTML.
//!
//! The host supplies the decrypted string and a [`ContentFormat`]:
//! - `html`: author-supplied HTML, passed through unchanged
//! - `markdown`: block and inline rendering with every user-supplied
//!   character escaped outside the generated tags

pub mod escape;
pub mod inline;
pub mod markdown;

use std::fmt;
use std::str::FromStr;

use crate::error::ProtectorError;

pub use escape::{escape_attribute, escape_html};
pub use inline::render_inline;
pub use markdown::render_markdown;

/// How decrypted plaintext is turned into HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFormat {
    /// No transformation
    #[default]
    Html,
    /// Full block + inline markdown rendering
    Markdown,
}

impl ContentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentFormat {
    type Err = ProtectorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "markdown" => Ok(Self::Markdown),
            other => Err(ProtectorError::InvalidInput(format!(
                "Unknown content format: {} (expected html or markdown)",
                other
            ))),
        }
    }
}

/// Render decrypted plaintext for insertion into a page.
pub fn render_content(plaintext: &str, format: ContentFormat) -> String {
    match format {
        ContentFormat::Html => plaintext.to_string(),
        ContentFormat::Markdown => render_markdown(plaintext),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("html".parse::<ContentFormat>().unwrap(), ContentFormat::Html);
        assert_eq!(
            " Markdown ".parse::<ContentFormat>().unwrap(),
            ContentFormat::Markdown
        );
        assert!("rst".parse::<ContentFormat>().is_err());
    }

    #[test]
    fn test_html_passthrough() {
        assert_eq!(
            render_content("<p>raw</p>", ContentFormat::Html),
            "<p>raw</p>"
        );
    }

    #[test]
    fn test_markdown_rendered() {
        assert_eq!(
            render_content("**hi**", ContentFormat::Markdown),
            "<p><strong>hi</strong></p>"
        );
    }

    #[test]
    fn test_display_round_trip() {
        for format in [ContentFormat::Html, ContentFormat::Markdown] {
            assert_eq!(format.to_string().parse::<ContentFormat>().unwrap(), format);
        }
    }
}
