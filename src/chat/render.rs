//! Markdown-subset renderer for chat responses
//!
//! Splits a response into blank-line-separated paragraphs and converts each
//! into a structural [`Block`]: fenced code, bullet list, or plain text. All
//! raw text is HTML-escaped before interpolation, so markup in user-visible
//! content can never reach the output unescaped.

use regex::Regex;
use serde::Serialize;

/// A structural block of a rendered chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Plain text paragraph
    Paragraph { text: String },
    /// Fenced code block with its declared language label
    Code { language: String, code: String },
    /// Unordered list, one entry per item
    List { items: Vec<String> },
}

/// Parse a response into structural blocks.
///
/// A paragraph opening with a triple-backtick fence becomes a [`Block::Code`]
/// (language label defaults to `"text"`); an unterminated fence yields no
/// block. A paragraph whose lines start with `"- "` becomes a
/// [`Block::List`]. Everything else is a [`Block::Paragraph`].
pub fn parse_blocks(text: &str) -> Vec<Block> {
    // Fence pattern is fixed; compile failure is impossible at runtime.
    let fence = match Regex::new(r"(?s)```(\w*)\n(.*?)```") {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    let mut blocks = Vec::new();
    for paragraph in text.split("\n\n") {
        let trimmed = paragraph.trim();
        if trimmed.starts_with("```") {
            if let Some(captures) = fence.captures(trimmed) {
                let language = match captures.get(1).map(|m| m.as_str()) {
                    Some("") | None => "text".to_string(),
                    Some(lang) => lang.to_string(),
                };
                let code = captures
                    .get(2)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                blocks.push(Block::Code { language, code });
            }
        } else if trimmed.starts_with("- ") {
            let items = trimmed
                .lines()
                .map(str::trim)
                .filter_map(|line| line.strip_prefix("- "))
                .map(str::to_string)
                .collect();
            blocks.push(Block::List { items });
        } else if !trimmed.is_empty() {
            blocks.push(Block::Paragraph {
                text: paragraph.to_string(),
            });
        }
    }
    blocks
}

/// Serialize blocks to HTML, escaping all raw text
pub fn render_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        match block {
            Block::Paragraph { text } => {
                html.push_str(&format!("<p>{}</p>", escape_html(text)));
            }
            Block::Code { language, code } => {
                html.push_str(&format!(
                    "<div class=\"code-block\"><div class=\"code-header\">\
                     <span class=\"code-filename\">{}</span></div>\
                     <pre><code>{}</code></pre></div>",
                    escape_html(language),
                    escape_html(code)
                ));
            }
            Block::List { items } => {
                html.push_str("<ul>");
                for item in items {
                    html.push_str(&format!("<li>{}</li>", escape_html(item)));
                }
                html.push_str("</ul>");
            }
        }
    }
    html
}

/// Parse and render a response in one step
pub fn render_message(text: &str) -> String {
    render_html(&parse_blocks(text))
}

/// Escape text for safe HTML interpolation
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraphs() {
        let blocks = parse_blocks("First paragraph.\n\nSecond paragraph.");
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            Block::Paragraph {
                text: "First paragraph.".to_string()
            }
        );
    }

    #[test]
    fn test_code_block_with_language() {
        let blocks = parse_blocks("```javascript\nconsole.log('hi');\n```");
        assert_eq!(
            blocks,
            vec![Block::Code {
                language: "javascript".to_string(),
                code: "console.log('hi');\n".to_string()
            }]
        );
    }

    #[test]
    fn test_code_block_defaults_to_text_label() {
        let blocks = parse_blocks("```\nplain snippet\n```");
        assert_eq!(
            blocks,
            vec![Block::Code {
                language: "text".to_string(),
                code: "plain snippet\n".to_string()
            }]
        );
    }

    #[test]
    fn test_unterminated_fence_yields_no_block() {
        let blocks = parse_blocks("```rust\nfn broken() {");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_list_items_have_marker_stripped() {
        let blocks = parse_blocks("- first\n- second\n- third");
        assert_eq!(
            blocks,
            vec![Block::List {
                items: vec![
                    "first".to_string(),
                    "second".to_string(),
                    "third".to_string()
                ]
            }]
        );
    }

    #[test]
    fn test_mixed_message() {
        let message = "Intro text.\n\n- a\n- b\n\n```css\nbody {}\n```\n\nOutro.";
        let blocks = parse_blocks(message);
        assert_eq!(blocks.len(), 4);
        assert!(matches!(blocks[0], Block::Paragraph { .. }));
        assert!(matches!(blocks[1], Block::List { .. }));
        assert!(matches!(blocks[2], Block::Code { .. }));
        assert!(matches!(blocks[3], Block::Paragraph { .. }));
    }

    #[test]
    fn test_script_tag_never_survives_in_paragraph() {
        let html = render_message("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_tag_never_survives_in_code() {
        let html = render_message("```html\n<script>alert(1)</script>\n```");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_tag_never_survives_in_list() {
        let html = render_message("- <script>alert(1)</script>\n- safe");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escape_html_covers_specials() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_paragraph_html_shape() {
        let html = render_message("just text");
        assert_eq!(html, "<p>just text</p>");
    }

    #[test]
    fn test_render_code_includes_language_label() {
        let html = render_message("```css\nbody {}\n```");
        assert!(html.contains("code-filename\">css</span>"));
        assert!(html.contains("<pre><code>body {}\n</code></pre>"));
    }
}
