// ABOUTME: Fenced code block parsing for slide content
// ABOUTME: Extracts language, line highlighting attributes and body from a fence

use crate::inline::escape_html;
use log::warn;
use regex::Regex;
use std::sync::LazyLock;

/// Opening fence, optional language and `[...]` attribute list, body, closing fence.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^```([A-Za-z][A-Za-z0-9-]*)?[ \t]*(?:\[([^\]\r\n]*)\])?[ \t]*\r?\n(.*?)\r?\n?```",
    )
    .unwrap()
});

/// A parsed fenced code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFence {
    pub language: Option<String>,
    /// Highlighted line ranges, passed to the renderer untouched
    pub line_numbers: Option<String>,
    pub start_line: Option<u64>,
    pub body: String,
}

impl CodeFence {
    /// Parse a complete fenced block. Returns `None` when the fence shape does not match.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = FENCE_RE.captures(raw.trim())?;

        let mut fence = Self {
            language: caps.get(1).map(|m| m.as_str().to_string()),
            line_numbers: None,
            start_line: None,
            body: caps[3].to_string(),
        };

        if let Some(attributes) = caps.get(2) {
            for token in attribute_tokens(attributes.as_str()) {
                fence.apply_attribute(&token);
            }
        }

        Some(fence)
    }

    fn apply_attribute(&mut self, token: &str) {
        let Some((key, value)) = token.split_once(':') else {
            return;
        };
        let value = value.trim();
        match key.trim() {
            "lines" if !value.is_empty() => self.line_numbers = Some(value.to_string()),
            "start" => match value.parse() {
                Ok(start) => self.start_line = Some(start),
                Err(_) => warn!("Ignoring non-numeric code start line: {}", value),
            },
            _ => {}
        }
    }

    /// Render as `<pre><code ...>` with `style` (a full attribute or empty) on the `<pre>` tag
    pub fn to_html(&self, style: &str) -> String {
        let mut attributes = String::from("data-trim data-noescape");

        if let Some(language) = &self.language {
            attributes.push_str(&format!(" class=\"language-{}\"", language));
        }

        match (&self.line_numbers, self.start_line) {
            (Some(lines), _) => {
                attributes.push_str(&format!(" data-line-numbers=\"{}\"", escape_html(lines)))
            }
            (None, Some(_)) => attributes.push_str(" data-line-numbers"),
            (None, None) => {}
        }
        if let Some(start) = self.start_line {
            attributes.push_str(&format!(" data-ln-start-from=\"{}\"", start));
        }

        format!(
            "<pre{}><code {}>{}</code></pre>",
            style,
            attributes,
            escape_html(&self.body)
        )
    }
}

/// Render a fenced code block to HTML, or an empty string when it is malformed
pub fn parse_code_block(raw: &str) -> String {
    render_code_block(raw, "")
}

pub(crate) fn render_code_block(raw: &str, style: &str) -> String {
    match CodeFence::parse(raw) {
        Some(fence) => fence.to_html(style),
        None => {
            warn!("Ignoring malformed code block");
            String::new()
        }
    }
}

/// Split an attribute list on whitespace and commas outside single quotes.
/// Quotes are dropped, so `'lines:1-3'` and `lines:'1-3'` read the same.
fn attribute_tokens(list: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in list.chars() {
        match c {
            '\'' => quoted = !quoted,
            c if !quoted && (c.is_whitespace() || c == ',') => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_and_line_numbers() {
        let html = parse_code_block("```js ['lines:1-2']\nlet a = 1;\nlet b = 2;\n```");
        assert_eq!(
            html,
            "<pre><code data-trim data-noescape class=\"language-js\" data-line-numbers=\"1-2\">let a = 1;\nlet b = 2;</code></pre>"
        );
    }

    #[test]
    fn test_value_side_quoting() {
        let fence = CodeFence::parse("```js [lines:'1-2']\nx\n```").unwrap();
        assert_eq!(fence.line_numbers.as_deref(), Some("1-2"));
    }

    #[test]
    fn test_start_line_alone() {
        let html = parse_code_block("```python ['start:10']\nprint(1)\n```");
        assert!(html.contains(
            "class=\"language-python\" data-line-numbers data-ln-start-from=\"10\""
        ));
    }

    #[test]
    fn test_lines_and_start_together() {
        let fence = CodeFence::parse("```rust ['lines:1-3|5' 'start:10']\nfn main() {}\n```")
            .unwrap();
        assert_eq!(fence.language.as_deref(), Some("rust"));
        assert_eq!(fence.line_numbers.as_deref(), Some("1-3|5"));
        assert_eq!(fence.start_line, Some(10));
        assert!(fence
            .to_html("")
            .contains("data-line-numbers=\"1-3|5\" data-ln-start-from=\"10\""));
    }

    #[test]
    fn test_quoted_range_may_contain_commas() {
        let fence = CodeFence::parse("```js ['lines:1,4-6', 'start:2']\nx\n```").unwrap();
        assert_eq!(fence.line_numbers.as_deref(), Some("1,4-6"));
        assert_eq!(fence.start_line, Some(2));
    }

    #[test]
    fn test_no_language_and_unknown_attributes() {
        let html = parse_code_block("```['theme:dark' 'start:x']\nplain\n```");
        assert_eq!(
            html,
            "<pre><code data-trim data-noescape>plain</code></pre>"
        );
    }

    #[test]
    fn test_body_is_escaped_but_not_formatted() {
        let html = parse_code_block("```html\n<b>**not bold**</b>\n```");
        assert!(html.contains("&lt;b&gt;**not bold**&lt;/b&gt;"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn test_body_stops_at_first_closing_fence() {
        let fence = CodeFence::parse("```\none\n```\ntrailing\n```").unwrap();
        assert_eq!(fence.body, "one");
    }

    #[test]
    fn test_empty_body() {
        let fence = CodeFence::parse("```sh\n```").unwrap();
        assert_eq!(fence.body, "");
    }

    #[test]
    fn test_style_goes_on_pre() {
        let html = render_code_block("```c\nint x;\n```", " style=\"color: red\"");
        assert!(html.starts_with("<pre style=\"color: red\"><code "));
    }

    #[test]
    fn test_malformed_fences() {
        assert_eq!(parse_code_block("no fence at all"), "");
        assert_eq!(parse_code_block("```js\nunterminated"), "");
        assert_eq!(parse_code_block("```1abc\nx\n```"), "");
    }
}
