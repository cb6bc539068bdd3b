// ABOUTME: Inline text formatting for slide content
// ABOUTME: Escapes HTML and turns bold, italic and underline markers into tags

use regex::Regex;
use std::sync::LazyLock;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\r\n]+)\*\*").unwrap());

static UNDERLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__([^_\r\n]+)__").unwrap());

static STAR_ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*\r\n]+)\*").unwrap());

static UNDERSCORE_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_\r\n]+)_").unwrap());

/// Escape the five HTML metacharacters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Convert raw inline text into HTML-safe markup with emphasis tags.
///
/// Text is escaped first, then `**bold**`, `__underline__`, `*italic*` and
/// `_italic_` are applied in that order. A delimiter that touches another
/// copy of its own marker character is not a delimiter, so runs like `***`
/// stay literal. Unmatched markers are left as they are.
pub fn format_inline(text: &str) -> String {
    let result = escape_html(text);
    let result = replace_delimited(&BOLD_RE, &result, '*', "strong");
    let result = replace_delimited(&UNDERLINE_RE, &result, '_', "u");
    let result = replace_delimited(&STAR_ITALIC_RE, &result, '*', "em");
    replace_delimited(&UNDERSCORE_ITALIC_RE, &result, '_', "em")
}

/// Replace every match of `re` with `<tag>$1</tag>`, skipping matches whose
/// neighbours on either side are `marker`, or whose content would cut
/// through a tag written by an earlier pass.
///
/// Stands in for `(?<!marker)...(?!marker)`, which `regex` does not support.
/// A rejected match is retried one character further on, so a valid span
/// that starts inside the rejected one is still found.
fn replace_delimited(re: &Regex, text: &str, marker: char, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(caps) = re.captures_at(text, search) {
        let Some(whole) = caps.get(0) else { break };
        let (start, end) = (whole.start(), whole.end());

        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        if before == Some(marker) || after == Some(marker) || !tags_balanced(&caps[1]) {
            search = start + marker.len_utf8();
            continue;
        }

        out.push_str(&text[copied..start]);
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&caps[1]);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        copied = end;
        search = end;
    }

    out.push_str(&text[copied..]);
    out
}

/// Whether every tag in `fragment` is closed inside it, in order.
/// Text is escaped before any pass runs, so every `<` here opens a tag we wrote.
fn tags_balanced(fragment: &str) -> bool {
    let mut open: Vec<&str> = Vec::new();
    let mut rest = fragment;

    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start..].find('>') else {
            return false;
        };
        let tag = &rest[start + 1..start + len];
        rest = &rest[start + len + 1..];

        match tag.strip_prefix('/') {
            Some(name) => {
                if open.pop() != Some(name) {
                    return false;
                }
            }
            None => open.push(tag),
        }
    }

    open.is_empty()
}
