// ABOUTME: Style block parsing for styled slide elements
// ABOUTME: Turns `{key: value, ...}` into an inline CSS `style` attribute

use crate::inline::escape_html;
use log::warn;

/// One declaration after keyword expansion
#[derive(Debug, Clone, PartialEq, Eq)]
struct Declaration {
    property: String,
    value: String,
    positional: bool,
}

impl Declaration {
    fn from_pair(key: &str, value: &str) -> Self {
        let (property, value, positional) = match key {
            "calque" => ("z-index", value.to_string(), true),
            "horizontal-margin" => ("left", format!("{}px", value), true),
            "vertical-margin" => ("top", format!("{}px", value), true),
            other => (other, value.to_string(), false),
        };
        Self {
            property: property.to_string(),
            value,
            positional,
        }
    }
}

/// Build a ` style="..."` attribute (leading space included) from a raw style block.
///
/// The keywords `calque`, `horizontal-margin` and `vertical-margin` map to
/// `z-index`, `left` and `top` and put the element in absolute position.
/// Every other key is passed through as a CSS property. Empty or malformed
/// blocks give an empty string. Empty pairs, such as the one after a
/// trailing comma, are skipped; a pair without `:`, or with an empty key or
/// value, makes the whole block malformed.
pub fn parse_style(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    match parse_declarations(raw) {
        Some(declarations) if !declarations.is_empty() => render_declarations(&declarations),
        Some(_) => String::new(),
        None => {
            warn!("Ignoring malformed style block: {}", raw);
            String::new()
        }
    }
}

fn parse_declarations(raw: &str) -> Option<Vec<Declaration>> {
    let body = raw.strip_prefix('{')?.strip_suffix('}')?.trim();
    if body.is_empty() {
        return Some(Vec::new());
    }

    body.split(',')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once(':')?;
            let key = key.trim();
            let value = strip_quotes(value.trim());
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some(Declaration::from_pair(key, value))
        })
        .collect()
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    value
}

fn render_declarations(declarations: &[Declaration]) -> String {
    let mut properties = Vec::with_capacity(declarations.len() + 1);
    if declarations.iter().any(|d| d.positional) {
        properties.push("position: absolute".to_string());
    }
    properties.extend(
        declarations
            .iter()
            .map(|d| format!("{}: {}", escape_html(&d.property), escape_html(&d.value))),
    );

    format!(" style=\"{}\"", properties.join("; "))
}
