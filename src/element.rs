// ABOUTME: Element rendering for slide lines
// ABOUTME: Maps each document node to an indented HTML fragment

use crate::ast::{Block, Element, Header, LineContent, List};
use crate::code::render_code_block;
use crate::inline::format_inline;
use crate::media::render_media;
use crate::style::parse_style;
use log::debug;

/// Indentation of top-level tags inside a `<section>`
pub const ELEMENT_INDENT: &str = "            ";
/// Indentation of list items
pub const ITEM_INDENT: &str = "                ";

/// Render every line of a block, dropping lines that render to nothing
pub fn render_block(block: &Block) -> String {
    block
        .lines
        .iter()
        .map(render_line)
        .filter(|html| !html.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single line. A styled line has its style block parsed once and
/// placed on the wrapped element's opening tag.
pub fn render_line(line: &LineContent) -> String {
    match line {
        LineContent::Plain(element) => render_element(element, ""),
        LineContent::Styled(styled) => {
            let style = parse_style(&styled.style);
            render_element(&styled.element, &style)
        }
    }
}

/// Render an element with `style`, which is either a full ` style="..."` attribute or empty
pub fn render_element(element: &Element, style: &str) -> String {
    match element {
        Element::Header(header) => render_header(header, style),
        Element::Paragraph(paragraph) => {
            format!("{}<p{}>{}</p>", ELEMENT_INDENT, style, format_inline(&paragraph.text))
        }
        Element::UnorderedList(list) => render_list("ul", list, style),
        Element::OrderedList(list) => render_list("ol", list, style),
        Element::Quote(quote) => format!(
            "{}<blockquote{}>{}</blockquote>",
            ELEMENT_INDENT,
            style,
            format_inline(&quote.text)
        ),
        Element::Media(media) => indent(render_media(media, style)),
        Element::CodeBlock(code) => indent(render_code_block(&code.content, style)),
        Element::Unsupported => {
            debug!("Skipping unsupported line");
            String::new()
        }
    }
}

fn render_header(header: &Header, style: &str) -> String {
    let level = header.depth();
    format!(
        "{}<h{level}{}>{}</h{level}>",
        ELEMENT_INDENT,
        style,
        format_inline(&header.text),
        level = level
    )
}

fn render_list(tag: &str, list: &List, style: &str) -> String {
    let items = list
        .items
        .iter()
        .map(|item| format!("{}<li>{}</li>", ITEM_INDENT, format_inline(&item.text)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{indent}<{tag}{style}>\n{items}\n{indent}</{tag}>",
        indent = ELEMENT_INDENT,
        tag = tag,
        style = style,
        items = items
    )
}

/// Indent a fragment's opening line; empty fragments stay empty
fn indent(html: String) -> String {
    if html.is_empty() {
        html
    } else {
        format!("{}{}", ELEMENT_INDENT, html)
    }
}
