// ABOUTME: Document tree for SlideDeckML presentations
// ABOUTME: Typed nodes produced by the language front end and consumed by the renderer

use crate::errors::Result;
use crate::utils::validate_file_exists;
use log::info;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A whole presentation: optional metadata and template, then the slides in order
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Presentation {
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub template: Option<Slide>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Decode a presentation from the JSON dump of a parsed tree
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a presentation tree from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        info!("Loading document tree: {:?}", path);

        validate_file_exists(path)?;
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Title and author as written in the source, usually still quoted
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// A slide, or the template section which has the same shape
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub lines: Vec<LineContent>,
}

const TYPE_TAG: &str = "$type";
const STYLED_TAG: &str = "StyledElement";

/// One renderable line, optionally wrapped with a style block.
///
/// A styled line always wraps a plain [`Element`], so styling cannot nest.
#[derive(Debug, Clone, PartialEq)]
pub enum LineContent {
    Styled(StyledElement),
    Plain(Element),
}

impl<'de> Deserialize<'de> for LineContent {
    /// Chooses the variant from `$type` up front, so a broken styled node is
    /// reported instead of falling through to [`Element::Unsupported`].
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let node = Value::deserialize(deserializer)?;

        if type_tag(&node) != Some(STYLED_TAG) {
            return Element::deserialize(node)
                .map(LineContent::Plain)
                .map_err(de::Error::custom);
        }

        if node.get("element").and_then(type_tag) == Some(STYLED_TAG) {
            return Err(de::Error::custom("nested StyledElement is not supported"));
        }

        StyledElement::deserialize(node)
            .map(LineContent::Styled)
            .map_err(de::Error::custom)
    }
}

fn type_tag(node: &Value) -> Option<&str> {
    node.get(TYPE_TAG).and_then(Value::as_str)
}

impl From<Element> for LineContent {
    fn from(element: Element) -> Self {
        LineContent::Plain(element)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StyledElement {
    pub element: Element,
    /// Raw `{key: value, ...}` block
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "$type")]
pub enum Element {
    Header(Header),
    Paragraph(TextLine),
    UnorderedList(List),
    OrderedList(List),
    Quote(TextLine),
    Media(Media),
    CodeBlock(CodeBlock),
    /// Any node kind this renderer does not know about
    #[serde(other)]
    Unsupported,
}

impl Element {
    /// Wrap this element with a raw style block
    pub fn styled(self, style: impl Into<String>) -> LineContent {
        LineContent::Styled(StyledElement {
            element: self,
            style: style.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Header {
    /// One to three marker characters; the count is the heading depth
    pub level: String,
    pub text: String,
}

impl Header {
    pub fn depth(&self) -> usize {
        self.level.chars().count()
    }
}

/// Paragraphs and quotes carry a single run of inline text
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextLine {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct List {
    #[serde(default)]
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListItem {
    pub text: String,
}

/// A media reference, either pre-split by the front end or as a raw `![alt](url)` line
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Media {
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn from_parts(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            alt: Some(alt.into()),
            content: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CodeBlock {
    /// The full fenced block, fences included
    pub content: String,
}
