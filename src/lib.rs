// ABOUTME: Library module for the slidedeckml compiler.
// ABOUTME: Renders parsed SlideDeckML document trees into reveal.js HTML documents.

// Reexport modules
pub mod ast;
pub mod code;
pub mod config;
pub mod element;
pub mod errors;
pub mod html;
pub mod inline;
pub mod media;
pub mod style;
pub mod utils;

// Reexport common types and functions
pub use ast::{Block, Element, LineContent, Metadata, Presentation, Slide};
pub use code::{parse_code_block, CodeFence};
pub use config::{Config, ShellConfig};
pub use element::{render_block, render_line};
pub use errors::{Result, SlideError};
pub use html::{generate_html, generate_html_from_file, write_html_to_file};
pub use inline::{escape_html, format_inline};
pub use media::{resolve_media, MediaKind};
pub use style::parse_style;
