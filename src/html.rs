// ABOUTME: HTML generation module for the slidedeckml compiler
// ABOUTME: Assembles rendered slides into sections and fills the reveal.js page shell

use crate::ast::{Metadata, Presentation, Slide};
use crate::config::{ShellConfig, DEFAULT_AUTHOR, DEFAULT_TITLE};
use crate::element::render_block;
use crate::errors::Result;
use crate::inline::escape_html;
use crate::utils::ensure_parent_directory_exists;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Generate the complete HTML document for a presentation
pub fn generate_html(presentation: &Presentation, shell: &ShellConfig) -> String {
    info!(
        "Generating HTML for {} slide(s){}",
        presentation.slides.len(),
        if presentation.template.is_some() {
            " with template"
        } else {
            ""
        }
    );

    let (title, author) = resolve_metadata(presentation.metadata.as_ref());
    let sections = render_sections(presentation);

    page_shell(&title, &author, &sections, shell)
}

/// Load a document tree from disk and generate its HTML
pub fn generate_html_from_file(input_path: &Path, shell: &ShellConfig) -> Result<String> {
    let presentation = Presentation::from_path(input_path)?;
    Ok(generate_html(&presentation, shell))
}

/// Render the template section (if any) followed by every slide, one `<section>` each
pub fn render_sections(presentation: &Presentation) -> String {
    presentation
        .template
        .iter()
        .chain(presentation.slides.iter())
        .enumerate()
        .map(|(index, slide)| {
            debug!("Rendering section {}", index + 1);
            render_slide(slide)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one slide (or the template) as a `<section>`
pub fn render_slide(slide: &Slide) -> String {
    let content = slide
        .blocks
        .iter()
        .map(render_block)
        .filter(|html| !html.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    format!("        <section>\n{}\n        </section>", content)
}

/// Title and author with their source quotes removed, falling back to defaults
fn resolve_metadata(metadata: Option<&Metadata>) -> (String, String) {
    (
        metadata_value(metadata.and_then(|m| m.title.as_deref()), DEFAULT_TITLE),
        metadata_value(metadata.and_then(|m| m.author.as_deref()), DEFAULT_AUTHOR),
    )
}

fn metadata_value(value: Option<&str>, default: &str) -> String {
    match value.map(|v| strip_source_quotes(v.trim())) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

fn strip_source_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

fn page_shell(title: &str, author: &str, sections: &str, shell: &ShellConfig) -> String {
    let title = escape_html(title);
    let author = escape_html(author);

    let mut html_doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html_doc.push_str("    <meta charset=\"UTF-8\">\n");
    html_doc.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html_doc.push_str(&format!("    <meta name=\"author\" content=\"{}\">\n", author));
    html_doc.push_str(&format!("    <meta name=\"title\" content=\"{}\">\n", title));
    html_doc.push_str(&format!("    <title>{}</title>\n", title));
    html_doc.push_str(&format!(
        "    <link rel=\"stylesheet\" href=\"{}\">\n",
        shell.reveal_css()
    ));
    html_doc.push_str(&format!(
        "    <link rel=\"stylesheet\" href=\"{}\">\n",
        shell.theme_css()
    ));
    html_doc.push_str("</head>\n<body>\n");

    html_doc.push_str("    <div class=\"reveal\">\n        <div class=\"slides\">\n");
    html_doc.push_str(sections);
    html_doc.push_str("\n        </div>\n    </div>\n");

    html_doc.push_str(&format!("    <script src=\"{}\"></script>\n", shell.reveal_js()));
    html_doc.push_str("    <script>\n        Reveal.initialize({\n");
    html_doc.push_str("            hash: true,\n");
    html_doc.push_str(&format!(
        "            transition: '{}',\n",
        shell.transition
    ));
    html_doc.push_str(&format!(
        "            backgroundTransition: '{}'\n",
        shell.background_transition
    ));
    html_doc.push_str("        });\n    </script>\n");

    html_doc.push_str("</body>\n</html>");

    html_doc
}

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    ensure_parent_directory_exists(output_path)?;
    fs::write(output_path, html_content)?;

    Ok(())
}
