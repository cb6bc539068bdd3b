// ABOUTME: Media reference resolution for slide content
// ABOUTME: Classifies `![alt](url)` references as image or video and builds the tag

use crate::ast::Media;
use crate::inline::escape_html;
use log::warn;
use regex::Regex;
use std::sync::LazyLock;

static MEDIA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").unwrap());

const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".webm", ".ogg", ".mov"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    /// Video with the subtype of its `video/*` MIME type
    Video(&'static str),
}

impl MediaKind {
    /// Classify a URL by its (case-insensitive) extension
    pub fn from_url(url: &str) -> Self {
        let lower = url.to_lowercase();
        if !VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            return MediaKind::Image;
        }

        let subtype = if lower.ends_with(".webm") {
            "webm"
        } else if lower.ends_with(".ogg") {
            "ogg"
        } else if lower.ends_with(".mov") {
            "quicktime"
        } else {
            "mp4"
        };
        MediaKind::Video(subtype)
    }
}

/// Pull `(alt, url)` out of a `![alt](url)` reference
pub fn extract_reference(content: &str) -> Option<(&str, &str)> {
    let caps = MEDIA_RE.captures(content)?;
    let alt = caps.get(1)?.as_str();
    let url = caps.get(2)?.as_str();
    Some((alt, url))
}

/// Render a raw `![alt](url)` reference, or an empty string if it does not match
pub fn resolve_media(content: &str) -> String {
    match extract_reference(content) {
        Some((alt, url)) => media_tag(alt, url, ""),
        None => {
            warn!("Ignoring malformed media reference: {}", content);
            String::new()
        }
    }
}

/// Render a media node. A structured `{url, alt}` pair is used as is,
/// otherwise the raw content is parsed.
pub(crate) fn render_media(media: &Media, style: &str) -> String {
    if let Some(url) = media.url.as_deref() {
        return media_tag(media.alt.as_deref().unwrap_or_default(), url, style);
    }

    let content = media.content.as_deref().unwrap_or_default();
    match extract_reference(content) {
        Some((alt, url)) => media_tag(alt, url, style),
        None => {
            warn!("Ignoring malformed media reference: {}", content);
            String::new()
        }
    }
}

/// Build the tag for a media reference; video tags span several indented lines
fn media_tag(alt: &str, url: &str, style: &str) -> String {
    let url = url.trim();
    let (alt_html, url_html) = (escape_html(alt), escape_html(url));

    match MediaKind::from_url(url) {
        MediaKind::Image => format!("<img src=\"{}\" alt=\"{}\"{}>", url_html, alt_html, style),
        MediaKind::Video(subtype) => format!(
            "<video controls{}>\n                <source src=\"{}\" type=\"video/{}\">\n                {}\n            </video>",
            style, url_html, subtype, alt_html
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_reference() {
        assert_eq!(
            resolve_media("![cat](cat.png)"),
            r#"<img src="cat.png" alt="cat">"#
        );
    }

    #[test]
    fn test_video_reference() {
        let html = resolve_media("![clip](clip.webm)");
        assert!(html.starts_with("<video controls>"));
        assert!(html.contains(r#"<source src="clip.webm" type="video/webm">"#));
        assert!(html.contains("clip\n"));
        assert!(html.ends_with("</video>"));
    }

    #[test]
    fn test_video_mime_types() {
        assert_eq!(MediaKind::from_url("a.mp4"), MediaKind::Video("mp4"));
        assert_eq!(MediaKind::from_url("a.OGG"), MediaKind::Video("ogg"));
        assert_eq!(MediaKind::from_url("a.Mov"), MediaKind::Video("quicktime"));
        assert_eq!(MediaKind::from_url("a.webm"), MediaKind::Video("webm"));
        assert_eq!(MediaKind::from_url("a.gif"), MediaKind::Image);
        assert_eq!(MediaKind::from_url("movie.mp4.png"), MediaKind::Image);
    }

    #[test]
    fn test_malformed_reference_renders_nothing() {
        assert_eq!(resolve_media("[cat](cat.png)"), "");
        assert_eq!(resolve_media("![](cat.png)"), "");
        assert_eq!(resolve_media("![cat]()"), "");
    }

    #[test]
    fn test_structured_media_wins_over_content() {
        let media = Media {
            content: Some("![cat](cat.png)".to_string()),
            ..Media::from_parts("dog", "dog.jpg")
        };
        assert_eq!(
            render_media(&media, " style=\"top: 1px\""),
            r#"<img src="dog.jpg" alt="dog" style="top: 1px">"#
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        assert_eq!(
            resolve_media(r#"![a "b"](x.png?a=1&b=2)"#),
            r#"<img src="x.png?a=1&amp;b=2" alt="a &quot;b&quot;">"#
        );
    }
}
