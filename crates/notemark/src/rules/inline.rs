//! Inline renderers: links, emphasis, images and line breaks.

use crate::node::NodeRef;

/// Render an `<a>`.
///
/// A link whose text is its own target becomes an autolink; a link without
/// a target is just its text.
pub fn link(node: &NodeRef, content: &str) -> String {
    let href = node.attr("href");
    let title = node.attr("title").unwrap_or("");

    if href == Some(content) && title.is_empty() {
        return format!("<{content}>");
    }

    match href {
        Some(href) if !href.is_empty() => {
            format!("[{}]({}{})", content, href, title_part(title))
        }
        _ => content.to_string(),
    }
}

pub fn line_break() -> String {
    "\n".to_string()
}

pub fn emphasis(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!("*{content}*")
}

pub fn strong(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!("**{content}**")
}

/// Render an `<img>`; missing attributes render as empty strings.
pub fn image(node: &NodeRef) -> String {
    let alt = node.attr("alt").unwrap_or("");
    let src = node.attr("src").unwrap_or("");
    let title = node.attr("title").unwrap_or("");

    format!("![{}]({}{})", alt, src, title_part(title))
}

/// ` "title"` with inner quotes escaped, or nothing for an empty title
fn title_part(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }
    format!(" \"{}\"", title.replace('"', "\\\""))
}
