//! HTML parsing support.
//!
//! This module parses HTML strings with scraper/html5ever and converts the
//! result to the [`Node`] tree the converter walks.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Element nesting depth at which a subtree is collapsed into its text
pub const MAX_DEPTH: usize = 512;

/// Parse an HTML string into a Node tree.
///
/// Input mentioning `<html>` or `<body>` is parsed as a whole document and
/// its `body` becomes the root. Anything else is parsed as a body fragment
/// whose implicit container becomes the root, so leading bare text and
/// top-level tags live side by side under one element.
///
/// # Example
///
/// ```rust
/// use notemark::{parse_html, Converter};
///
/// let node = parse_html("Title<div>Body</div>");
///
/// let converter = Converter::new();
/// let markdown = converter.convert(&node).unwrap();
/// assert_eq!(markdown, "# Title\nBody\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    if html.contains("<html>") || html.contains("<body>") {
        let document = Html::parse_document(html);
        let root = document.root_element();
        let body = root
            .children()
            .filter_map(ElementRef::wrap)
            .find(|child| child.value().name() == "body")
            .unwrap_or(root);
        return scraper_to_node(body, 0);
    }

    let fragment = Html::parse_fragment(html);
    scraper_to_node(fragment.root_element(), 0)
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef, depth: usize) -> Node {
    let tag = element.value().name();

    // Collect attributes
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(tag, attrs);

    if depth >= MAX_DEPTH {
        log::warn!(
            "<{}> nested deeper than {} elements, keeping its text only",
            tag,
            MAX_DEPTH
        );
        node.add_child(Node::text(&element.text().collect::<String>()));
        return node;
    }

    // Process children; comments and doctypes are dropped
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element, depth + 1));
                }
            }
            _ => {}
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Converter;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_fragment_root() {
        let node = parse_html("<p>Hello World</p>");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), Some("html"));
        assert_eq!(node.element_children().next().map(|e| e.tag.as_str()), Some("p"));
    }

    #[test]
    fn test_parse_keeps_top_level_text() {
        let node = parse_html("Title<div>Body</div>");
        let first = node.children().next();
        assert_eq!(first, Some(&Node::text("Title")));
    }

    #[test]
    fn test_parse_document_uses_body() {
        let node = parse_html("<html><head><title>x</title></head><body><p>Hi</p></body></html>");
        assert_eq!(node.tag_name(), Some("body"));
        assert_eq!(node.text_content(), "Hi");
    }

    #[test]
    fn test_parse_drops_comments() {
        let node = parse_html("<div>a<!-- note -->b</div>");
        assert_eq!(node.text_content(), "ab");
    }

    #[test]
    fn test_attributes_are_kept() {
        let node = parse_html(r#"<a HREF="https://example.com" title="T">x</a>"#);
        let Some(a) = node.element_children().next() else {
            panic!("expected an element");
        };
        assert_eq!(a.attr("href"), Some("https://example.com"));
        assert_eq!(a.attr("title"), Some("T"));
    }

    #[test]
    fn test_convert_html() {
        let converter = Converter::new();
        let result = converter
            .convert_html("<p>Hello <strong>World</strong></p>")
            .unwrap();
        assert_eq!(result, "Hello **World**\n\n");
    }

    #[test]
    fn test_convert_html_heading() {
        let converter = Converter::new();
        let result = converter.convert_html("<h1>Title</h1>").unwrap();
        assert_eq!(result, "# Title\n\n");
    }

    #[test]
    fn test_convert_bytes_rejects_invalid_utf8() {
        let converter = Converter::new();
        assert!(matches!(
            converter.convert_bytes(&[0x3c, 0x70, 0xff, 0xfe]),
            Err(crate::NotemarkError::InvalidInput(_))
        ));
        assert_eq!(converter.convert_bytes(b"<b>ok</b>").unwrap(), "**ok**");
    }

    #[test]
    fn test_deep_nesting_is_capped() {
        let depth = MAX_DEPTH + 50;
        let html = format!("{}core{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let converter = Converter::new();
        assert_eq!(converter.convert_html(&html).unwrap(), "core");
    }
}
