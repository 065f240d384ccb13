//! Converter - the main entry point for HTML to Markdown conversion.

use crate::node::{Element, Node, NodeRef};
use crate::options::ConversionOptions;
use crate::rules;
use crate::utilities::process_text;
use crate::Result;

/// Leading bare text shorter than this (newline included) becomes a title
const TITLE_MAX_LEN: usize = 80;

/// Nesting depth past which subtrees are rendered as plain text
const MAX_RENDER_DEPTH: usize = 512;

/// The main service for converting document trees to Markdown
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConversionOptions,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom options
    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Convert a document tree to Markdown.
    ///
    /// `root` is the container of the document: its own tag is never
    /// rendered, only its children are, and bare text in front of its first
    /// child element is promoted to a title.
    pub fn convert(&self, root: &Node) -> Result<String> {
        self.options.validate()?;

        let markdown = match root {
            Node::Text(content) => process_text(content),
            Node::Element(element) => self.process_root(element),
        };

        log::debug!("converted document to {} bytes of markdown", markdown.len());
        Ok(markdown)
    }

    /// Convert HTML to Markdown
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<String> {
        log::debug!("parsing {} bytes of html", html.len());
        self.convert(&crate::html::parse_html(html))
    }

    /// Convert raw HTML bytes to Markdown; the bytes must be UTF-8
    #[cfg(feature = "html")]
    pub fn convert_bytes(&self, html: &[u8]) -> Result<String> {
        let html = std::str::from_utf8(html).map_err(|e| {
            crate::NotemarkError::InvalidInput(format!("html is not valid UTF-8: {e}"))
        })?;
        self.convert_html(html)
    }

    /// Get the current options
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Process the document container: children only, with title promotion
    fn process_root(&self, root: &Element) -> String {
        let mut text = String::new();
        let mut tags_found = false;
        let mut ancestors = vec![root];

        for (position, child) in root.children.iter().enumerate() {
            match child {
                Node::Text(content) => text.push_str(&process_text(content)),
                Node::Element(element) => {
                    if !tags_found {
                        promote_title(&mut text);
                        tags_found = true;
                    }
                    text.push_str(&self.process_element(element, position, &mut ancestors));
                }
            }
        }

        text
    }

    /// Process an element: children first, then its tag's renderer
    fn process_element<'a>(
        &self,
        element: &'a Element,
        position: usize,
        ancestors: &mut Vec<&'a Element>,
    ) -> String {
        if ancestors.len() >= MAX_RENDER_DEPTH {
            log::warn!(
                "<{}> nested deeper than {} elements, rendering as plain text",
                element.tag,
                MAX_RENDER_DEPTH
            );
            return process_text(&element.text_content());
        }

        // Process children first
        ancestors.push(element);
        let mut content = String::new();
        for (index, child) in element.children.iter().enumerate() {
            match child {
                Node::Text(text) => content.push_str(&process_text(text)),
                Node::Element(child) => {
                    content.push_str(&self.process_element(child, index, ancestors))
                }
            }
        }
        ancestors.pop();

        let node = NodeRef::with_ancestors(element, ancestors, position);
        rules::render(&node, &content, &self.options)
    }
}

/// Turn bare leading text into a heading line.
///
/// Runs once, when the first element of the document is reached. Short text
/// becomes `# text`; long text is kept as a plain line.
fn promote_title(text: &mut String) {
    if text.is_empty() {
        return;
    }
    text.push('\n');
    if text.chars().count() < TITLE_MAX_LEN {
        text.insert_str(0, "# ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::HeadingStyle;
    use crate::NotemarkError;
    use pretty_assertions::assert_eq;

    fn root(children: Vec<Node>) -> Node {
        let mut root = Node::element("div");
        for child in children {
            root.add_child(child);
        }
        root
    }

    fn with_text(tag: &str, text: &str) -> Node {
        let mut node = Node::element(tag);
        node.add_child(Node::text(text));
        node
    }

    fn convert(node: &Node) -> String {
        Converter::new().convert(node).unwrap()
    }

    #[test]
    fn test_root_tag_is_not_rendered() {
        let doc = with_text("p", "bare");
        assert_eq!(convert(&doc), "bare");
    }

    #[test]
    fn test_paragraph() {
        let doc = root(vec![with_text("p", "Hello World")]);
        assert_eq!(convert(&doc), "Hello World\n\n");
    }

    #[test]
    fn test_text_root() {
        assert_eq!(convert(&Node::text("a  b_c")), r"a b\_c");
    }

    #[test]
    fn test_emphasis() {
        let doc = root(vec![with_text("em", "emphasized")]);
        assert_eq!(convert(&doc), "*emphasized*");
    }

    #[test]
    fn test_strong() {
        let doc = root(vec![with_text("b", "bold")]);
        assert_eq!(convert(&doc), "**bold**");
    }

    #[test]
    fn test_unknown_tags_keep_children() {
        let mut span = Node::element("span");
        span.add_child(with_text("strong", "x"));
        span.add_child(Node::text(" y"));
        let doc = root(vec![span]);
        assert_eq!(convert(&doc), "**x** y");
    }

    #[test]
    fn test_title_promotion() {
        let doc = root(vec![Node::text("Shopping"), with_text("div", "milk")]);
        assert_eq!(convert(&doc), "# Shopping\nmilk\n");
    }

    #[test]
    fn test_title_promotion_happens_once() {
        let doc = root(vec![
            Node::text("Title"),
            with_text("div", "a"),
            Node::text("later"),
            with_text("div", "b"),
        ]);
        assert_eq!(convert(&doc), "# Title\na\nlaterb\n");
    }

    #[test]
    fn test_title_promotion_length_boundary() {
        let short = "x".repeat(78);
        let doc = root(vec![Node::text(&short), Node::element("br")]);
        assert_eq!(convert(&doc), format!("# {short}\n\n"));

        let long = "x".repeat(79);
        let doc = root(vec![Node::text(&long), Node::element("br")]);
        assert_eq!(convert(&doc), format!("{long}\n\n"));
    }

    #[test]
    fn test_no_title_without_leading_text() {
        let doc = root(vec![with_text("div", "a"), Node::text("b")]);
        assert_eq!(convert(&doc), "a\nb");
    }

    #[test]
    fn test_no_title_in_text_only_document() {
        let doc = root(vec![Node::text("only text")]);
        assert_eq!(convert(&doc), "only text");
    }

    #[test]
    fn test_heading_styles() {
        let doc = root(vec![with_text("h1", "Title")]);
        let setext = Converter::with_options(
            ConversionOptions::default().with_heading_style(HeadingStyle::Setext),
        );
        assert_eq!(setext.convert(&doc).unwrap(), "Title\n=====\n\n");
        assert_eq!(convert(&doc), "# Title\n\n");
    }

    #[test]
    fn test_ordered_list() {
        let mut ol = Node::element("ol");
        ol.add_child(with_text("li", "One"));
        ol.add_child(with_text("li", "Two"));
        let doc = root(vec![ol]);
        assert_eq!(convert(&doc), "1. One\n2. Two\n");
    }

    #[test]
    fn test_nested_unordered_list() {
        let mut inner = Node::element("ul");
        inner.add_child(with_text("li", "b"));
        let mut item = with_text("li", "a");
        item.add_child(inner);
        let mut outer = Node::element("ul");
        outer.add_child(item);
        let doc = root(vec![outer]);
        assert_eq!(convert(&doc), "* a\n\t+ b\n\t\n\n");
    }

    #[test]
    fn test_invalid_options() {
        let converter = Converter::with_options(ConversionOptions::default().with_bullets(""));
        assert!(matches!(
            converter.convert(&root(vec![])),
            Err(NotemarkError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_with_options_keeps_options() {
        let options = ConversionOptions::default()
            .with_heading_style(HeadingStyle::Setext)
            .with_bullets("-");
        let converter = Converter::with_options(options.clone());
        assert_eq!(converter.options(), &options);
        assert_eq!(Converter::new().options(), &ConversionOptions::default());
    }

    #[test]
    fn test_deterministic() {
        let doc = root(vec![Node::text("T"), with_text("p", "x_y")]);
        let converter = Converter::new();
        assert_eq!(converter.convert(&doc).unwrap(), converter.convert(&doc).unwrap());
    }

    #[test]
    fn test_depth_cap_flattens_to_text() {
        let mut node = with_text("em", "deep_text");
        for _ in 0..(MAX_RENDER_DEPTH + 10) {
            let mut parent = Node::element("span");
            parent.add_child(node);
            node = parent;
        }
        let doc = root(vec![node]);
        assert_eq!(convert(&doc), r"deep\_text");
    }
}
