//! Tag dispatch for HTML to Markdown conversion.
//!
//! Every tag the converter knows is a [`Tag`] variant; [`render`] matches on
//! it and hands the element plus its already rendered children to the
//! matching renderer. Tags outside the enum keep their children's text and
//! drop the wrapper.

mod block;
mod inline;
mod list;

use crate::node::NodeRef;
use crate::options::ConversionOptions;

/// Highest heading level the converter renders (`h1`..`h9`)
pub const MAX_HEADING_LEVEL: u8 = 9;

/// Tags with a dedicated renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    A,
    Blockquote,
    Br,
    Em,
    I,
    /// `h1`..`h9`, carrying the level
    Heading(u8),
    Li,
    Ol,
    Ul,
    Div,
    P,
    Strong,
    B,
    Img,
}

impl Tag {
    /// Look up a lowercase tag name
    pub fn from_name(name: &str) -> Option<Self> {
        let tag = match name {
            "a" => Tag::A,
            "blockquote" => Tag::Blockquote,
            "br" => Tag::Br,
            "em" => Tag::Em,
            "i" => Tag::I,
            "li" => Tag::Li,
            "ol" => Tag::Ol,
            "ul" => Tag::Ul,
            "div" => Tag::Div,
            "p" => Tag::P,
            "strong" => Tag::Strong,
            "b" => Tag::B,
            "img" => Tag::Img,
            _ => return heading_level(name).map(Tag::Heading),
        };
        Some(tag)
    }
}

/// Parse `h1`..`h9` into its level
fn heading_level(name: &str) -> Option<u8> {
    let digits = name.strip_prefix('h')?;
    if digits.len() != 1 {
        return None;
    }
    let level = digits.parse::<u8>().ok()?;
    (1..=MAX_HEADING_LEVEL).contains(&level).then_some(level)
}

/// Render an element given the text of its already converted children.
pub fn render(node: &NodeRef, content: &str, options: &ConversionOptions) -> String {
    let Some(tag) = Tag::from_name(node.tag_name()) else {
        return content.to_string();
    };

    match tag {
        Tag::A => inline::link(node, content),
        Tag::Blockquote => block::blockquote(content),
        Tag::Br => inline::line_break(),
        Tag::Em | Tag::I => inline::emphasis(content),
        Tag::Heading(level) => block::heading(level, content, options),
        Tag::Li => list::list_item(node, content, options),
        Tag::Ol | Tag::Ul => list::list(node, content),
        Tag::Div => block::div(content),
        Tag::P => block::paragraph(content),
        Tag::Strong | Tag::B => inline::strong(content),
        Tag::Img => inline::image(node),
    }
}
