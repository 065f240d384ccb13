//! # notemark
//!
//! Render HTML notes as Markdown.
//!
//! Notes exported from mail-backed stores (Apple Notes over IMAP and the
//! like) carry loosely structured HTML: bare title text followed by `div`s,
//! `br`s and lists. This crate turns such a body into Markdown with a single
//! post-order walk over the document tree.
//!
//! ## Design
//!
//! The converter works on a [`Node`] tree, so any HTML parser can feed it:
//!
//! - **Parser agnostic**: build the tree yourself, or enable the `html`
//!   feature (on by default) to parse strings with scraper/html5ever
//! - **Ancestor aware**: list markers and indentation come from each
//!   element's position in the tree, not from traversal state
//! - **Pure**: a conversion has no side effects, so the same input always
//!   yields the same Markdown
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use notemark::{Converter, Node};
//!
//! let converter = Converter::new();
//!
//! let mut root = Node::element("div");
//! root.add_child(Node::text("Groceries"));
//! let mut div = Node::element("div");
//! div.add_child(Node::text("milk"));
//! root.add_child(div);
//!
//! let markdown = converter.convert(&root).unwrap();
//! assert_eq!(markdown, "# Groceries\nmilk\n");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use notemark::Converter;
//!
//! let converter = Converter::new();
//! let markdown = converter.convert_html("<h2>Hello <em>World</em></h2>").unwrap();
//! assert_eq!(markdown, "## Hello *World*\n\n");
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
pub mod note;
mod options;
mod rules;
mod service;
mod utilities;

#[cfg(feature = "html")]
pub use html::{parse_html, MAX_DEPTH};
pub use node::{Element, Node, NodeRef};
pub use options::{ConversionOptions, HeadingStyle, DEFAULT_BULLETS};
pub use rules::Tag;
pub use service::Converter;
pub use utilities::{escape, indent, process_text};

/// Error type for notemark operations
#[derive(Debug, thiserror::Error)]
pub enum NotemarkError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, NotemarkError>;

/// Convert an HTML note to Markdown with default options.
#[cfg(feature = "html")]
pub fn markdownify(html: &str) -> Result<String> {
    Converter::new().convert_html(html)
}
