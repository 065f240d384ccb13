//! List renderers.
//!
//! Markers are derived from where an element sits in the tree rather than
//! carried through the traversal: a `li` can hold a nested list whose items
//! number independently, and the ancestor chain answers both questions.

use crate::node::NodeRef;
use crate::options::ConversionOptions;
use crate::utilities::indent;

/// Render an `<ol>` or `<ul>`.
///
/// A list with list-related ancestors is nested: its block is pushed one
/// tab stop to the right and framed by newlines. Top-level lists pass their
/// items through; spacing around them belongs to the surrounding blocks.
pub fn list(node: &NodeRef, content: &str) -> String {
    if nesting_level(node) == 0 {
        return content.to_string();
    }
    format!("\n{}\n", indent(content, 1))
}

/// Render a `<li>`: numbered under `ol`, bulleted otherwise.
pub fn list_item(node: &NodeRef, content: &str, options: &ConversionOptions) -> String {
    let bullet = if node.parent_tag() == Some("ol") {
        format!("{}.", node.ordinal())
    } else {
        bullet_for_depth(bullet_depth(node), &options.bullets)
    };
    format!("{bullet} {content}\n")
}

/// Number of `li`/`ol`/`ul` ancestors of a list element.
///
/// The element itself is a list, so counting it and starting from -1 is the
/// same as counting only its ancestors.
fn nesting_level(node: &NodeRef) -> usize {
    node.ancestors().filter(|a| is_list_tag(&a.tag)).count()
}

/// Number of `ul` ancestors of an item, minus one.
///
/// An item in a top-level `ul` sits at depth 0; an orphan item at -1.
fn bullet_depth(node: &NodeRef) -> isize {
    let uls = node.ancestors().filter(|a| a.tag == "ul").count();
    isize::try_from(uls).unwrap_or(isize::MAX) - 1
}

/// Pick the glyph for `depth`, cycling through `bullets`.
///
/// Negative depths wrap from the end. An empty glyph list falls back to `*`.
fn bullet_for_depth(depth: isize, bullets: &[char]) -> String {
    let Ok(len) = isize::try_from(bullets.len()) else {
        return "*".to_string();
    };
    if len == 0 {
        return "*".to_string();
    }
    let index = depth.rem_euclid(len).unsigned_abs();
    bullets.get(index).copied().unwrap_or('*').to_string()
}

fn is_list_tag(tag: &str) -> bool {
    matches!(tag, "li" | "ol" | "ul")
}
