//! Document tree handed to the converter.
//!
//! Any HTML parser can build this structure; the `html` feature ships an
//! adapter over scraper/html5ever. The tree is owned top-down: a parent owns
//! its children and there are no parent pointers. Code that needs to look
//! upwards gets a [`NodeRef`] carrying the ancestor chain instead.

use indexmap::IndexMap;

/// A node of the document tree: either a text leaf or an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text leaf with its raw (unnormalized) content
    Text(String),
    /// Element with a tag name, attributes and ordered children
    Element(Element),
}

/// An element node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name, e.g. `"div"`
    pub tag: String,
    /// Attributes keyed by lowercase name, in source order
    pub attributes: IndexMap<String, String>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag_name);
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        Node::Element(element)
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// The element behind this node, if it is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Get the tag name, `None` for text nodes
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag.as_str())
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element()?.attr(name)
    }

    /// Get all child nodes. Text nodes have none.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.as_element().into_iter().flat_map(|e| e.children.iter())
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children().filter_map(Node::as_element)
    }

    /// Add a child node. Adding to a text node is a no-op.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Set an attribute. Setting on a text node is a no-op.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Node::Element(element) = self {
            element.set_attr(name, value);
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(content) => content.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

impl Element {
    /// Create an empty element; the tag name is lower-cased
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag: tag_name.to_lowercase(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name.to_lowercase().as_str())
            .map(String::as_str)
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_lowercase(), value.to_string());
    }

    /// Concatenated text of all descendant text leaves.
    ///
    /// Walks with an explicit stack so arbitrarily deep trees are safe.
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            match node {
                Node::Text(content) => result.push_str(content),
                Node::Element(element) => stack.extend(element.children.iter().rev()),
            }
        }
        result
    }
}

/// An element together with its position in the tree.
///
/// `ancestors` runs from the root down to the direct parent (nearest last);
/// `position` is the element's index in its parent's child list.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    /// The element itself
    pub element: &'a Element,
    ancestors: &'a [&'a Element],
    position: usize,
}

impl<'a> NodeRef<'a> {
    /// Create a NodeRef with no ancestors
    pub fn new(element: &'a Element) -> Self {
        Self {
            element,
            ancestors: &[],
            position: 0,
        }
    }

    /// Create a NodeRef with an ancestor chain
    pub fn with_ancestors(
        element: &'a Element,
        ancestors: &'a [&'a Element],
        position: usize,
    ) -> Self {
        Self {
            element,
            ancestors,
            position,
        }
    }

    /// The direct parent, if any
    pub fn parent(&self) -> Option<&'a Element> {
        self.ancestors.last().copied()
    }

    /// Get the parent tag name if known
    pub fn parent_tag(&self) -> Option<&'a str> {
        self.parent().map(|p| p.tag.as_str())
    }

    /// Ancestors from the direct parent up to the root
    pub fn ancestors(&self) -> impl Iterator<Item = &'a Element> {
        self.ancestors.iter().rev().copied()
    }

    /// 1-based position among the parent's children sharing this tag.
    ///
    /// Without a parent the element counts as the first of its kind.
    pub fn ordinal(&self) -> usize {
        let Some(parent) = self.parent() else {
            return 1;
        };
        parent
            .children
            .iter()
            .take(self.position + 1)
            .filter(|child| child.tag_name() == Some(self.tag_name()))
            .count()
    }

    /// Delegate to Element methods
    pub fn tag_name(&self) -> &'a str {
        &self.element.tag
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.attr(name)
    }
}
