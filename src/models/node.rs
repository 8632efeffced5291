//! Document tree nodes
//!
//! A document is an ordered tree of two node kinds: text leaves, which carry
//! the characters, and containers, which carry a tag (and optional class)
//! and own an ordered list of children. Containers contribute no text of
//! their own.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Child-index path from the document root to a node.
///
/// `[2, 0]` is the first child of the root's third child.
pub type NodePath = Vec<usize>;

/// A run of plain text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLeaf {
    pub text: String,
}

impl TextLeaf {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A formatting wrapper (`<b>`, `<span class="highlight">`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerNode {
    pub tag: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Attributes other than `class`, kept so markup round-trips
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,

    #[serde(default)]
    pub children: Vec<Node>,
}

impl ContainerNode {
    /// Create an empty container with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an empty container carrying a class attribute
    pub fn with_class(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            ..Self::new(tag)
        }
    }

    /// Builder-style child append
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Copy of this container with the same tag and attributes but no children
    pub fn shallow_clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            class: self.class.clone(),
            attrs: self.attrs.clone(),
            children: Vec::new(),
        }
    }

    /// Tag comparison is ASCII case-insensitive, like HTML tag selectors
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// True if `class` appears as one of the whitespace-separated class tokens
    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .map(|c| c.split_whitespace().any(|token| token == class))
            .unwrap_or(false)
    }

    /// Concatenated text of all descendant leaves
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Degenerate container: no children, hence no text
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A document tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Text(TextLeaf),
    Element(ContainerNode),
}

impl Node {
    /// Shorthand for a text leaf node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextLeaf::new(text))
    }

    /// Shorthand for a container node with the given children
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        let mut container = ContainerNode::new(tag);
        container.children = children;
        Node::Element(container)
    }

    pub fn as_element(&self) -> Option<&ContainerNode> {
        match self {
            Node::Element(container) => Some(container),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ContainerNode> {
        match self {
            Node::Element(container) => Some(container),
            Node::Text(_) => None,
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(leaf) => out.push_str(&leaf.text),
            Node::Element(container) => {
                for child in &container.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<TextLeaf> for Node {
    fn from(leaf: TextLeaf) -> Self {
        Node::Text(leaf)
    }
}

impl From<ContainerNode> for Node {
    fn from(container: ContainerNode) -> Self {
        Node::Element(container)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}
