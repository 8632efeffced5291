//! Document root and tree addressing
//!
//! The root is a container owned by the host (the editable surface). The
//! engine never replaces it, only rewrites what is below it. Nodes are
//! addressed by [`NodePath`]s relative to the root; paths are recomputed for
//! every operation and never cached across calls.

use super::config::EditorConfig;
use super::node::{ContainerNode, Node, NodePath, TextLeaf};
use serde::{Deserialize, Serialize};

/// Tag given to roots built from bare children
pub const ROOT_TAG: &str = "div";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub root: ContainerNode,

    #[serde(default)]
    pub config: EditorConfig,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::from_root(ContainerNode::new(ROOT_TAG))
    }

    /// Wrap an existing root container
    pub fn from_root(root: ContainerNode) -> Self {
        Self {
            root,
            config: EditorConfig::default(),
        }
    }

    /// Build a document whose root holds `children`
    pub fn from_children(children: Vec<Node>) -> Self {
        let mut root = ContainerNode::new(ROOT_TAG);
        root.children = children;
        Self::from_root(root)
    }

    /// Document holding a single text leaf
    pub fn from_text(text: &str) -> Self {
        Self::from_children(vec![Node::text(text)])
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Node at `path`; the empty path names the root, which is not a [`Node`]
    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        let (last, parent_path) = path.split_last()?;
        self.container_at(parent_path)?.children.get(*last)
    }

    /// Container at `path` (the root for the empty path)
    pub fn container_at(&self, path: &[usize]) -> Option<&ContainerNode> {
        let mut current = &self.root;
        for &index in path {
            current = current.children.get(index)?.as_element()?;
        }
        Some(current)
    }

    pub fn container_at_mut(&mut self, path: &[usize]) -> Option<&mut ContainerNode> {
        let mut current = &mut self.root;
        for &index in path {
            current = current.children.get_mut(index)?.as_element_mut()?;
        }
        Some(current)
    }

    /// Visit every node below the root in document order (pre-order)
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&NodePath, &'a Node)) {
        fn walk_children<'a>(
            children: &'a [Node],
            path: &mut NodePath,
            visit: &mut impl FnMut(&NodePath, &'a Node),
        ) {
            for (index, child) in children.iter().enumerate() {
                path.push(index);
                visit(path, child);
                if let Node::Element(container) = child {
                    walk_children(&container.children, path, visit);
                }
                path.pop();
            }
        }

        let mut path = NodePath::new();
        walk_children(&self.root.children, &mut path, &mut visit);
    }

    /// All text leaves in document order with their paths
    pub fn leaves(&self) -> Vec<(NodePath, &TextLeaf)> {
        let mut leaves = Vec::new();
        self.walk(|path, node| {
            if let Node::Text(leaf) = node {
                leaves.push((path.clone(), leaf));
            }
        });
        leaves
    }

    /// Paths of all containers below the root matching `predicate`, in document order
    pub fn find_elements(&self, predicate: impl Fn(&ContainerNode) -> bool) -> Vec<NodePath> {
        let mut paths = Vec::new();
        self.walk(|path, node| {
            if let Node::Element(container) = node {
                if predicate(container) {
                    paths.push(path.clone());
                }
            }
        });
        paths
    }

    /// Paths of all containers with the given tag
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodePath> {
        self.find_elements(|c| c.has_tag(tag))
    }

    /// Paths of all containers carrying the given class token
    pub fn elements_by_class(&self, class: &str) -> Vec<NodePath> {
        self.find_elements(|c| c.has_class(class))
    }

    /// Whole-document text (the linear projection)
    pub fn text_content(&self) -> String {
        self.root.text_content()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
